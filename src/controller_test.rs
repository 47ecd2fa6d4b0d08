use super::*;
use crate::memory::MemoryDom;

// =============================================================
// Helpers
// =============================================================

fn two_panels() -> (MemoryDom, ActionController<MemoryDom>) {
    let dom = MemoryDom::new();
    dom.insert_action("p1", "none");
    dom.insert_action("p2", "none");
    let controller = ActionController::new(dom.clone());
    (dom, controller)
}

// =============================================================
// hide_all_other_actions
// =============================================================

#[test]
fn hide_spares_only_the_exempt_panel() {
    let dom = MemoryDom::new();
    dom.insert_action("p1", "block");
    dom.insert_action("p2", "block");
    dom.insert_action("p3", "");
    let controller = ActionController::new(dom.clone());

    controller.hide_all_other_actions("p2").unwrap();

    assert_eq!(dom.display_of("p1").as_deref(), Some("none"));
    assert_eq!(dom.display_of("p2").as_deref(), Some("block"));
    assert_eq!(dom.display_of("p3").as_deref(), Some("none"));
}

#[test]
fn hide_with_unknown_id_hides_everything() {
    let dom = MemoryDom::new();
    dom.insert_action("p1", "block");
    dom.insert_action("p2", "none");
    let controller = ActionController::new(dom.clone());

    controller.hide_all_other_actions("nope").unwrap();

    assert_eq!(dom.display_of("p1").as_deref(), Some("none"));
    assert_eq!(dom.display_of("p2").as_deref(), Some("none"));
}

#[test]
fn hide_on_empty_group_is_noop() {
    let dom = MemoryDom::new();
    dom.insert_button("b1");
    let controller = ActionController::new(dom.clone());
    controller.hide_all_other_actions("p1").unwrap();
    assert_eq!(dom.display_of("b1").as_deref(), Some(""));
}

#[test]
fn hide_ignores_elements_outside_the_group() {
    let dom = MemoryDom::new();
    dom.insert("sidebar", &["nav"], "block");
    dom.insert_action("p1", "block");
    let controller = ActionController::new(dom.clone());

    controller.hide_all_other_actions("p2").unwrap();

    assert!(dom.is_shown("sidebar"));
    assert!(!dom.is_shown("p1"));
}

#[test]
fn hide_covers_panels_without_an_id() {
    let dom = MemoryDom::new();
    let anon = dom.insert("", &["action"], "block");
    let controller = ActionController::new(dom.clone());

    controller.hide_all_other_actions("p1").unwrap();

    assert_eq!(dom.display(&anon), "none");
}

#[test]
fn hide_continues_past_a_panel_without_inline_style() {
    let dom = MemoryDom::new();
    dom.insert_action("p1", "block");
    dom.insert_unstyled("math1", &["action"]);
    dom.insert_action("p3", "block");
    dom.insert_unstyled("math2", &["action"]);
    let controller = ActionController::new(dom.clone());

    let err = controller.hide_all_other_actions("x").unwrap_err();

    assert!(matches!(err, ActionError::Style { ref id, .. } if id == "math1"));
    assert!(!dom.is_shown("p1"));
    assert!(!dom.is_shown("p3"));
}

#[test]
fn hide_skips_exempt_unstyled_panel_without_error() {
    let dom = MemoryDom::new();
    dom.insert_unstyled("math1", &["action"]);
    dom.insert_action("p2", "block");
    let controller = ActionController::new(dom.clone());

    controller.hide_all_other_actions("math1").unwrap();
    assert!(!dom.is_shown("p2"));
}

#[test]
fn hide_sees_panels_added_after_construction() {
    let (dom, controller) = two_panels();
    dom.insert_action("late", "block");
    controller.hide_all_other_actions("p1").unwrap();
    assert!(!dom.is_shown("late"));
}

#[test]
fn custom_group_class_scopes_hiding() {
    let dom = MemoryDom::new();
    dom.insert("t1", &["tab"], "block");
    dom.insert_action("p1", "block");
    let controller = ActionController::with_group_class(dom.clone(), "tab");
    assert_eq!(controller.group_class(), "tab");

    controller.hide_all_other_actions("t2").unwrap();

    assert!(!dom.is_shown("t1"));
    assert!(dom.is_shown("p1"));
}

// =============================================================
// toggle_action_visibility
// =============================================================

#[test]
fn toggle_shows_unstyled_panel_first() {
    let dom = MemoryDom::new();
    dom.insert_action("p1", "");
    let controller = ActionController::new(dom.clone());

    assert_eq!(controller.toggle_action_visibility("p1").unwrap(), Display::Block);
    assert!(dom.is_shown("p1"));
}

#[test]
fn toggle_twice_restores_original_value() {
    for original in ["block", "none"] {
        let dom = MemoryDom::new();
        dom.insert_action("p1", original);
        let controller = ActionController::new(dom.clone());

        controller.toggle_action_visibility("p1").unwrap();
        controller.toggle_action_visibility("p1").unwrap();

        assert_eq!(dom.display_of("p1").as_deref(), Some(original));
    }
}

#[test]
fn toggle_treats_non_block_values_as_hidden() {
    let dom = MemoryDom::new();
    dom.insert_action("p1", "flex");
    let controller = ActionController::new(dom.clone());
    assert_eq!(controller.toggle_action_visibility("p1").unwrap(), Display::Block);
}

#[test]
fn toggle_missing_id_is_missing_element() {
    let (dom, controller) = two_panels();
    let err = controller.toggle_action_visibility("doesNotExist").unwrap_err();
    assert!(matches!(err, ActionError::MissingElement(ref id) if id == "doesNotExist"));
    assert_eq!(dom.display_of("p1").as_deref(), Some("none"));
    assert_eq!(dom.display_of("p2").as_deref(), Some("none"));
}

#[test]
fn toggle_works_outside_the_group() {
    let dom = MemoryDom::new();
    dom.insert("loose", &[], "block");
    let controller = ActionController::new(dom.clone());
    assert_eq!(controller.toggle_action_visibility("loose").unwrap(), Display::None);
}

// =============================================================
// register_show_action_on_click
// =============================================================

#[test]
fn register_missing_button_attaches_nothing() {
    let (dom, controller) = two_panels();
    assert!(!controller.register_show_action_on_click("missingButton", "p1").unwrap());
    assert!(dom.click("missingButton").is_empty());
    assert_eq!(dom.display_of("p1").as_deref(), Some("none"));
}

#[test]
fn click_hides_others_and_inverts_target() {
    let (dom, controller) = two_panels();
    dom.insert_button("b1");
    let p2 = dom.element_by_id("p2").unwrap();
    dom.set_raw_display(p2, "block");

    assert!(controller.register_show_action_on_click("b1", "p1").unwrap());
    assert_eq!(dom.listener_count("b1"), 1);

    assert!(dom.click("b1").iter().all(Result::is_ok));
    assert!(dom.is_shown("p1"));
    assert!(!dom.is_shown("p2"));
}

#[test]
fn register_does_not_require_panel_to_exist_yet() {
    let dom = MemoryDom::new();
    dom.insert_button("b1");
    let controller = ActionController::new(dom.clone());
    assert!(controller.register_show_action_on_click("b1", "p1").unwrap());

    dom.insert_action("p1", "none");
    assert!(dom.click("b1").iter().all(Result::is_ok));
    assert!(dom.is_shown("p1"));
}

#[test]
fn click_with_missing_panel_fails_after_hiding() {
    let (dom, controller) = two_panels();
    dom.insert_button("b1");
    let p2 = dom.element_by_id("p2").unwrap();
    dom.set_raw_display(p2, "block");
    controller.register_show_action_on_click("b1", "gone").unwrap();

    let results = dom.click("b1");
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(ActionError::MissingElement(_))));
    assert!(!dom.is_shown("p2"));
}

#[test]
fn show_action_is_the_click_body() {
    let (dom, controller) = two_panels();
    assert_eq!(controller.show_action("p2").unwrap(), Display::Block);
    assert_eq!(controller.show_action("p1").unwrap(), Display::Block);
    assert!(!dom.is_shown("p2"));
}

// =============================================================
// register_all
// =============================================================

#[test]
fn register_all_counts_attached_triggers() {
    let (dom, controller) = two_panels();
    dom.insert_button("b1");
    let bindings = vec![
        TriggerBinding { button_id: "b1".into(), action_id: "p1".into() },
        TriggerBinding { button_id: "b-missing".into(), action_id: "p2".into() },
    ];
    assert_eq!(controller.register_all(&bindings).unwrap(), 1);
    assert_eq!(dom.listener_count("b1"), 1);
}

#[test]
fn from_config_uses_table_group_class() {
    let dom = MemoryDom::new();
    let config = ActionConfig::from_json(r#"{"group_class":"drawer"}"#).unwrap();
    let controller = ActionController::from_config(dom, &config);
    assert_eq!(controller.group_class(), "drawer");
}
