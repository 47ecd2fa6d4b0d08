//! JavaScript entry points.
//!
//! Exported under the names page scripts already call. Each call resolves
//! `window.document` afresh and builds a controller over the default
//! `action` group; nothing is kept between calls.

use wasm_bindgen::prelude::*;

use crate::config::{self, ActionConfig};
use crate::controller::ActionController;
use crate::web::WebDom;

fn controller() -> Result<ActionController<WebDom>, JsValue> {
    WebDom::from_window()
        .map(ActionController::new)
        .ok_or_else(|| js_sys::Error::new("no document available").into())
}

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(js_name = initActionPanels)]
pub fn init_action_panels(level: Option<String>) {
    console_error_panic_hook::set_once();
    let level = config::log_level(level.as_deref());
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Hide every `action` panel except `except_id`.
///
/// # Errors
///
/// Throws if there is no document or a style write is rejected.
#[wasm_bindgen(js_name = hideAllOtherActions)]
pub fn hide_all_other_actions(except_id: &str) -> Result<(), JsValue> {
    controller()?.hide_all_other_actions(except_id)?;
    Ok(())
}

/// Flip panel `id` between `block` and `none`; returns the new value.
///
/// # Errors
///
/// Throws `E_MISSING_ELEMENT` if no element has id `id`.
#[wasm_bindgen(js_name = toggleActionVisibility)]
pub fn toggle_action_visibility(id: &str) -> Result<String, JsValue> {
    let next = controller()?.toggle_action_visibility(id)?;
    Ok(next.as_css().to_owned())
}

/// Wire clicks on `button_id` to panel `action_id`. Returns `false` when the
/// button does not exist.
///
/// # Errors
///
/// Throws if there is no document or the listener is rejected.
#[wasm_bindgen(js_name = registerShowActionOnClick)]
pub fn register_show_action_on_click(button_id: &str, action_id: &str) -> Result<bool, JsValue> {
    Ok(controller()?.register_show_action_on_click(button_id, action_id)?)
}

/// Wire every trigger in a JSON binding table. Returns how many were attached.
///
/// # Errors
///
/// Throws `E_CONFIG` / `E_INVALID_BINDING` for a bad table.
#[wasm_bindgen(js_name = registerActionBindings)]
pub fn register_action_bindings(table: &str) -> Result<u32, JsValue> {
    let config = ActionConfig::from_json(table)?;
    let dom = WebDom::from_window().ok_or_else(|| JsValue::from(js_sys::Error::new("no document available")))?;
    let attached = ActionController::from_config(dom, &config).register_all(&config.bindings)?;
    Ok(u32::try_from(attached).unwrap_or(u32::MAX))
}
