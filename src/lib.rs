//! Mutually exclusive action panels for server-rendered pages.
//!
//! Pages mark each panel with the `action` class and wire a trigger button to
//! it. Clicking a trigger hides every other panel and flips its own panel
//! between `display: block` and `display: none`, so at most one panel is
//! open at a time.
//!
//! The crate builds to WebAssembly with the `browser` feature, which exports
//! `hideAllOtherActions`, `toggleActionVisibility`,
//! `registerShowActionOnClick` and `registerActionBindings` to JavaScript.
//! Without it the controller runs natively against [`memory::MemoryDom`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Hide, toggle and click registration |
//! | [`dom`] | The `ActionDom` seam the controller runs against |
//! | [`memory`] | In-memory document for native hosts and tests |
//! | `web` | `ActionDom` over `web_sys::Document` (feature `browser`) |
//! | `bindings` | `wasm_bindgen` exports (feature `browser`) |
//! | [`config`] | JSON binding tables and console log level |
//! | [`display`] | The `block` / `none` display states |
//! | [`error`] | `ActionError` |
//! | [`consts`] | Class, property and event names |

#[cfg(feature = "browser")]
pub mod bindings;
pub mod config;
pub mod consts;
pub mod controller;
pub mod display;
pub mod dom;
pub mod error;
pub mod memory;
#[cfg(feature = "browser")]
pub mod web;

pub use controller::ActionController;
pub use error::ActionError;
