//! Grocery List Frontend
//!
//! Leptos CSR app rendering a list of grocery items that strike through on
//! click and turn bold under the pointer.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod list;
pub mod models;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use app::App;
use config::ListConfig;
use error::MountError;

/// Resolve config and mount the app into its placeholder element.
///
/// Falls back to `<body>` when the placeholder is missing.
pub fn run() {
    console_error_panic_hook::set_once();

    let config = ListConfig::load();

    match mount_target(&config.mount_id) {
        Ok(target) => {
            web_sys::console::log_1(&format!("[APP] Mounting into #{}", config.mount_id).into());
            leptos::mount::mount_to(target, move || view! { <App config=config /> }).forget();
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[APP] {}, mounting to body", e).into());
            mount_to_body(move || view! { <App config=config /> });
        }
    }
}

/// The placeholder element with id `id`
pub fn mount_target(id: &str) -> Result<web_sys::HtmlElement, MountError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or(MountError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))?;
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(id.to_string()))
}
