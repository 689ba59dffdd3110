//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get `<body>`.
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Get the document root element (`<html>`), where theme variables live.
pub fn document_root() -> Option<HtmlElement> {
    window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Monotonic milliseconds since page load, `0` if unavailable.
pub fn now_ms() -> u64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now().max(0.0) as u64)
        .unwrap_or(0)
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window()
        && let Err(e) = window.location().reload()
    {
        log::warn!("page reload failed: {:?}", e);
    }
}
