//! Thin wrappers over `web-sys`: element binding, listeners and observers.

pub mod bind;
pub mod listener;
pub mod visibility;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or_else(|| SiteError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document, SiteError> {
    window()?
        .document()
        .ok_or_else(|| SiteError::MissingElement("document".to_string()))
}

/// `document.readyState` while the parser is still running.
pub fn is_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Run `f` once the document is parsed: right away, or on `DOMContentLoaded`.
pub fn when_ready<F>(document: &Document, f: F) -> Result<(), SiteError>
where
    F: FnOnce() + 'static,
{
    defer_while_parsing(document, &document.ready_state(), f)
}

/// Like [`when_ready`] with the ready state and event target given.
pub fn defer_while_parsing<F>(
    target: &EventTarget,
    ready_state: &str,
    f: F,
) -> Result<(), SiteError>
where
    F: FnOnce() + 'static,
{
    if !is_parsing(ready_state) {
        f();
        return Ok(());
    }
    // Freed by wasm-bindgen after its single call.
    let callback = Closure::once_into_js(f);
    target.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_state_defers() {
        assert!(is_parsing("loading"));
        assert!(!is_parsing("interactive"));
        assert!(!is_parsing("complete"));
    }
}
