//! Toast-style notifications: one at a time, auto-dismissed after a timeout
//! (5 seconds by default).

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::dom::listener::EventListener;
use crate::error::SiteError;

const NOTIFICATION_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    background: var(--accent); color: var(--bg-dark); padding: 1rem 1.5rem; \
    border-radius: 0.5rem; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
    z-index: 10000; max-width: 400px; animation: slideInRight 0.3s ease;";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Unknown kinds fall back to `Info`.
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// Detach `element` if it is still attached. Safe to call repeatedly.
fn dismiss(element: &Element) {
    if element.parent_element().is_some() {
        element.remove();
    }
}

/// The notification currently on screen. Dropping it cancels the pending
/// auto-dismiss and unhooks the close button.
struct ActiveNotification {
    element: Element,
    _close: EventListener,
    _timeout: Timeout,
}

pub struct NotificationEmitter {
    document: Document,
    body: Option<HtmlElement>,
    timeout_ms: u32,
    active: RefCell<Option<ActiveNotification>>,
}

impl NotificationEmitter {
    pub fn new(document: Document, body: Option<HtmlElement>, timeout_ms: u32) -> Self {
        Self {
            document,
            body,
            timeout_ms,
            active: RefCell::new(None),
        }
    }

    pub fn notify(&self, message: &str, kind: NotificationKind) {
        self.clear();
        let Some(body) = &self.body else {
            log::debug!("No <body>, dropping notification: {}", message);
            return;
        };
        match self.build(message, kind) {
            Ok(active) => {
                if let Err(e) = body.append_child(&active.element) {
                    log::warn!("Failed to show notification: {:?}", e);
                    return;
                }
                *self.active.borrow_mut() = Some(active);
            }
            Err(e) => log::warn!("Failed to build notification: {}", e),
        }
    }

    /// Remove every notification on the page, ours or not.
    pub fn clear(&self) {
        if let Some(active) = self.active.borrow_mut().take() {
            dismiss(&active.element);
        }
        if let Ok(existing) = self.document.query_selector_all(".notification") {
            for index in 0..existing.length() {
                if let Some(element) = existing
                    .item(index)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                {
                    dismiss(&element);
                }
            }
        }
    }

    fn build(
        &self,
        message: &str,
        kind: NotificationKind,
    ) -> Result<ActiveNotification, SiteError> {
        let element = self.document.create_element("div")?;
        element.set_class_name(&kind.class_name());
        element.set_attribute("style", NOTIFICATION_STYLE)?;
        element.set_attribute("role", "status")?;

        let content = self.document.create_element("div")?;
        content.set_class_name("notification-content");

        let text = self.document.create_element("span")?;
        text.set_text_content(Some(message));

        let close = self.document.create_element("button")?;
        close.set_class_name("notification-close");
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", "Close notification")?;
        close.set_text_content(Some("\u{00d7}"));

        content.append_child(&text)?;
        content.append_child(&close)?;
        element.append_child(&content)?;

        let close = EventListener::new(&close, "click", {
            let element = element.clone();
            move |_: Event| dismiss(&element)
        })?;
        let timeout = Timeout::new(self.timeout_ms, {
            let element = element.clone();
            move || dismiss(&element)
        });

        Ok(ActiveNotification {
            element,
            _close: close,
            _timeout: timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_defaults_to_info() {
        assert_eq!(NotificationKind::parse("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::parse("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::parse("warning"), NotificationKind::Warning);
        assert_eq!(NotificationKind::parse("info"), NotificationKind::Info);
        assert_eq!(NotificationKind::parse("shout"), NotificationKind::Info);
    }

    #[test]
    fn class_name_carries_kind() {
        assert_eq!(
            NotificationKind::Error.class_name(),
            "notification notification-error"
        );
        assert_eq!(
            NotificationKind::default().class_name(),
            "notification notification-info"
        );
    }
}
