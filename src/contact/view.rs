use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{self, Array};
use web_sys::{
    Event, FormData, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::transport::GlooFormTransport;
use super::validation::{ContactFields, FieldValidity};
use super::{ContactFormSubmitter, FormPayload, FormView, MessageKind};
use crate::config::SiteConfig;
use crate::dom::bind::{ContactElements, FieldElement, MessagePanel};
use crate::dom::listener::EventListener;
use crate::error::SiteError;
use crate::notification::{NotificationEmitter, NotificationKind};

pub struct DomFormView {
    elements: ContactElements,
    idle_label: String,
    pending_label: &'static str,
    hidden_class: &'static str,
    notifier: Rc<NotificationEmitter>,
}

impl DomFormView {
    pub fn new(
        elements: ContactElements,
        config: &SiteConfig,
        notifier: Rc<NotificationEmitter>,
    ) -> Self {
        let idle_label = elements
            .submit
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default();
        Self {
            elements,
            idle_label,
            pending_label: config.pending_label,
            hidden_class: config.hidden_class,
            notifier,
        }
    }

    fn fields_payload(&self) -> FormPayload {
        let fields = self.read_fields();
        vec![
            ("name".to_string(), fields.name),
            ("email".to_string(), fields.email),
            ("message".to_string(), fields.message),
        ]
    }

    fn show_in_panel(&self, panel: &MessagePanel, text: &str, kind: MessageKind) {
        let _ = panel.success.class_list().add_1(self.hidden_class);
        let _ = panel.error.class_list().add_1(self.hidden_class);

        let target = match kind {
            MessageKind::Success => &panel.success,
            MessageKind::Error => &panel.error,
        };
        set_message_text(target, text);
        let _ = target.class_list().remove_1(self.hidden_class);
        let _ = panel.container.class_list().remove_1(self.hidden_class);

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        panel
            .container
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Message containers read `<strong>Label</strong> text`; only the text changes.
fn set_message_text(container: &HtmlElement, text: &str) {
    let slot = container
        .query_selector("strong")
        .ok()
        .flatten()
        .and_then(|label| label.next_sibling());
    match slot {
        Some(node) => node.set_text_content(Some(text)),
        None => container.set_text_content(Some(text)),
    }
}

fn mark_field(field: &FieldElement, valid: bool) {
    let element = field.as_element();
    let _ = if valid {
        element.remove_attribute("aria-invalid")
    } else {
        element.set_attribute("aria-invalid", "true")
    };
}

impl FormView for DomFormView {
    fn read_fields(&self) -> ContactFields {
        ContactFields::new(
            &self.elements.name.value(),
            &self.elements.email.value(),
            &self.elements.message.value(),
        )
    }

    fn payload(&self) -> FormPayload {
        let Ok(form_data) = FormData::new_with_form(&self.elements.form) else {
            return self.fields_payload();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&form_data) else {
            return self.fields_payload();
        };
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.dyn_into::<Array>().ok())
            .filter_map(|pair| Some((pair.get(0).as_string()?, pair.get(1).as_string()?)))
            .collect()
    }

    fn endpoint(&self) -> String {
        self.elements.form.action()
    }

    fn mark_validity(&self, validity: FieldValidity) {
        mark_field(&self.elements.name, validity.name);
        mark_field(&self.elements.email, validity.email);
        mark_field(&self.elements.message, validity.message);
    }

    fn set_busy(&self, busy: bool) {
        let Some(button) = &self.elements.submit else {
            return;
        };
        button.set_disabled(busy);
        let label = if busy {
            self.pending_label
        } else {
            self.idle_label.as_str()
        };
        button.set_text_content(Some(label));
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        match &self.elements.messages {
            Some(panel) => self.show_in_panel(panel, text, kind),
            None => {
                let kind = match kind {
                    MessageKind::Success => NotificationKind::Success,
                    MessageKind::Error => NotificationKind::Error,
                };
                self.notifier.notify(text, kind);
            }
        }
    }

    fn reset(&self) {
        self.elements.form.reset();
    }
}

pub type DomContactForm = ContactFormSubmitter<DomFormView, GlooFormTransport>;

/// The submitter plus the form's `submit` listener.
pub struct ContactBinding {
    submitter: Rc<DomContactForm>,
    _listener: EventListener,
}

impl ContactBinding {
    pub fn attach(
        elements: ContactElements,
        config: &SiteConfig,
        notifier: Rc<NotificationEmitter>,
    ) -> Result<Self, SiteError> {
        let form = elements.form.clone();
        let submitter = Rc::new(ContactFormSubmitter::new(
            DomFormView::new(elements, config, notifier),
            GlooFormTransport,
            config.success_text,
            config.failure_text,
        ));

        let listener = EventListener::new(&form, "submit", {
            let submitter = submitter.clone();
            move |event: Event| {
                event.prevent_default();
                let submitter = submitter.clone();
                spawn_local(async move {
                    submitter.submit().await;
                });
            }
        })?;

        Ok(Self {
            submitter,
            _listener: listener,
        })
    }

    pub fn submitter(&self) -> &DomContactForm {
        &self.submitter
    }
}
