//! Contact form: validation, a single POST to the form service, result panel.

pub mod transport;
pub mod validation;
pub mod view;

use std::cell::Cell;

use crate::error::SiteError;
use validation::{ContactFields, FieldValidity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    NotSubmitted,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Every entry the form would post, in document order.
pub type FormPayload = Vec<(String, String)>;

/// What came back from the form service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReply {
    pub status: u16,
    pub ok: bool,
    /// Error messages the service reported, if any.
    pub errors: Vec<String>,
}

/// Sends the form somewhere. Exactly one call per accepted submission.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post(&self, endpoint: &str, payload: &FormPayload) -> Result<SubmitReply, SiteError>;
}

/// The form as the submitter sees it.
pub trait FormView {
    fn read_fields(&self) -> ContactFields;
    fn payload(&self) -> FormPayload;
    fn endpoint(&self) -> String;
    fn mark_validity(&self, validity: FieldValidity);
    /// Disable the submit control and show the pending label, or restore it.
    fn set_busy(&self, busy: bool);
    fn show_message(&self, text: &str, kind: MessageKind);
    fn reset(&self);
}

pub struct ContactFormSubmitter<V: FormView, T: FormTransport> {
    view: V,
    transport: T,
    outcome: Cell<SubmissionOutcome>,
    success_text: &'static str,
    failure_text: &'static str,
}

impl<V: FormView, T: FormTransport> ContactFormSubmitter<V, T> {
    pub fn new(
        view: V,
        transport: T,
        success_text: &'static str,
        failure_text: &'static str,
    ) -> Self {
        Self {
            view,
            transport,
            outcome: Cell::new(SubmissionOutcome::NotSubmitted),
            success_text,
            failure_text,
        }
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome.get()
    }

    /// Validate, then post once. A call while a post is in flight is ignored.
    pub async fn submit(&self) -> SubmissionOutcome {
        if self.outcome.get() == SubmissionOutcome::Pending {
            log::debug!("Submission already in flight, ignoring");
            return SubmissionOutcome::Pending;
        }

        let fields = self.view.read_fields();
        self.view.mark_validity(fields.validity());
        if let Err(e) = fields.validate() {
            log::debug!("Contact form rejected: {:?}", e);
            self.view.show_message(&e.to_string(), MessageKind::Error);
            return self.outcome.get();
        }

        self.outcome.set(SubmissionOutcome::Pending);
        self.view.set_busy(true);

        let endpoint = self.view.endpoint();
        let payload = self.view.payload();
        let outcome = match self.transport.post(&endpoint, &payload).await {
            Ok(reply) if reply.ok => {
                log::info!("Contact form sent");
                self.view.show_message(self.success_text, MessageKind::Success);
                self.view.reset();
                SubmissionOutcome::Succeeded
            }
            Ok(reply) => {
                log::warn!(
                    "Contact form rejected with status {}: {:?}",
                    reply.status,
                    reply.errors
                );
                self.view.show_message(self.failure_text, MessageKind::Error);
                SubmissionOutcome::Failed
            }
            Err(e) => {
                log::error!("Contact form submission failed: {}", e);
                self.view.show_message(self.failure_text, MessageKind::Error);
                SubmissionOutcome::Failed
            }
        };

        self.view.set_busy(false);
        self.outcome.set(outcome);
        outcome
    }
}
