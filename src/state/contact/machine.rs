//! Contact form lifecycle
//!
//! `ContactForm` owns the entered fields and the submission status. It never
//! talks to the provider itself: an accepted `submit` hands back the payload,
//! and the caller reports the dispatch outcome through `settle`.

use super::field::{ContactPayload, FieldName, FormFields};
use super::status::{SubmissionStatus, SEND_FAILED_MESSAGE};
use super::validator;
use crate::dispatch::DispatchFailure;

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FormFields,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Validity of the current fields, recomputed on every call
    pub fn is_valid(&self) -> bool {
        validator::is_valid(&self.fields)
    }

    pub fn missing_fields(&self) -> Vec<FieldName> {
        validator::missing_fields(&self.fields)
    }

    /// Whether a submit intent would be accepted right now
    pub fn can_submit(&self) -> bool {
        self.status.accepts_submit() && self.is_valid()
    }

    /// Replace a field value. Returns false when edits are not accepted.
    pub fn edit(&mut self, field: FieldName, value: impl Into<String>) -> bool {
        let value = value.into();
        self.edit_with(field, |current| *current = value)
    }

    /// Mutate a field value in place. Returns false when edits are not accepted.
    pub fn edit_with(&mut self, field: FieldName, f: impl FnOnce(&mut String)) -> bool {
        if !self.status.accepts_edits() {
            return false;
        }
        f(self.fields.get_mut(field));
        true
    }

    /// Handle a submit intent.
    ///
    /// Accepted only from `Idle` or `Error` with valid fields; the status moves
    /// to `Sending` and the payload to dispatch is returned. Anything else is a
    /// no-op returning `None`.
    pub fn submit(&mut self) -> Option<ContactPayload> {
        if !self.can_submit() {
            let missing: Vec<&str> = self.missing_fields().iter().map(|f| f.key()).collect();
            tracing::debug!(status = self.status.label(), ?missing, "submit ignored");
            return None;
        }
        self.status = SubmissionStatus::Sending;
        Some(ContactPayload::from(&self.fields))
    }

    /// Apply the settled outcome of the outstanding dispatch
    pub fn settle(&mut self, outcome: Result<(), DispatchFailure>) {
        if !self.status.is_sending() {
            tracing::warn!(
                status = self.status.label(),
                "dispatch outcome arrived with no submission in flight"
            );
            return;
        }

        match outcome {
            Ok(()) => {
                self.fields.clear();
                self.status = SubmissionStatus::Success;
            }
            Err(_) => {
                self.status = SubmissionStatus::Error {
                    reason: SEND_FAILED_MESSAGE.to_string(),
                };
            }
        }
    }

    /// Handle a reset intent. Only leaves `Success`; returns whether it did.
    pub fn reset(&mut self) -> bool {
        if self.status != SubmissionStatus::Success {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}
