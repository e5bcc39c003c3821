//! Contact form domain layer
//!
//! Field values, the validity predicate, the submission status, and the
//! state machine that gates dispatch.

mod field;
mod machine;
mod status;
mod validator;

pub use field::{next_service, prev_service, ContactPayload, FieldName};
pub use machine::ContactForm;
pub use status::{SubmissionStatus, SEND_SUCCESS_MESSAGE};

#[cfg(test)]
pub use field::FormFields;
#[cfg(test)]
pub use status::SEND_FAILED_MESSAGE;
