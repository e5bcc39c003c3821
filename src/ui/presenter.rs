//! Contact form view model
//!
//! `present` maps the form state onto a `ContactView`. The renderer draws only
//! from this model, so every visible rule of the form lives here.

use crate::state::{
    ContactFocus, ContactForm, FieldName, SubmissionStatus, SEND_SUCCESS_MESSAGE,
};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const RESET_LABEL: &str = "Send Another Message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FieldName,
    pub label: &'static str,
    pub value: String,
    pub placeholder: Option<&'static str>,
    pub is_active: bool,
    pub is_multiline: bool,
    pub is_choice: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitView {
    pub label: &'static str,
    pub enabled: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactView {
    /// Editable form (also shown, locked, while sending)
    Form {
        fields: Vec<FieldView>,
        submit: SubmitView,
        /// Failure reason from the last attempt
        error: Option<String>,
        /// Fields still blank, for the hint line
        missing: Vec<FieldName>,
    },
    Confirmation {
        message: &'static str,
        reset_label: &'static str,
    },
}

/// Build the view for the current form state.
///
/// `has_focus` is false when keys go to the sidebar; no element is then
/// highlighted.
pub fn present(form: &ContactForm, focus: ContactFocus, has_focus: bool) -> ContactView {
    let status = form.status();

    if *status == SubmissionStatus::Success {
        return ContactView::Confirmation {
            message: SEND_SUCCESS_MESSAGE,
            reset_label: RESET_LABEL,
        };
    }

    let sending = status.is_sending();
    let fields = FieldName::ALL
        .into_iter()
        .map(|field| FieldView {
            field,
            label: field.label(),
            value: form.fields().get(field).to_string(),
            placeholder: field.placeholder(),
            is_active: has_focus && !sending && focus == ContactFocus::Field(field),
            is_multiline: field.is_multiline(),
            is_choice: field.is_choice(),
        })
        .collect();

    let submit = SubmitView {
        label: if sending { SENDING_LABEL } else { SUBMIT_LABEL },
        enabled: form.is_valid() && !sending,
        is_selected: has_focus && focus == ContactFocus::SubmitButton,
    };

    ContactView::Form {
        fields,
        submit,
        error: status.error_reason().map(str::to_string),
        missing: form.missing_fields(),
    }
}
