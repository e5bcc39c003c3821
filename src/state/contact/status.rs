//! Submission lifecycle status

/// User-facing reason shown after any failed dispatch
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Confirmation shown after a successful dispatch
pub const SEND_SUCCESS_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";

/// Where the contact form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A dispatch is outstanding
    Sending,
    Success,
    Error {
        reason: String,
    },
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Submit intents are only honoured from `Idle` and `Error`
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Error { .. })
    }

    /// Field edits are only honoured while the form is shown and not in flight
    pub fn accepts_edits(&self) -> bool {
        self.accepts_submit()
    }

    pub fn error_reason(&self) -> Option<&str> {
        match self {
            Self::Error { reason } => Some(reason),
            _ => None,
        }
    }

    /// Short label for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Sending => "Sending",
            Self::Success => "Sent",
            Self::Error { .. } => "Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_accepts_submit() {
        assert!(SubmissionStatus::Idle.accepts_submit());
        assert!(SubmissionStatus::Error {
            reason: SEND_FAILED_MESSAGE.to_string()
        }
        .accepts_submit());
        assert!(!SubmissionStatus::Sending.accepts_submit());
        assert!(!SubmissionStatus::Success.accepts_submit());
    }

    #[test]
    fn test_error_reason() {
        let status = SubmissionStatus::Error {
            reason: "boom".to_string(),
        };
        assert_eq!(status.error_reason(), Some("boom"));
        assert_eq!(SubmissionStatus::Idle.error_reason(), None);
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels = [
            SubmissionStatus::Idle.label(),
            SubmissionStatus::Sending.label(),
            SubmissionStatus::Success.label(),
            SubmissionStatus::Error {
                reason: String::new(),
            }
            .label(),
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in labels.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
