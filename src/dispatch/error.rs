//! Dispatch error types

/// Errors reported by an email provider
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider rejected request with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Opaque failure handed to the form once a provider error has been logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("message dispatch failed")]
pub struct DispatchFailure;
