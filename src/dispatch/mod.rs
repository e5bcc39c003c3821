//! Email provider dispatch for the contact form

mod client;
mod dispatcher;
mod error;
mod traits;

pub use client::EmailJsClient;
pub use dispatcher::SubmissionDispatcher;
pub use error::DispatchFailure;

#[cfg(test)]
pub use error::ProviderError;
#[cfg(test)]
pub use traits::MockEmailProvider;
