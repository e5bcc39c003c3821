//! Trait abstraction for the email provider to enable mocking in tests

use super::error::ProviderError;
use crate::state::ContactPayload;
use async_trait::async_trait;

/// Capability to deliver one contact payload
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send the payload through the provider's template
    async fn send(&self, payload: &ContactPayload) -> Result<(), ProviderError>;
}
