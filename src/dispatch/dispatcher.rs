//! Single-call dispatch of a contact payload

use super::error::DispatchFailure;
use super::traits::EmailProvider;
use crate::state::ContactPayload;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Sends one payload per accepted submission through an [`EmailProvider`].
///
/// Provider errors are logged here and collapsed into [`DispatchFailure`].
/// There are no retries, no timeout and no cancellation.
#[derive(Clone)]
pub struct SubmissionDispatcher {
    provider: Arc<dyn EmailProvider>,
}

impl SubmissionDispatcher {
    pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
        Self { provider }
    }

    pub async fn dispatch(&self, payload: ContactPayload) -> Result<(), DispatchFailure> {
        let span = tracing::info_span!("dispatch", submission_id = %Uuid::new_v4());

        async {
            tracing::info!(service = %payload.service, "sending contact message");
            match self.provider.send(&payload).await {
                Ok(()) => {
                    tracing::info!("contact message sent");
                    Ok(())
                }
                Err(err) => {
                    tracing::error!(error = %err, "error sending email");
                    Err(DispatchFailure)
                }
            }
        }
        .instrument(span)
        .await
    }
}
