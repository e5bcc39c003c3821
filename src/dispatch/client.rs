//! HTTP client for the EmailJS send API
//!
//! Posts the contact payload to the REST counterpart of the browser SDK's
//! `send`, authenticated with the service id, template id and public key.

use super::error::ProviderError;
use super::traits::EmailProvider;
use crate::config::ProviderConfig;
use crate::state::ContactPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

/// Path of the send endpoint below the API base URL
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Request body expected by the send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// Client for the EmailJS REST API
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsClient {
    /// Create a client from the process provider configuration.
    ///
    /// No request timeout is set; an unanswered call stays outstanding.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("portfolio-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: send_endpoint(&config.api_base),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body<'a>(&'a self, payload: &'a ContactPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        }
    }
}

#[async_trait]
impl EmailProvider for EmailJsClient {
    async fn send(&self, payload: &ContactPayload) -> Result<(), ProviderError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.request_body(payload))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "provider accepted message");
        Ok(())
    }
}

/// Join the API base URL and the send path
fn send_endpoint(api_base: &str) -> String {
    format!("{}{SEND_PATH}", api_base.trim_end_matches('/'))
}
