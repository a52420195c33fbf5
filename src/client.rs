//! HTTP client for the text-generation service.
//!
//! Each call is a single `POST` of a [`GenerationRequest`] as JSON to the
//! configured endpoint. A call succeeds only when:
//!
//! - the exchange completes,
//! - the response status is a success, and
//! - the body decodes to an object with a non-empty `text` field.
//!
//! There is no retry and no caching. Timeouts are left to the transport and
//! are only applied when `service.timeout_secs` is configured.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ServiceConfig;
use crate::request::GenerationRequest;

/// User agent for service requests
const USER_AGENT: &str = concat!("Scribe/", env!("CARGO_PKG_VERSION"));

/// Errors from a single generation exchange
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("API call failed with status: {0}")]
    Status(StatusCode),

    #[error("API response did not contain expected text")]
    MissingText,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GenerationError {
    /// Whether the failure happened below HTTP (connect, decode, ...)
    pub fn is_transport(&self) -> bool {
        matches!(self, GenerationError::Transport(_))
    }
}

/// Response body of the generation service
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    text: Option<String>,
}

/// Anything that can turn a request into one post
#[async_trait]
pub trait PostGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Generation service client
#[derive(Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GenerationClient {
    /// Create a client from the service settings
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Endpoint every request is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PostGenerator for GenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Generation service returned {}", status);
            return Err(GenerationError::Status(status));
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .text
            .filter(|t| !t.is_empty())
            .ok_or(GenerationError::MissingText)?;

        tracing::debug!(
            "Generated {} chars for {} in {:.1}s",
            text.len(),
            request.platform,
            start.elapsed().as_secs_f32()
        );
        Ok(text)
    }
}
