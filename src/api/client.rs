//! HTTP transport for the prediction API.
//!
//! One POST per call with the form values as a JSON body. No retries: a
//! failed attempt is reported straight back to the caller.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::{PredictionClient, PredictionResult, SubmitError, DEFAULT_ENDPOINT};
use crate::form::FormData;

/// Configuration for prediction requests
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
    /// Endpoint URL the form is posted to
    pub endpoint: String,
    /// Overall request timeout in milliseconds (None = HTTP stack default)
    pub timeout_ms: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: None,
        }
    }
}

/// Prediction client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    config: HttpConfig,
    http: reqwest::Client,
}

impl HttpPredictionClient {
    /// Create a client with the default endpoint
    pub fn new() -> Result<Self, SubmitError> {
        Self::with_config(HttpConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HttpConfig) -> Result<Self, SubmitError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("mhcheck/", env!("CARGO_PKG_VERSION")));
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        let http = builder.build().map_err(|e| SubmitError::Network {
            reason: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(HttpPredictionClient { config, http })
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, form: &FormData) -> Result<PredictionResult, SubmitError> {
        tracing::debug!(endpoint = %self.config.endpoint, "posting prediction request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(form)
            .send()
            .await
            .map_err(|e| SubmitError::Network {
                reason: describe(&e),
            })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "prediction response");
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| SubmitError::Network {
            reason: describe(&e),
        })?;

        serde_json::from_slice(&body).map_err(|e| SubmitError::MalformedResponse {
            reason: e.to_string(),
        })
    }
}

/// Flatten a reqwest error and its sources into one line.
fn describe(error: &reqwest::Error) -> String {
    let mut message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else {
        "request failed".to_string()
    };

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
