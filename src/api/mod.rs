//! Prediction API integration.
//!
//! The form is sent to an external prediction service which answers with a
//! label and a confidence score. [`predict_via_api`] is the submit step: it
//! makes exactly one attempt and turns every failure into an alert plus
//! `None`, so callers only ever see "a result" or "no result".
//!
//! The transport sits behind the [`PredictionClient`] trait; the production
//! implementation is [`client::HttpPredictionClient`].

pub mod client;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::form::FormData;
use crate::notify::{AlertBoard, AlertKind};

/// Default prediction endpoint
pub const DEFAULT_ENDPOINT: &str = "https://rayency.pythonanywhere.com/predict/";

/// Prefix of the alert shown when a prediction request fails
pub const PREDICTION_FAILED_PREFIX: &str = "Error melakukan prediksi: ";

/// Prediction returned by the API.
///
/// Only the two fields used for the results page are read; anything else in
/// the response body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction_label: String,
    pub confidence: f64,
}

/// Why a prediction request produced no result.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request never got a response (connect, DNS, timeout, TLS)
    #[error("network error: {reason}")]
    Network { reason: String },

    /// The server answered with a non-success status
    #[error("Network response was not ok (HTTP {status})")]
    Status { status: u16 },

    /// The body is not JSON or lacks `prediction_label`/`confidence`
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}

/// Transport for prediction requests.
pub trait PredictionClient {
    /// Send one prediction request for the given form values.
    fn predict(
        &self,
        form: &FormData,
    ) -> impl Future<Output = Result<PredictionResult, SubmitError>>;
}

impl<C: PredictionClient> PredictionClient for &C {
    fn predict(
        &self,
        form: &FormData,
    ) -> impl Future<Output = Result<PredictionResult, SubmitError>> {
        (**self).predict(form)
    }
}

/// Submit the form once and return the prediction, if any.
///
/// Failures are logged, shown on `alerts` as a single error alert and
/// reported as `None`.
pub async fn predict_via_api<C: PredictionClient>(
    client: &C,
    form: &FormData,
    alerts: &AlertBoard,
) -> Option<PredictionResult> {
    match client.predict(form).await {
        Ok(result) => {
            tracing::debug!(
                label = %result.prediction_label,
                confidence = result.confidence,
                "prediction received"
            );
            Some(result)
        }
        Err(e) => {
            tracing::error!("prediction request failed: {e}");
            alerts.show(format!("{}{}", PREDICTION_FAILED_PREFIX, e), AlertKind::Error);
            None
        }
    }
}
