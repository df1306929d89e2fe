//! Session report.
//!
//! Summarises one run of the form: the values submitted, the alerts the user
//! saw and where the page ended up.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{PageState, SubmitOutcome};
use crate::api::PredictionResult;
use crate::form::{FormData, ValidationError};
use crate::notify::Alert;

/// Final status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Form valid, nothing sent (validate command)
    Valid,
    /// Prediction received and page redirected
    Navigated,
    /// Validation failed
    Rejected,
    /// Submission produced no result
    Failed,
    /// Submit ignored
    Ignored,
}

impl SessionStatus {
    /// Process exit code for this status
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionStatus::Valid | SessionStatus::Navigated | SessionStatus::Ignored => 0,
            SessionStatus::Rejected => 1,
            SessionStatus::Failed => 2,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            SessionStatus::Valid => "form is valid",
            SessionStatus::Navigated => "prediction received",
            SessionStatus::Rejected => "validation failed",
            SessionStatus::Failed => "prediction failed",
            SessionStatus::Ignored => "submit ignored",
        }
    }
}

/// Report of one form session
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// When the form was submitted
    pub timestamp: DateTime<Utc>,
    /// Endpoint the form was (or would be) posted to
    pub endpoint: String,
    pub form: FormData,
    /// Share of required fields filled with acceptable values
    pub progress_percent: f64,
    pub status: SessionStatus,
    pub page_state: PageState,
    /// Field that failed validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PredictionResult>,
    /// Navigation target on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Every alert shown during the session
    pub alerts: Vec<Alert>,
    pub duration_ms: u64,
}

impl SessionReport {
    /// Create a report for a form snapshot; status starts as `Valid`
    pub fn new(endpoint: &str, form: FormData, progress_percent: f64) -> Self {
        SessionReport {
            timestamp: Utc::now(),
            endpoint: endpoint.to_string(),
            form,
            progress_percent,
            status: SessionStatus::Valid,
            page_state: PageState::Idle,
            invalid_field: None,
            prediction: None,
            redirect: None,
            alerts: Vec::new(),
            duration_ms: 0,
        }
    }

    /// Record a validation failure
    pub fn reject(&mut self, error: ValidationError) {
        self.status = SessionStatus::Rejected;
        self.invalid_field = Some(error.field().to_string());
    }

    /// Record the outcome of a submit event
    pub fn record_outcome(&mut self, outcome: SubmitOutcome, page_state: PageState) {
        self.page_state = page_state;
        match outcome {
            SubmitOutcome::Rejected(e) => self.reject(e),
            SubmitOutcome::Failed => self.status = SessionStatus::Failed,
            SubmitOutcome::Navigated { result, url } => {
                self.status = SessionStatus::Navigated;
                self.prediction = Some(result);
                self.redirect = Some(url);
            }
            SubmitOutcome::Ignored => self.status = SessionStatus::Ignored,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }
}
