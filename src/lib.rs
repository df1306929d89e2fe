//! mhcheck library
//!
//! Client side of the Mental Health Checker form.
//!
//! This library provides:
//! - The prediction form model and its validation rules
//! - Transient alerts shown above the form
//! - Submission of the form to the prediction API
//! - The page controller that ties validation, submission and the
//!   redirect to the results page together
//!
//! # Example
//!
//! ```no_run
//! use mhcheck::api::client::HttpPredictionClient;
//! use mhcheck::form::{FormData, PredictionForm};
//! use mhcheck::notify::AlertBoard;
//! use mhcheck::page::{PageController, RecordingNavigator, SubmitEvent};
//!
//! # async fn run() -> Result<(), mhcheck::CheckerError> {
//! let form = PredictionForm::with_values(FormData::new("Ana", "20", "5", "7"));
//! let alerts = AlertBoard::for_form(&form);
//! let client = HttpPredictionClient::new()?;
//! let mut page = PageController::new(form, alerts, client, RecordingNavigator::new());
//!
//! let outcome = page.handle_submit(&mut SubmitEvent::new()).await;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod form;
pub mod notify;
pub mod page;
pub mod version;

use thiserror::Error;

// Re-exports for public API
pub use api::{PredictionClient, PredictionResult, SubmitError};
pub use config::CheckerConfig;
pub use form::{FormData, PredictionForm, ValidationError};
pub use notify::{Alert, AlertBoard, AlertKind};
pub use page::report::{SessionReport, SessionStatus};
pub use page::{PageController, PageState, SubmitOutcome};

/// Error types for mhcheck operations.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Configuration could not be loaded or is invalid
    #[error("configuration error in {origin}: {reason}")]
    Config { origin: String, reason: String },

    /// I/O error
    #[error("I/O error in {context}: {message}")]
    Io { context: String, message: String },

    /// Invalid command line arguments
    #[error("invalid arguments: {0}")]
    Args(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl CheckerError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckerError::Validation(_) => 1,
            CheckerError::Submit(_) => 2,
            CheckerError::Config { .. } | CheckerError::Io { .. } | CheckerError::Args(_) => 3,
        }
    }
}
