//! Validate command
//!
//! Runs the form checks without contacting the prediction API.

use std::time::Instant;

use crate::cli::args::Args;
use crate::config::CheckerConfig;
use crate::form::{validate_prediction_form, FORM_ID};
use crate::notify::AlertBoard;
use crate::page::report::SessionReport;

/// Run the validate command
pub fn run(args: &Args, config: &CheckerConfig) -> SessionReport {
    let start = Instant::now();

    let form = super::form_from_args(args);
    let alerts = AlertBoard::anchored(FORM_ID, config.alert_timeout());
    let mut report = SessionReport::new(&config.endpoint, form.collect(), form.progress_percent());

    if let Err(e) = validate_prediction_form(&form, &alerts) {
        report.reject(e);
    }

    report.alerts = alerts.history();
    report.duration_ms = start.elapsed().as_millis() as u64;
    report
}
