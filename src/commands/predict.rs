//! Predict command
//!
//! Submits the form the way the page does: validate, post to the prediction
//! API, and follow the redirect to the results page on success.

use std::time::Instant;

use crate::api::client::HttpPredictionClient;
use crate::api::PredictionClient;
use crate::cli::args::Args;
use crate::config::CheckerConfig;
use crate::form::FORM_ID;
use crate::notify::AlertBoard;
use crate::page::report::SessionReport;
use crate::page::{PageController, RecordingNavigator, SubmitEvent};
use crate::CheckerError;

/// Run the predict command against the configured endpoint
pub async fn run(args: &Args, config: &CheckerConfig) -> Result<SessionReport, CheckerError> {
    let client = HttpPredictionClient::with_config(config.http_config())?;
    Ok(run_with_client(args, config, client).await)
}

/// Run the predict command with any prediction client
pub async fn run_with_client<C: PredictionClient>(
    args: &Args,
    config: &CheckerConfig,
    client: C,
) -> SessionReport {
    let start = Instant::now();

    let form = super::form_from_args(args);
    let mut report = SessionReport::new(&config.endpoint, form.collect(), form.progress_percent());

    let alerts = AlertBoard::anchored(FORM_ID, config.alert_timeout());
    let mut page = PageController::new(form, alerts, client, RecordingNavigator::new())
        .with_results_page(config.results_page.as_str());

    let outcome = page.handle_submit(&mut SubmitEvent::new()).await;
    tracing::debug!(?outcome, state = ?page.state(), "submit handled");

    report.record_outcome(outcome, page.state());
    report.alerts = page.alerts().history();
    report.duration_ms = start.elapsed().as_millis() as u64;
    report
}
