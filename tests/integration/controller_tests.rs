//! End-to-end submit flow: page controller, real HTTP client, mock server.

use mhcheck::api::client::{HttpConfig, HttpPredictionClient};
use mhcheck::cli::args::Args;
use mhcheck::commands::predict;
use mhcheck::page::{RecordingNavigator, SubmitEvent};
use mhcheck::{
    AlertBoard, AlertKind, CheckerConfig, FormData, PageController, PageState, PredictionForm,
    SessionStatus, SubmitError, SubmitOutcome, ValidationError,
};

use crate::mocks::{prediction, CannedResponse, MockServer, ScriptedClient};

const STRESSED: &str = r#"{"prediction_label":"Stressed","confidence":0.87}"#;

fn page_for(
    server: &MockServer,
    values: FormData,
) -> PageController<HttpPredictionClient, RecordingNavigator> {
    let form = PredictionForm::with_values(values);
    let alerts = AlertBoard::for_form(&form);
    let client = HttpPredictionClient::with_config(HttpConfig {
        endpoint: server.url("/predict/"),
        timeout_ms: Some(5000),
    })
    .unwrap();
    PageController::new(form, alerts, client, RecordingNavigator::new())
}

#[tokio::test]
async fn test_successful_submit_redirects() {
    let server = MockServer::start(CannedResponse::json(200, STRESSED)).await;
    let mut page = page_for(&server, FormData::new("Ana", "20", "5", "7"));
    let mut event = SubmitEvent::new();

    let outcome = page.handle_submit(&mut event).await;

    assert!(event.default_prevented());
    assert!(matches!(outcome, SubmitOutcome::Navigated { .. }));
    assert_eq!(
        page.navigator().visited(),
        ["/hasil.html?status=Stressed&confidence=0.87"]
    );
    assert_eq!(page.state(), PageState::NavigatingAway);
    assert_eq!(server.requests().len(), 1);
    assert!(page.alerts().history().is_empty());
}

#[tokio::test]
async fn test_server_error_shows_one_alert() {
    let server = MockServer::start(CannedResponse::json(500, "{}")).await;
    let mut page = page_for(&server, FormData::new("Ana", "20", "5", "7"));

    let outcome = page.handle_submit(&mut SubmitEvent::new()).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(page.state(), PageState::Idle);
    assert!(page.navigator().visited().is_empty());

    let alerts = page.alerts().history();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Error);
    assert_eq!(
        alerts[0].message,
        "Error melakukan prediksi: Network response was not ok (HTTP 500)"
    );
}

#[tokio::test]
async fn test_invalid_form_sends_no_request() {
    let server = MockServer::start(CannedResponse::json(200, STRESSED)).await;
    let mut page = page_for(&server, FormData::new("Ana", "51", "5", "7"));
    let mut event = SubmitEvent::new();

    let outcome = page.handle_submit(&mut event).await;

    assert!(event.default_prevented());
    assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::AgeOutOfRange));
    assert!(server.requests().is_empty());
    assert_eq!(page.alerts().active().len(), 1);
}

#[tokio::test]
async fn test_resubmit_after_correction() {
    let server = MockServer::start(CannedResponse::json(200, STRESSED)).await;
    let mut page = page_for(&server, FormData::new("", "20", "5", "7"));

    let first = page.handle_submit(&mut SubmitEvent::new()).await;
    assert_eq!(first, SubmitOutcome::Rejected(ValidationError::NameEmpty));

    page.form_mut().set_value("nama", "Ana").unwrap();
    let second = page.handle_submit(&mut SubmitEvent::new()).await;

    assert!(matches!(second, SubmitOutcome::Navigated { .. }));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_retry_after_failure_uses_same_values() {
    let client = ScriptedClient::new(vec![
        Err(SubmitError::Network {
            reason: "connection reset".to_string(),
        }),
        Ok(prediction("Normal", 0.42)),
    ]);
    let form = PredictionForm::with_values(FormData::new("Ana", "20", "5", "7"));
    let alerts = AlertBoard::for_form(&form);
    let mut page = PageController::new(form, alerts, &client, RecordingNavigator::new());

    assert_eq!(page.handle_submit(&mut SubmitEvent::new()).await, SubmitOutcome::Failed);
    let outcome = page.handle_submit(&mut SubmitEvent::new()).await;

    assert!(matches!(outcome, SubmitOutcome::Navigated { ref url, .. }
        if url == "/hasil.html?status=Normal&confidence=0.42"));
    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn test_predict_command_against_server() {
    let server = MockServer::start(CannedResponse::json(200, STRESSED)).await;
    let args = Args::parse_from(
        &[
            "--nama", "Ana", "--usia", "20", "--jam-belajar", "5", "--durasi-tidur", "7",
            "--results-page", "/result.html",
        ]
        .map(String::from),
    )
    .unwrap();
    let mut config = CheckerConfig {
        endpoint: server.url("/predict/"),
        ..Default::default()
    };
    config.apply_args(&args);

    let report = predict::run(&args, &config).await.unwrap();

    assert_eq!(report.status, SessionStatus::Navigated);
    assert_eq!(
        report.redirect.as_deref(),
        Some("/result.html?status=Stressed&confidence=0.87")
    );
    assert_eq!(report.endpoint, server.url("/predict/"));
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn test_detached_board_still_submits() {
    let client = ScriptedClient::new(vec![Err(SubmitError::Status { status: 503 })]);
    let form = PredictionForm::with_values(FormData::new("Ana", "20", "5", "7"));
    let mut page =
        PageController::new(form, AlertBoard::detached(), &client, RecordingNavigator::new());

    let outcome = page.handle_submit(&mut SubmitEvent::new()).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(page.alerts().history().is_empty());
    assert_eq!(client.requests().len(), 1);
}
