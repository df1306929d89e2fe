//! Page controller: wires the form, validation, submission and navigation.
//!
//! ```text
//!   Idle --submit, valid--> Submitting --result--> NavigatingAway
//!    ^                          |
//!    +-------- no result -------+
//! ```
//!
//! The default form submission is always suppressed first, whatever the
//! outcome. Once the page navigates away further submits are ignored.

pub mod redirect;
pub mod report;

use serde::Serialize;

use crate::api::{predict_via_api, PredictionClient, PredictionResult};
use crate::form::{validate_prediction_form, PredictionForm, ValidationError};
use crate::notify::{AlertBoard, AlertKind};
use redirect::{results_url, DEFAULT_RESULTS_PAGE};

/// Message shown after the form is reset
pub const FORM_RESET_MESSAGE: &str = "Form berhasil direset";

/// Where the page is in the submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    #[default]
    Idle,
    Submitting,
    NavigatingAway,
}

/// A form submit event.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the browser's own form submission
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a submit event led to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected(ValidationError),
    /// The request was sent but produced no result
    Failed,
    /// The page was sent to the results page
    Navigated { result: PredictionResult, url: String },
    /// The page had already navigated away
    Ignored,
}

/// Receiver of page navigations (the browser location).
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Navigator that records every target instead of leaving the page.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every URL navigated to, in order
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    /// Most recent navigation target
    pub fn current(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}

/// Marks the page as submitting for the lifetime of a request.
///
/// If the submit future is dropped before finishing, the page drops back to
/// idle rather than staying stuck in `Submitting`.
struct InFlight<'a> {
    state: &'a mut PageState,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a mut PageState) -> Self {
        *state = PageState::Submitting;
        InFlight {
            state,
            finished: false,
        }
    }

    fn finish(mut self, next: PageState) {
        *self.state = next;
        self.finished = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            *self.state = PageState::Idle;
        }
    }
}

/// Submit handler bound to the prediction form.
///
/// `handle_submit` takes `&mut self`, so a second submission cannot start
/// while one is in flight.
pub struct PageController<C, N> {
    form: PredictionForm,
    alerts: AlertBoard,
    client: C,
    navigator: N,
    results_page: String,
    state: PageState,
}

impl<C: PredictionClient, N: Navigator> PageController<C, N> {
    /// Bind a controller to a form and its alert board
    pub fn new(form: PredictionForm, alerts: AlertBoard, client: C, navigator: N) -> Self {
        PageController {
            form,
            alerts,
            client,
            navigator,
            results_page: DEFAULT_RESULTS_PAGE.to_string(),
            state: PageState::Idle,
        }
    }

    /// Set the results page path
    pub fn with_results_page(mut self, results_page: impl Into<String>) -> Self {
        self.results_page = results_page.into();
        self
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn form(&self) -> &PredictionForm {
        &self.form
    }

    /// Mutable access for user edits between submissions
    pub fn form_mut(&mut self) -> &mut PredictionForm {
        &mut self.form
    }

    pub fn alerts(&self) -> &AlertBoard {
        &self.alerts
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Handle a submit event on the form.
    pub async fn handle_submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        if self.state == PageState::NavigatingAway {
            tracing::warn!("submit ignored, page is navigating away");
            return SubmitOutcome::Ignored;
        }

        if let Err(e) = validate_prediction_form(&self.form, &self.alerts) {
            return SubmitOutcome::Rejected(e);
        }

        let data = self.form.collect();
        let PageController {
            alerts,
            client,
            navigator,
            results_page,
            state,
            ..
        } = self;

        let in_flight = InFlight::begin(state);
        match predict_via_api(client, &data, alerts).await {
            Some(result) => {
                let url = results_url(results_page, &result);
                tracing::info!(%url, "navigating to results");
                in_flight.finish(PageState::NavigatingAway);
                navigator.navigate(&url);
                SubmitOutcome::Navigated { result, url }
            }
            None => {
                in_flight.finish(PageState::Idle);
                SubmitOutcome::Failed
            }
        }
    }

    /// Clear the form if the user confirmed. Returns whether it was reset.
    pub fn reset_with_confirm(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        self.form.reset();
        self.alerts.show(FORM_RESET_MESSAGE, AlertKind::Info);
        true
    }
}
