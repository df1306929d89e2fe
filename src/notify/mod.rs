//! Transient user notifications.
//!
//! Alerts are inserted just before the prediction form and remove themselves
//! after a few seconds. The [`AlertBoard`] is the container for them; it is
//! handed explicitly to whatever needs to notify the user.

pub mod timer;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use serde::Serialize;

use crate::form::PredictionForm;
use timer::DismissTimer;

/// How long an alert stays visible
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Layout classes shared by every alert
const BASE_CLASSES: &str = "border-l-4 p-4 mb-4";

/// Alert severity, which selects its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Error,
    Success,
    Warning,
    #[default]
    Info,
}

impl AlertKind {
    /// Parse a kind by name. Unrecognized names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "error" => AlertKind::Error,
            "success" => AlertKind::Success,
            "warning" => AlertKind::Warning,
            _ => AlertKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }

    /// Color classes for this kind
    pub fn style_classes(&self) -> &'static str {
        match self {
            AlertKind::Error => "bg-red-100 border-red-400 text-red-700",
            AlertKind::Success => "bg-green-100 border-green-400 text-green-700",
            AlertKind::Warning => "bg-yellow-100 border-yellow-400 text-yellow-700",
            AlertKind::Info => "bg-blue-100 border-blue-400 text-blue-700",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    /// Full class attribute of the alert element
    pub fn class_name(&self) -> String {
        format!("{} {}", BASE_CLASSES, self.kind.style_classes())
    }

    /// Render the alert element. The message is escaped.
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"{}\"><p>{}</p></div>",
            self.class_name(),
            escape_html(&self.message)
        )
    }
}

struct ActiveAlert {
    alert: Alert,
    // Dropping the entry cancels its pending dismissal
    _timer: Option<DismissTimer>,
}

struct BoardState {
    anchor: Option<String>,
    dismiss_after: Duration,
    next_id: u64,
    active: Vec<ActiveAlert>,
    history: Vec<Alert>,
}

/// Container of the alerts shown above the form.
///
/// Cheap to clone; clones share the same alerts. A board without an anchor
/// models a page where the form is missing: alerts are silently dropped.
#[derive(Clone)]
pub struct AlertBoard {
    state: Arc<Mutex<BoardState>>,
}

impl AlertBoard {
    /// Board anchored before the given form, with the default dismiss delay
    pub fn for_form(form: &PredictionForm) -> Self {
        Self::anchored(form.id(), DEFAULT_DISMISS_AFTER)
    }

    /// Board anchored before the element with id `anchor`
    pub fn anchored(anchor: &str, dismiss_after: Duration) -> Self {
        Self::build(Some(anchor.to_string()), dismiss_after)
    }

    /// Board with no anchor element; `show` does nothing.
    pub fn detached() -> Self {
        Self::build(None, DEFAULT_DISMISS_AFTER)
    }

    fn build(anchor: Option<String>, dismiss_after: Duration) -> Self {
        AlertBoard {
            state: Arc::new(Mutex::new(BoardState {
                anchor,
                dismiss_after,
                next_id: 1,
                active: Vec::new(),
                history: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Show an alert and schedule its removal.
    ///
    /// New alerts go after the ones already shown, directly above the form.
    /// Returns the alert id, or `None` if the board has no anchor.
    pub fn show(&self, message: impl Into<String>, kind: AlertKind) -> Option<u64> {
        let message = message.into();
        let mut state = self.lock();

        let Some(anchor) = state.anchor.as_deref() else {
            tracing::debug!(%kind, "no alert anchor, dropping alert: {message}");
            return None;
        };
        tracing::debug!(%kind, anchor, "alert: {message}");

        let id = state.next_id;
        state.next_id += 1;

        let alert = Alert { id, kind, message };
        let weak = Arc::downgrade(&self.state);
        let timer = DismissTimer::schedule(state.dismiss_after, move || remove_alert(&weak, id));

        state.history.push(alert.clone());
        state.active.push(ActiveAlert {
            alert,
            _timer: timer,
        });

        Some(id)
    }

    /// Remove an alert before its timer fires.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut state = self.lock();
        let before = state.active.len();
        state.active.retain(|a| a.alert.id != id);
        state.active.len() != before
    }

    /// Remove every visible alert.
    pub fn clear(&self) {
        self.lock().active.clear();
    }

    /// Alerts currently visible, oldest first
    pub fn active(&self) -> Vec<Alert> {
        self.lock().active.iter().map(|a| a.alert.clone()).collect()
    }

    /// Every alert shown on this board, including dismissed ones
    pub fn history(&self) -> Vec<Alert> {
        self.lock().history.clone()
    }

    /// Whether alerts have somewhere to go
    pub fn is_anchored(&self) -> bool {
        self.lock().anchor.is_some()
    }
}

impl std::fmt::Debug for AlertBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("AlertBoard")
            .field("anchor", &state.anchor)
            .field("active", &state.active.len())
            .field("shown", &state.history.len())
            .finish()
    }
}

fn remove_alert(board: &Weak<Mutex<BoardState>>, id: u64) {
    if let Some(state) = board.upgrade() {
        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
        state.active.retain(|a| a.alert.id != id);
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
