//! In-process prediction client with scripted replies.

use std::collections::VecDeque;
use std::sync::Mutex;

use mhcheck::{FormData, PredictionClient, PredictionResult, SubmitError};

/// Replies are handed out in order; requests are recorded.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<PredictionResult, SubmitError>>>,
    requests: Mutex<Vec<FormData>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<PredictionResult, SubmitError>>) -> Self {
        ScriptedClient {
            replies: Mutex::new(replies.into()),
            requests: Mutex::default(),
        }
    }

    pub fn requests(&self) -> Vec<FormData> {
        self.requests.lock().unwrap().clone()
    }
}

impl PredictionClient for ScriptedClient {
    async fn predict(&self, form: &FormData) -> Result<PredictionResult, SubmitError> {
        self.requests.lock().unwrap().push(form.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(SubmitError::Network {
                    reason: "no reply scripted".to_string(),
                })
            })
    }
}

pub fn prediction(label: &str, confidence: f64) -> PredictionResult {
    PredictionResult {
        prediction_label: label.to_string(),
        confidence,
    }
}
