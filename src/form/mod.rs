//! Prediction form model.
//!
//! [`PredictionForm`] stands in for the page's `predictionForm` element: it
//! holds the raw string value of each input exactly as the user typed it.
//! [`FormData`] is the snapshot taken at submit time and is what goes over
//! the wire, so its field order is the JSON key order.

pub mod number;
pub mod validator;

use serde::{Deserialize, Serialize};

pub use validator::{validate_prediction_form, FormInput, ValidationError};

/// Element id of the form; alerts are inserted just before it.
pub const FORM_ID: &str = "predictionForm";

/// Student name input
pub const FIELD_NAME: &str = "nama";
/// Age input (years)
pub const FIELD_AGE: &str = "usia";
/// Daily study hours input
pub const FIELD_STUDY_HOURS: &str = "jam_belajar";
/// Nightly sleep duration input
pub const FIELD_SLEEP_HOURS: &str = "durasi_tidur";

/// All form fields in document order.
pub const FIELDS: [&str; 4] = [FIELD_NAME, FIELD_AGE, FIELD_STUDY_HOURS, FIELD_SLEEP_HOURS];

/// Field values collected from the form, serialized as the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub nama: String,
    pub usia: String,
    pub jam_belajar: String,
    pub durasi_tidur: String,
}

impl FormData {
    /// Build form data from the four raw values.
    pub fn new(
        nama: impl Into<String>,
        usia: impl Into<String>,
        jam_belajar: impl Into<String>,
        durasi_tidur: impl Into<String>,
    ) -> Self {
        FormData {
            nama: nama.into(),
            usia: usia.into(),
            jam_belajar: jam_belajar.into(),
            durasi_tidur: durasi_tidur.into(),
        }
    }

    /// Get a field value by its input name
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            FIELD_NAME => Some(&self.nama),
            FIELD_AGE => Some(&self.usia),
            FIELD_STUDY_HOURS => Some(&self.jam_belajar),
            FIELD_SLEEP_HOURS => Some(&self.durasi_tidur),
            _ => None,
        }
    }

    fn get_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            FIELD_NAME => Some(&mut self.nama),
            FIELD_AGE => Some(&mut self.usia),
            FIELD_STUDY_HOURS => Some(&mut self.jam_belajar),
            FIELD_SLEEP_HOURS => Some(&mut self.durasi_tidur),
            _ => None,
        }
    }
}

/// Error returned when addressing an input the form does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("form has no field named '{0}'")]
pub struct UnknownField(pub String);

/// The prediction form as rendered on the page.
///
/// All four inputs are required. Values stay in place after a failed
/// submission so the user can correct them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionForm {
    id: String,
    values: FormData,
}

impl PredictionForm {
    /// Create an empty form with the standard element id
    pub fn new() -> Self {
        PredictionForm {
            id: FORM_ID.to_string(),
            values: FormData::default(),
        }
    }

    /// Create a form pre-filled with values
    pub fn with_values(values: FormData) -> Self {
        PredictionForm {
            id: FORM_ID.to_string(),
            values,
        }
    }

    /// Element id of this form
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current value of an input
    pub fn value(&self, field: &str) -> Result<&str, UnknownField> {
        self.values
            .get(field)
            .ok_or_else(|| UnknownField(field.to_string()))
    }

    /// Overwrite the value of an input
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let slot = self
            .values
            .get_mut(field)
            .ok_or_else(|| UnknownField(field.to_string()))?;
        *slot = value.into();
        Ok(())
    }

    /// Snapshot the current values for submission.
    pub fn collect(&self) -> FormData {
        self.values.clone()
    }

    /// Clear every input.
    pub fn reset(&mut self) {
        self.values = FormData::default();
    }

    /// Share of required inputs currently holding an acceptable value, 0-100.
    pub fn progress_percent(&self) -> f64 {
        let valid = FIELDS
            .iter()
            .filter(|field| validator::field_is_valid(field, &self.values))
            .count();
        valid as f64 / FIELDS.len() as f64 * 100.0
    }
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::new()
    }
}
