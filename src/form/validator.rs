//! Form validation.
//!
//! Checks run in document order and stop at the first failure: name, age,
//! study hours, sleep hours. Only that one failure is reported.

use std::ops::RangeInclusive;

use super::number::{parse_float, parse_int};
use super::{FormData, PredictionForm, FIELD_AGE, FIELD_NAME, FIELD_SLEEP_HOURS, FIELD_STUDY_HOURS};
use crate::notify::{AlertBoard, AlertKind};

/// Accepted age in whole years
pub const AGE_RANGE: RangeInclusive<f64> = 15.0..=50.0;
/// Accepted hours per day, shared by study and sleep
pub const HOURS_RANGE: RangeInclusive<f64> = 0.0..=24.0;

/// A failed form constraint. The message is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Nama mahasiswa tidak boleh kosong")]
    NameEmpty,

    #[error("Usia harus antara 15-50 tahun")]
    AgeOutOfRange,

    #[error("Jam belajar harus antara 0-24 jam")]
    StudyHoursOutOfRange,

    #[error("Durasi tidur harus antara 0-24 jam")]
    SleepHoursOutOfRange,
}

impl ValidationError {
    /// Input the failed constraint belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameEmpty => FIELD_NAME,
            ValidationError::AgeOutOfRange => FIELD_AGE,
            ValidationError::StudyHoursOutOfRange => FIELD_STUDY_HOURS,
            ValidationError::SleepHoursOutOfRange => FIELD_SLEEP_HOURS,
        }
    }
}

/// Typed, validated form values.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    /// Trimmed, non-empty student name
    pub name: String,
    /// Age in years, 15 to 50
    pub age: u8,
    /// Study hours per day, 0 to 24
    pub study_hours: f64,
    /// Sleep hours per night, 0 to 24
    pub sleep_hours: f64,
}

impl FormInput {
    /// Parse and validate raw form values, stopping at the first failure.
    pub fn parse(data: &FormData) -> Result<Self, ValidationError> {
        let name = check_name(&data.nama)?;
        let age = check_age(&data.usia)?;
        let study_hours = check_hours(&data.jam_belajar, ValidationError::StudyHoursOutOfRange)?;
        let sleep_hours = check_hours(&data.durasi_tidur, ValidationError::SleepHoursOutOfRange)?;

        Ok(FormInput {
            name,
            age,
            study_hours,
            sleep_hours,
        })
    }
}

/// Validate the form, showing an error alert for the first failed check.
///
/// Passes back the typed values on success so callers need not re-parse.
pub fn validate_prediction_form(
    form: &PredictionForm,
    alerts: &AlertBoard,
) -> Result<FormInput, ValidationError> {
    FormInput::parse(&form.collect())
        .inspect(|input| tracing::debug!(name = %input.name, age = input.age, "form valid"))
        .inspect_err(|e| {
            tracing::debug!(field = e.field(), "form rejected: {e}");
            alerts.show(e.to_string(), AlertKind::Error);
        })
}

/// Whether a single input currently holds an acceptable value.
pub(crate) fn field_is_valid(field: &str, data: &FormData) -> bool {
    match field {
        FIELD_NAME => check_name(&data.nama).is_ok(),
        FIELD_AGE => check_age(&data.usia).is_ok(),
        FIELD_STUDY_HOURS => {
            check_hours(&data.jam_belajar, ValidationError::StudyHoursOutOfRange).is_ok()
        }
        FIELD_SLEEP_HOURS => {
            check_hours(&data.durasi_tidur, ValidationError::SleepHoursOutOfRange).is_ok()
        }
        _ => false,
    }
}

fn check_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    Ok(name.to_string())
}

fn check_age(raw: &str) -> Result<u8, ValidationError> {
    match parse_int(raw) {
        // In range implies a whole number between 15 and 50
        Some(age) if AGE_RANGE.contains(&age) => Ok(age as u8),
        _ => Err(ValidationError::AgeOutOfRange),
    }
}

fn check_hours(raw: &str, error: ValidationError) -> Result<f64, ValidationError> {
    match parse_float(raw) {
        Some(hours) if HOURS_RANGE.contains(&hours) => Ok(hours),
        _ => Err(error),
    }
}
