//! Command handlers for mhcheck
//!
//! This module contains implementations for the mhcheck commands:
//! - `predict`: Validate and submit the form, then follow the redirect
//! - `validate`: Run the form validation only
//! - `fields`: List the form fields and their constraints
//!
//! `save` writes a finished report to disk for `--save`.

pub mod fields;
pub mod predict;
pub mod save;
pub mod validate;

use crate::cli::args::Args;
use crate::form::{FormData, PredictionForm};

/// Fill the prediction form with the values given on the command line
pub fn form_from_args(args: &Args) -> PredictionForm {
    PredictionForm::with_values(FormData::new(
        args.nama.as_str(),
        args.usia.as_str(),
        args.jam_belajar.as_str(),
        args.durasi_tidur.as_str(),
    ))
}
