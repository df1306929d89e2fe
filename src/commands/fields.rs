//! Fields command
//!
//! Lists the prediction form inputs and the constraint each one must meet.

use serde::Serialize;

use crate::cli::args::{Args, OutputFormat};
use crate::form::validator::{AGE_RANGE, HOURS_RANGE};
use crate::form::{FIELD_AGE, FIELD_NAME, FIELD_SLEEP_HOURS, FIELD_STUDY_HOURS};

/// One form input and its constraint
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// Input name, also the JSON body key
    pub name: &'static str,
    /// Command line option setting the input
    pub option: &'static str,
    /// Human-readable constraint
    pub constraint: String,
}

/// Every form input, in submission order
pub fn field_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            name: FIELD_NAME,
            option: "--nama",
            constraint: "required, not blank".to_string(),
        },
        FieldSpec {
            name: FIELD_AGE,
            option: "--usia",
            constraint: format!(
                "integer between {} and {}",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ),
        },
        FieldSpec {
            name: FIELD_STUDY_HOURS,
            option: "--jam-belajar",
            constraint: format!(
                "number between {} and {}",
                HOURS_RANGE.start(),
                HOURS_RANGE.end()
            ),
        },
        FieldSpec {
            name: FIELD_SLEEP_HOURS,
            option: "--durasi-tidur",
            constraint: format!(
                "number between {} and {}",
                HOURS_RANGE.start(),
                HOURS_RANGE.end()
            ),
        },
    ]
}

/// Run the fields command
pub fn run(args: &Args) -> String {
    let specs = field_specs();
    match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&specs)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputFormat::Text => {
            let mut output = String::from("Form fields:\n\n");
            for spec in &specs {
                output.push_str(&format!(
                    "  {:<14}{:<17}{}\n",
                    spec.name, spec.option, spec.constraint
                ));
            }
            output
        }
    }
}
