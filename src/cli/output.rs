//! Output formatting for mhcheck.
//!
//! Provides terminal and JSON formatters for a [`SessionReport`].
//!
//! No function in this module will panic. A JSON serialization failure is
//! reported inside the output instead.

use crate::cli::args::OutputFormat;
use crate::form::number::format_number;
use crate::notify::AlertKind;
use crate::page::report::{SessionReport, SessionStatus};

const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a session report into a string
    fn format(&self, report: &SessionReport) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn blue(&self, text: &str) -> String {
        self.colorize(text, "34")
    }

    fn gray(&self, text: &str) -> String {
        self.colorize(text, "90")
    }

    fn alert_tag(&self, kind: AlertKind) -> String {
        match kind {
            AlertKind::Error => self.red("[ERROR]"),
            AlertKind::Success => self.green("[SUCCESS]"),
            AlertKind::Warning => self.yellow("[WARNING]"),
            AlertKind::Info => self.blue("[INFO]"),
        }
    }

    fn status_line(&self, status: SessionStatus) -> String {
        match status {
            SessionStatus::Valid | SessionStatus::Navigated => self.green(status.describe()),
            SessionStatus::Rejected => self.yellow(status.describe()),
            SessionStatus::Failed => self.red(status.describe()),
            SessionStatus::Ignored => self.gray(status.describe()),
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &SessionReport) -> String {
        let mut output = String::new();

        if !self.quiet {
            output.push_str(SEPARATOR);
            output.push('\n');
            output.push_str("Mental Health Checker\n");
            output.push_str(&format!("Endpoint: {}\n", report.endpoint));
            output.push_str(&format!(
                "Timestamp: {}\n",
                report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            output.push_str(SEPARATOR);
            output.push_str("\n\n");

            output.push_str("FORM\n");
            let fields = [
                ("Nama", &report.form.nama),
                ("Usia", &report.form.usia),
                ("Jam belajar", &report.form.jam_belajar),
                ("Durasi tidur", &report.form.durasi_tidur),
            ];
            for (label, value) in fields {
                let shown = if value.is_empty() {
                    self.gray("(kosong)")
                } else {
                    value.clone()
                };
                output.push_str(&format!("  {:<14}{}\n", label, shown));
            }
            output.push_str(&format!("  Progress: {:.0}%\n\n", report.progress_percent));
        }

        if !report.alerts.is_empty() {
            output.push_str("ALERTS\n");
            for alert in &report.alerts {
                output.push_str(&format!("  {} {}\n", self.alert_tag(alert.kind), alert.message));
                if self.verbose {
                    output.push_str(&format!("    {}\n", self.gray(&alert.class_name())));
                }
            }
            output.push('\n');
        }

        if let Some(ref prediction) = report.prediction {
            output.push_str("PREDICTION\n");
            output.push_str(&format!("  Status: {}\n", prediction.prediction_label));
            output.push_str(&format!("  Confidence: {}\n", prediction.confidence));
            if let Some(ref url) = report.redirect {
                output.push_str(&format!("  Redirect: {}\n", url));
            }
            output.push('\n');
        }

        // Summary
        output.push_str(SEPARATOR);
        output.push('\n');
        let mut summary = format!("SUMMARY: {}", self.status_line(report.status));
        if let Some(ref field) = report.invalid_field {
            summary.push_str(&format!(" (field: {})", field));
        }
        output.push_str(&summary);
        output.push('\n');
        if self.verbose {
            output.push_str(&format!("Page state: {:?}\n", report.page_state));
        }
        output.push_str(&format!(
            "Total time: {}ms\n",
            format_number(report.duration_ms)
        ));
        output.push_str(&format!(
            "Exit code: {} ({})\n",
            report.exit_code(),
            report.status.describe()
        ));
        output.push_str(SEPARATOR);

        output
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &SessionReport) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("failed to serialize report: {}", e) })
                .to_string()
        })
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(
    format: &OutputFormat,
    no_color: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(!no_color, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
