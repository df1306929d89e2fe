//! Argument parser for mhcheck.
//!
//! Form values are passed as options named after the form inputs. Every
//! value option also accepts the `--option=value` spelling.

use std::env;

/// Command to execute
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Command {
    /// Validate and submit the form (default)
    #[default]
    Predict,
    /// Validate the form without submitting
    Validate,
    /// List form fields and their constraints
    Fields,
    /// Print version information
    Version,
}

/// Output format selection
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'. Valid formats: text, json", s)),
        }
    }
}

/// Parsed command line arguments
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Command to execute
    pub command: Command,
    /// Student name (`nama`)
    pub nama: String,
    /// Age (`usia`)
    pub usia: String,
    /// Study hours (`jam_belajar`)
    pub jam_belajar: String,
    /// Sleep duration (`durasi_tidur`)
    pub durasi_tidur: String,
    /// Prediction endpoint override
    pub endpoint: Option<String>,
    /// Results page path override
    pub results_page: Option<String>,
    /// Request timeout in milliseconds
    pub timeout_ms: Option<u64>,
    /// Configuration file path
    pub config: Option<String>,
    /// Directory to save the result document into
    pub save: Option<String>,
    /// Output format
    pub format: OutputFormat,
    /// Quiet mode (alerts and summary only)
    pub quiet: bool,
    /// Verbose mode (debug logging, styling details)
    pub verbose: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Show help
    pub help: bool,
}

impl Args {
    /// Parse command line arguments from std::env::args()
    pub fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().collect();
        Self::parse_from(&args[1..])
    }

    /// Parse command line arguments from a slice (for testing)
    pub fn parse_from(args: &[String]) -> Result<Self, String> {
        let mut result = Args::default();

        if env::var("NO_COLOR").is_ok() {
            result.no_color = true;
        }
        if let Ok(format) = env::var("MHCHECK_FORMAT") {
            result.format = OutputFormat::from_str(&format)?;
        }
        if env::var("MHCHECK_VERBOSE").is_ok() {
            result.verbose = true;
        }
        if let Ok(config) = env::var("MHCHECK_CONFIG") {
            result.config = Some(config);
        }

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();

            // Split --option=value
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
                _ => (arg, None),
            };

            match flag {
                // Commands
                "predict" => result.command = Command::Predict,
                "validate" => result.command = Command::Validate,
                "fields" => result.command = Command::Fields,
                "version" => result.command = Command::Version,

                // Help flags
                "-h" | "--help" => result.help = true,
                "-V" | "--version" => result.command = Command::Version,

                // Form values
                "--nama" => result.nama = value(args, &mut i, flag, inline, "a name")?,
                "--usia" => result.usia = value(args, &mut i, flag, inline, "an age")?,
                "--jam-belajar" | "--jam_belajar" => {
                    result.jam_belajar = value(args, &mut i, flag, inline, "study hours")?
                }
                "--durasi-tidur" | "--durasi_tidur" => {
                    result.durasi_tidur = value(args, &mut i, flag, inline, "sleep hours")?
                }

                // Request options
                "--endpoint" => {
                    result.endpoint = Some(value(args, &mut i, flag, inline, "a URL")?);
                }
                "--results-page" => {
                    result.results_page = Some(value(args, &mut i, flag, inline, "a path")?);
                }
                "--timeout" => {
                    let raw = value(args, &mut i, flag, inline, "a value in milliseconds")?;
                    result.timeout_ms = Some(
                        raw.parse()
                            .map_err(|_| format!("Invalid timeout value: '{}'", raw))?,
                    );
                }
                "--config" => {
                    result.config = Some(value(args, &mut i, flag, inline, "a file path")?);
                }
                "--save" => {
                    result.save = Some(value(args, &mut i, flag, inline, "a directory")?);
                }

                // Output options
                "--format" => {
                    let raw = value(args, &mut i, flag, inline, "a format name")?;
                    result.format = OutputFormat::from_str(&raw)?;
                }
                "-q" | "--quiet" => result.quiet = true,
                "-v" | "--verbose" => result.verbose = true,
                "--no-color" => result.no_color = true,
                "--log-json" => result.log_json = true,

                _ if arg.starts_with('-') => {
                    return Err(format!("Unknown option: '{}'", arg));
                }
                _ => {
                    return Err(format!("Unexpected argument: '{}'", arg));
                }
            }

            i += 1;
        }

        Ok(result)
    }
}

/// Take the value of an option, inline (`--x=v`) or from the next argument.
fn value(
    args: &[String],
    i: &mut usize,
    flag: &str,
    inline: Option<String>,
    what: &str,
) -> Result<String, String> {
    if let Some(v) = inline {
        return Ok(v);
    }
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{} requires {}", flag, what))
}
