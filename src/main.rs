//! mhcheck CLI entry point
//!
//! Fills in the Mental Health Checker form, submits it to the prediction API
//! and reports where the page would navigate.

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use mhcheck::cli::args::{Args, Command};
use mhcheck::cli::output::{get_formatter, OutputFormatter, TerminalFormatter};
use mhcheck::commands::{fields, predict, save, validate};
use mhcheck::version::get_build_info;
use mhcheck::{CheckerConfig, CheckerError, SessionReport};

fn main() -> ExitCode {
    // Parse command line arguments
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'mhcheck --help' for usage information.");
            return ExitCode::from(3);
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    init_tracing(&args);

    match args.command {
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::Fields => {
            println!("{}", fields::run(&args));
            ExitCode::SUCCESS
        }
        Command::Validate | Command::Predict => match run_form(&args) {
            Ok(code) => ExitCode::from(code),
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(e.exit_code())
            }
        },
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the verbosity flag.
fn init_tracing(args: &Args) {
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if args.log_json {
        builder.json().init();
    } else {
        builder.with_ansi(!args.no_color).init();
    }
}

fn run_form(args: &Args) -> Result<u8, CheckerError> {
    let config = CheckerConfig::from_args(args)?;
    tracing::debug!(?config, "configuration loaded");

    let report = match args.command {
        Command::Validate => validate::run(args, &config),
        _ => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| CheckerError::Io {
                    context: "async runtime".to_string(),
                    message: e.to_string(),
                })?;
            runtime.block_on(predict::run(args, &config))?
        }
    };

    let formatter = get_formatter(&args.format, args.no_color, args.verbose, args.quiet);
    println!("{}", formatter.format(&report));

    if let Some(ref dir) = args.save {
        save_report(Path::new(dir), &report)?;
    }

    Ok(report.exit_code())
}

fn save_report(dir: &Path, report: &SessionReport) -> Result<(), CheckerError> {
    let text = TerminalFormatter::new(false, true, false).format(report);
    let path = save::save_result(dir, &text)?;
    eprintln!("Result saved to {}", path.display());
    Ok(())
}

fn print_help() {
    println!(
        r#"mhcheck - Mental Health Checker form client

USAGE:
    mhcheck [COMMAND] [OPTIONS]

COMMANDS:
    predict     Validate and submit the form (default)
    validate    Validate the form without submitting
    fields      List the form fields and their constraints
    version     Print version information

FORM:
    --nama <NAME>          Student name (required)
    --usia <AGE>           Age, 15-50
    --jam-belajar <H>      Study hours per day, 0-24
    --durasi-tidur <H>     Sleep hours per day, 0-24

REQUEST OPTIONS:
    --endpoint <URL>       Prediction endpoint
                           (default: https://rayency.pythonanywhere.com/predict/)
    --results-page <PATH>  Results page path (default: /hasil.html)
    --timeout <MS>         Request timeout in milliseconds
    --config <FILE>        Load configuration from TOML file

OUTPUT OPTIONS:
    --format <FMT>         Output format: text (default), json
    --save <DIR>           Save the result text into DIR
    --quiet                Only output alerts and the summary
    --verbose              Include styling details and debug logs
    --no-color             Disable colored output
    --log-json             Write logs as JSON lines

GENERAL:
    -h, --help             Print this help message
    -V, --version          Print version information

ENVIRONMENT:
    MHCHECK_ENDPOINT, MHCHECK_RESULTS_PAGE, MHCHECK_TIMEOUT_MS,
    MHCHECK_CONFIG, MHCHECK_FORMAT, MHCHECK_VERBOSE, NO_COLOR, RUST_LOG

EXIT CODES:
    0   Prediction received (or form valid)
    1   Form validation failed
    2   Prediction request failed
    3   Runtime error

EXAMPLES:
    mhcheck --nama Ana --usia 20 --jam-belajar 5 --durasi-tidur 7
    mhcheck validate --nama Ana --usia 14 --jam-belajar 5 --durasi-tidur 7
    mhcheck --nama Ana --usia 20 --jam-belajar 5 --durasi-tidur 7 --format json"#
    );
}
