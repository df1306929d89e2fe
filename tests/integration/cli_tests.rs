//! CLI integration tests.
//!
//! Tests for argument parsing and command handling.

use mhcheck::cli::args::{Args, Command, OutputFormat};
use mhcheck::commands::{fields, form_from_args, validate};
use mhcheck::{CheckerConfig, SessionStatus};

fn parse(args: &[&str]) -> Result<Args, String> {
    let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    Args::parse_from(&owned)
}

#[test]
fn test_default_command_is_predict() {
    let args = parse(&[]).unwrap();
    assert_eq!(args.command, Command::Predict);
    assert!(!args.help);
    assert!(args.save.is_none());
}

#[test]
fn test_help_flag() {
    assert!(parse(&["-h"]).unwrap().help);
    assert!(parse(&["--help"]).unwrap().help);
}

#[test]
fn test_full_predict_invocation() {
    let args = parse(&[
        "predict",
        "--nama",
        "Ana",
        "--usia",
        "20",
        "--jam-belajar",
        "5",
        "--durasi-tidur",
        "7",
        "--endpoint",
        "http://localhost:8000/predict/",
        "--format",
        "json",
        "--save",
        "out",
        "--quiet",
        "--log-json",
    ])
    .unwrap();

    assert_eq!(args.command, Command::Predict);
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.save.as_deref(), Some("out"));
    assert!(args.quiet);
    assert!(args.log_json);

    let form = form_from_args(&args).collect();
    assert_eq!(form.nama, "Ana");
    assert_eq!(form.durasi_tidur, "7");
}

#[test]
fn test_format_is_case_insensitive() {
    assert_eq!(parse(&["--format", "JSON"]).unwrap().format, OutputFormat::Json);
    assert!(parse(&["--format", "junit"]).is_err());
}

#[test]
fn test_cli_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mhcheck.toml");
    std::fs::write(
        &path,
        "endpoint = \"http://file.example/predict/\"\nalert_timeout_ms = 1000\n",
    )
    .unwrap();

    let args = parse(&[
        "--config",
        path.to_str().unwrap(),
        "--endpoint",
        "http://cli.example/predict/",
    ])
    .unwrap();

    let mut config = CheckerConfig::load_file(&path).unwrap();
    config.apply_args(&args);

    assert_eq!(config.endpoint, "http://cli.example/predict/");
    assert_eq!(config.alert_timeout_ms, 1000);
}

#[test]
fn test_validate_command_reports_sleep_hours() {
    let args = parse(&[
        "validate",
        "--nama=Ana",
        "--usia=20",
        "--jam-belajar=5",
        "--durasi-tidur=24.5",
    ])
    .unwrap();

    let report = validate::run(&args, &CheckerConfig::default());

    assert_eq!(report.status, SessionStatus::Rejected);
    assert_eq!(report.invalid_field.as_deref(), Some("durasi_tidur"));
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_fields_command() {
    let out = fields::run(&parse(&["fields"]).unwrap());
    for name in ["nama", "usia", "jam_belajar", "durasi_tidur"] {
        assert!(out.contains(name));
    }
}
