//! Runtime configuration.
//!
//! Layered as defaults, then an optional TOML file, then `MHCHECK_*`
//! environment variables, then command line options. Later layers win.
//!
//! ```toml
//! endpoint = "https://rayency.pythonanywhere.com/predict/"
//! results_page = "/hasil.html"
//! alert_timeout_ms = 5000
//! request_timeout_ms = 10000
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::api::client::HttpConfig;
use crate::api::DEFAULT_ENDPOINT;
use crate::cli::args::Args;
use crate::page::redirect::DEFAULT_RESULTS_PAGE;
use crate::CheckerError;

/// Environment variable naming the endpoint
pub const ENV_ENDPOINT: &str = "MHCHECK_ENDPOINT";
/// Environment variable naming the results page
pub const ENV_RESULTS_PAGE: &str = "MHCHECK_RESULTS_PAGE";
/// Environment variable holding the request timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "MHCHECK_TIMEOUT_MS";

/// Effective configuration for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckerConfig {
    /// URL the form is posted to
    pub endpoint: String,
    /// Path of the results page
    pub results_page: String,
    /// How long alerts stay visible
    pub alert_timeout_ms: u64,
    /// Request timeout (None = HTTP stack default)
    pub request_timeout_ms: Option<u64>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results_page: DEFAULT_RESULTS_PAGE.to_string(),
            alert_timeout_ms: 5000,
            request_timeout_ms: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    endpoint: Option<String>,
    results_page: Option<String>,
    alert_timeout_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
}

impl CheckerConfig {
    /// Build the effective configuration for the given arguments.
    ///
    /// Reads the file named by `--config` (or `MHCHECK_CONFIG`) and the
    /// process environment.
    pub fn from_args(args: &Args) -> Result<Self, CheckerError> {
        let mut config = match &args.config {
            Some(path) => Self::load_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_env_from(|key| std::env::var(key).ok())?;
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file on top of the defaults
    pub fn load_file(path: &Path) -> Result<Self, CheckerError> {
        let text = std::fs::read_to_string(path).map_err(|e| CheckerError::Config {
            origin: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Parse TOML text on top of the defaults. `origin` names the text in errors.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, CheckerError> {
        let file: ConfigFile = toml::from_str(text).map_err(|e| CheckerError::Config {
            origin: origin.to_string(),
            reason: e.message().to_string(),
        })?;

        let mut config = CheckerConfig::default();
        if let Some(endpoint) = file.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(results_page) = file.results_page {
            config.results_page = results_page;
        }
        if let Some(ms) = file.alert_timeout_ms {
            config.alert_timeout_ms = ms;
        }
        if file.request_timeout_ms.is_some() {
            config.request_timeout_ms = file.request_timeout_ms;
        }
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), CheckerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(results_page) = lookup(ENV_RESULTS_PAGE) {
            self.results_page = results_page;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let ms = raw.trim().parse().map_err(|_| CheckerError::Config {
                origin: ENV_TIMEOUT_MS.to_string(),
                reason: format!("invalid timeout '{}'", raw),
            })?;
            self.request_timeout_ms = Some(ms);
        }
        Ok(())
    }

    /// Apply command line overrides
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(endpoint) = &args.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(results_page) = &args.results_page {
            self.results_page = results_page.clone();
        }
        if args.timeout_ms.is_some() {
            self.request_timeout_ms = args.timeout_ms;
        }
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), CheckerError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(CheckerError::Config {
                origin: "endpoint".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        if self.results_page.trim().is_empty() {
            return Err(CheckerError::Config {
                origin: "results_page".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_millis(self.alert_timeout_ms)
    }

    /// Transport settings for the prediction client
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            endpoint: self.endpoint.clone(),
            timeout_ms: self.request_timeout_ms,
        }
    }
}
