//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;

const APP_NAME: &str = "rosterdeck";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "rosterdeck";

/// Base address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8111";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Employee service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Employee service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the service, without the `/api/v1` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Connect timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Retry policy for failed requests.
    #[serde(default)]
    pub retry: RetryConfig,
}

impl ApiConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            connect_timeout_secs: None,
            retry: RetryConfig::default(),
        }
    }
}

/// Retry configuration. `max_attempts = 1` disables retrying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts per request, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry, in milliseconds.
    #[serde(default = "default_initial_interval_ms")]
    pub initial_interval_ms: u64,

    /// Factor applied to the delay after each retry.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// Upper bound for a single delay, in milliseconds.
    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_interval_ms: default_initial_interval_ms(),
            multiplier: default_multiplier(),
            max_interval_ms: default_max_interval_ms(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Show the email column in the roster table.
    #[serde(default)]
    pub show_email: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            show_email: false,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_max_attempts() -> u32 {
    1
}

const fn default_initial_interval_ms() -> u64 {
    1000
}

const fn default_multiplier() -> f64 {
    2.0
}

const fn default_max_interval_ms() -> u64 {
    10_000
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    ///
    /// `--config` is not merged; it only selects which file was loaded.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = args.base_url {
            self.api.base_url = base_url;
        }
        if let Some(timeout) = args.timeout {
            self.api.timeout_secs = Some(timeout);
        }
        if let Some(attempts) = args.retry_attempts {
            self.api.retry.max_attempts = attempts.max(1);
        }
        if let Some(show_email) = args.show_email {
            self.ui.show_email = show_email;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("rosterdeck.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            api: ApiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_with_api_section() {
        let toml_content = r#"
            log_level = "debug"

            [api]
            base_url = "http://roster.internal:9000"
            timeout_secs = 120

            [api.retry]
            max_attempts = 3

            [ui]
            show_email = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.base_url, "http://roster.internal:9000");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(120)));
        assert_eq!(config.api.connect_timeout(), None);
        assert_eq!(config.api.retry.max_attempts, 3);
        assert_eq!(config.api.retry.initial_interval_ms, 1000);
        assert!(config.ui.show_email);
        assert_eq!(config.ui.accent_color, "Cyan");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout(), None);
        assert_eq!(config.api.retry.max_attempts, 1);
        assert!(!config.ui.show_email);
    }

    #[test]
    fn test_cli_args_override_file_values() {
        let mut config: AppConfig = toml::from_str("[api]\nbase_url = \"http://file:1\"").unwrap();
        let args = CliArgs::parse_from([
            "rosterdeck",
            "--base-url",
            "http://cli:2",
            "--retry-attempts",
            "0",
            "--log-level",
            "warn",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.api.base_url, "http://cli:2");
        assert_eq!(config.api.retry.max_attempts, 1);
        assert_eq!(config.log_level, LogLevel::Warn);
    }
}
