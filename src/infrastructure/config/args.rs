use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "rosterdeck",
    version,
    about = "A terminal client for managing an employee roster",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Employee service address, e.g. `http://localhost:8111`.
    #[arg(long, value_name = "URL", env = "ROSTERDECK_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Attempts per request, including the first.
    #[arg(long, value_name = "N")]
    pub retry_attempts: Option<u32>,

    /// Show the email column.
    #[arg(long)]
    pub show_email: Option<bool>,
}
