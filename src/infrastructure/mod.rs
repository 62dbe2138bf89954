//! Infrastructure layer with external service adapters.

/// Employee service client.
pub mod api;
/// Application configuration.
pub mod config;

pub use api::{EmployeeApiClient, RetryPolicy};
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
