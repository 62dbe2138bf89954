//! Employee service client.

mod client;
mod dto;
pub mod retry;

pub use client::EmployeeApiClient;
pub use retry::RetryPolicy;
