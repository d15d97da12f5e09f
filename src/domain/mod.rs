//! Domain layer for the S3 fetch task
//!
//! This module contains core business logic and domain models.

pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use ports::{ConfigError, CredentialsError};
