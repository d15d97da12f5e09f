//! Error types raised by configuration and credential resolution.
//!
//! Two distinct failure times, kept as separate enums:
//! - [`ConfigError`]: resolution-time, fatal to the current task. Raised
//!   immediately when an enumerated flag holds an unexpected value or a
//!   required variable is missing during credential-chain construction.
//! - [`CredentialsError`]: use-time, raised by a provider when asked for
//!   credentials it cannot produce.
//!
//! Missing variables found during `validate()` are NOT errors in this
//! sense; they are accumulated into a
//! [`ValidationResult`](crate::domain::models::ValidationResult) instead.

use thiserror::Error;

/// Fatal configuration-resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("{variable} environment variable not present")]
    EnvNotFound {
        /// Name of the missing variable.
        variable: String,
    },

    /// An enumerated flag variable holds a value outside its accepted set.
    #[error(
        "Unexpected value in {variable} environment variable; was {value}, \
         but expected one of the following {expected}"
    )]
    UnexpectedFlagValue {
        /// Name of the flag variable.
        variable: String,
        /// The value actually found.
        value: String,
        /// Rendered accepted-literal set, e.g. `[true, false, yes, no, on, off]`.
        expected: String,
    },

    /// The material label did not split into `<pipelineCounter>.<stageCounter>`.
    #[error("material label '{label}' is not of the form <pipelineCounter>.<stageCounter>")]
    MalformedMaterialLabel {
        /// The offending label value.
        label: String,
    },
}

impl ConfigError {
    /// Missing-variable error for `variable`.
    pub fn env_not_found(variable: impl Into<String>) -> Self {
        Self::EnvNotFound {
            variable: variable.into(),
        }
    }

    /// Unexpected-flag-value error naming the accepted literals.
    pub fn unexpected_flag_value(variable: &str, value: &str, accepted: &[&str]) -> Self {
        Self::UnexpectedFlagValue {
            variable: variable.to_string(),
            value: value.to_string(),
            expected: format!("[{}]", accepted.join(", ")),
        }
    }
}

/// Use-time credential resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// A static-key provider was invoked with an empty key or secret.
    #[error(
        "Unable to load AWS credentials from initialized properties \
         (accessKeyId and secretKey)"
    )]
    Unavailable,
}
