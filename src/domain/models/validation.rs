//! Validation results returned to the plugin host.
//!
//! Validation never raises: every problem found is appended to an ordered
//! list and the whole list goes back to the host, which renders the
//! messages on the task configuration screen.

use serde::{Deserialize, Serialize};

/// One configuration problem, optionally tied to the environment variable
/// that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Environment variable the error refers to, when there is one.
    pub key: Option<String>,
    /// Human-readable message shown to the pipeline author.
    pub message: String,
}

impl ValidationError {
    /// Error tied to a specific environment variable.
    pub fn for_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            message: message.into(),
        }
    }

    /// Error not attributable to a single variable.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            key: None,
            message: message.into(),
        }
    }
}

/// Ordered, accumulating list of validation errors. Successful iff empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Empty (successful) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error; insertion order is preserved.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// True iff no errors were recorded.
    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded errors, in insertion order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Just the messages, in insertion order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_successful() {
        assert!(ValidationResult::new().is_successful());
    }

    #[test]
    fn errors_keep_insertion_order() {
        let mut result = ValidationResult::new();
        result.add_error(ValidationError::for_key("A", "first"));
        result.add_error(ValidationError::message("second"));
        assert!(!result.is_successful());
        assert_eq!(result.messages(), vec!["first", "second"]);
        assert_eq!(result.errors()[0].key.as_deref(), Some("A"));
        assert_eq!(result.errors()[1].key, None);
    }

    #[test]
    fn serializes_for_the_host_protocol() {
        let mut result = ValidationResult::new();
        result.add_error(ValidationError::for_key("K", "K missing"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["errors"][0]["key"], "K");
        assert_eq!(json["errors"][0]["message"], "K missing");
    }
}
