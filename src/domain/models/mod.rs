//! Domain models: plain data types shared across layers.

pub mod credentials;
pub mod validation;

pub use credentials::AwsCredentials;
pub use validation::{ValidationError, ValidationResult};
