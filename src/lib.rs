//! GoCD S3 Fetch - configuration and credentials resolution
//!
//! Resolves build-pipeline coordinates and AWS credentials for a GoCD S3
//! artifact-fetch task from the flat environment-variable namespace the
//! agent exports, and validates the result before any transfer starts.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Validation/credential models, host-facing
//!   port traits, and the error taxonomy
//! - **Service Layer** (`services`): `FetchConfig` resolution and validation
//! - **Infrastructure Layer** (`infrastructure`): Environment snapshot
//!   store, dynamic key derivation, credential provider selection
//!
//! The plugin host runtime and the S3 transfer itself live outside this
//! crate; they interact through the port traits and the plain accessors on
//! [`FetchConfig`].
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use gocd_s3_fetch::FetchConfig;
//!
//! let config = HashMap::from([
//!     ("REPO".to_string(), "gocd".to_string()),
//!     ("PACKAGE".to_string(), "app".to_string()),
//! ]);
//! let context = HashMap::from([
//!     ("GO_PACKAGE_GOCD_APP_LABEL".to_string(), "20.1".to_string()),
//! ]);
//!
//! let fetch = FetchConfig::new(&config, &context);
//! let result = fetch.validate()?;
//! assert!(!result.is_successful()); // AWS keys and bucket are missing
//! # Ok::<(), gocd_s3_fetch::ConfigError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{AwsCredentials, ValidationError, ValidationResult};
pub use domain::ports::{ConfigError, CredentialsError, ExecutionContext, TaskConfiguration};
pub use infrastructure::credentials::{
    AccessKeyCredentialsProvider, AwsCredentialsFactory, CredentialsProvider,
    CredentialsProviderChain,
};
pub use infrastructure::environment::GoEnvironment;
pub use services::FetchConfig;
