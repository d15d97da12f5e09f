//! Port definitions (Hexagonal Architecture)
//!
//! Contracts between the domain and its collaborators:
//! - TaskConfiguration / ExecutionContext: what the plugin host supplies
//! - ConfigError / CredentialsError: how resolution failures surface
//!
//! These definitions keep the domain independent of the concrete plugin
//! runtime and of the S3 transfer layer that consumes the results.

pub mod errors;
pub mod task;

pub use errors::{ConfigError, CredentialsError};
pub use task::{ExecutionContext, TaskConfiguration, PACKAGE, REPO};
