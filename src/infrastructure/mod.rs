//! Infrastructure layer module
//!
//! Adapters around the concrete mechanisms the domain depends on:
//! - Environment snapshot store and dynamic key derivation
//! - AWS credential provider selection
//!
//! Infrastructure implementations satisfy the contracts defined in the domain layer.

pub mod credentials;
pub mod environment;
