//! AWS credential value objects.

use serde::{Deserialize, Serialize};

/// A resolved access-key/secret pair handed to the S3 transfer layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsCredentials {
    /// `AWS_ACCESS_KEY_ID` value.
    pub access_key_id: String,
    /// `AWS_SECRET_ACCESS_KEY` value.
    pub secret_access_key: String,
}

impl AwsCredentials {
    /// Build a credential pair from its two components.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }
}
