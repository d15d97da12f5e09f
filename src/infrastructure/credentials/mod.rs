//! Credentials resolution infrastructure
//!
//! Selects how AWS credentials will be obtained for the S3 transfer, in
//! priority order: an instance profile when `AWS_USE_INSTANCE_PROFILE`
//! affirms it, otherwise static keys from `AWS_ACCESS_KEY_ID` /
//! `AWS_SECRET_ACCESS_KEY`. The selected provider is wrapped in a chain so
//! that call sites stay unchanged if multi-provider ordering is ever
//! needed. No network I/O happens here; the instance-profile metadata
//! query belongs to the transfer layer at credential-use time.

use tracing::debug;

use crate::domain::models::AwsCredentials;
use crate::domain::ports::errors::{ConfigError, CredentialsError};
use crate::infrastructure::environment::keys::{
    AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_USE_INSTANCE_PROFILE,
};
use crate::infrastructure::environment::GoEnvironment;

const VALID_USE_INSTANCE_PROFILE_VALUES: [&str; 6] = ["true", "false", "yes", "no", "1", "0"];
const AFFIRMATIVE_USE_INSTANCE_PROFILE_VALUES: [&str; 3] = ["true", "yes", "1"];

/// Static-key provider holding the two key strings verbatim.
///
/// Used instead of re-reading the process environment at credential-use
/// time so that the values captured during resolution are exactly the ones
/// handed to the transfer layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKeyCredentialsProvider {
    access_key: String,
    secret_key: String,
}

impl AccessKeyCredentialsProvider {
    /// Capture an access-key/secret pair.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// The stored pair, if both halves are non-empty. Guards against the
    /// stored values having been emptied despite the presence checks at
    /// construction time.
    pub fn credentials(&self) -> Result<AwsCredentials, CredentialsError> {
        if self.access_key.is_empty() || self.secret_key.is_empty() {
            return Err(CredentialsError::Unavailable);
        }
        Ok(AwsCredentials::new(&self.access_key, &self.secret_key))
    }
}

/// One credential-resolution strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsProvider {
    /// Temporary credentials from the instance metadata endpoint, queried
    /// lazily by the transfer layer.
    InstanceProfile,
    /// Static keys captured from the environment.
    AccessKey(AccessKeyCredentialsProvider),
}

/// Ordered, non-empty list of providers queried in sequence.
///
/// Current policy always yields exactly one entry; the chain keeps the
/// call-site contract stable for future multi-provider ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsProviderChain {
    providers: Vec<CredentialsProvider>,
}

impl CredentialsProviderChain {
    fn new(providers: Vec<CredentialsProvider>) -> Self {
        debug_assert!(!providers.is_empty(), "provider chain must be non-empty");
        Self { providers }
    }

    /// Providers in priority order.
    pub fn providers(&self) -> &[CredentialsProvider] {
        &self.providers
    }

    /// Highest-priority provider.
    pub fn first(&self) -> &CredentialsProvider {
        &self.providers[0]
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// True iff the chain holds no providers; never the case for chains
    /// built by [`AwsCredentialsFactory`].
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Builds the provider chain for one task execution.
#[derive(Debug)]
pub struct AwsCredentialsFactory<'a> {
    env: &'a GoEnvironment,
}

impl<'a> AwsCredentialsFactory<'a> {
    /// Factory reading from the given environment snapshot.
    pub fn new(env: &'a GoEnvironment) -> Self {
        Self { env }
    }

    /// Select and assemble the provider chain.
    ///
    /// `AWS_USE_INSTANCE_PROFILE` is consulted first: an affirmative value
    /// selects the instance profile, a negative one falls through to the
    /// static-key path, and anything else is a fatal
    /// [`ConfigError::UnexpectedFlagValue`]. The static-key path requires
    /// both key variables to be present and non-empty, checked in that
    /// fixed order.
    pub fn credentials_provider(&self) -> Result<CredentialsProviderChain, ConfigError> {
        let mut providers = Vec::new();

        if !self.env.is_absent(AWS_USE_INSTANCE_PROFILE) {
            let code = self.env.get(AWS_USE_INSTANCE_PROFILE);
            let lowered = code.to_lowercase();
            if AFFIRMATIVE_USE_INSTANCE_PROFILE_VALUES.contains(&lowered.as_str()) {
                debug!(
                    value = code,
                    "AWS_USE_INSTANCE_PROFILE affirmative; initializing with instance profile provider"
                );
                providers.push(CredentialsProvider::InstanceProfile);
            } else if !VALID_USE_INSTANCE_PROFILE_VALUES.contains(&lowered.as_str()) {
                return Err(ConfigError::unexpected_flag_value(
                    AWS_USE_INSTANCE_PROFILE,
                    code,
                    &VALID_USE_INSTANCE_PROFILE_VALUES,
                ));
            }
        }

        if providers.is_empty() {
            if self.env.is_absent(AWS_ACCESS_KEY_ID) {
                return Err(ConfigError::env_not_found(AWS_ACCESS_KEY_ID));
            }
            if self.env.is_absent(AWS_SECRET_ACCESS_KEY) {
                return Err(ConfigError::env_not_found(AWS_SECRET_ACCESS_KEY));
            }
            debug!("AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY present; initializing with access key provider");
            providers.push(CredentialsProvider::AccessKey(
                AccessKeyCredentialsProvider::new(
                    self.env.get(AWS_ACCESS_KEY_ID),
                    self.env.get(AWS_SECRET_ACCESS_KEY),
                ),
            ));
        }

        Ok(CredentialsProviderChain::new(providers))
    }
}
