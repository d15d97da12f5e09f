//! Fetch-task configuration resolution and validation.

use tracing::debug;

use crate::domain::models::{ValidationError, ValidationResult};
use crate::domain::ports::errors::ConfigError;
use crate::domain::ports::task::{ExecutionContext, TaskConfiguration, PACKAGE, REPO};
use crate::infrastructure::environment::keys::{
    PackageKeys, AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_USE_IAM_ROLE,
    GO_ARTIFACTS_S3_BUCKET,
};
use crate::infrastructure::environment::GoEnvironment;

const VALID_USE_IAM_ROLE_VALUES: [&str; 6] = ["true", "false", "yes", "no", "on", "off"];

/// Resolved coordinates of the upstream material whose artifacts this task
/// fetches, plus the validation pass over everything the transfer needs.
///
/// All fields are computed at construction time from the task's `REPO` /
/// `PACKAGE` properties and the environment snapshot; each may legitimately
/// be empty when the corresponding dynamic key is not exported. Callers
/// must invoke [`FetchConfig::validate`] explicitly before relying on the
/// resolved values.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    material_label: String,
    pipeline: String,
    stage: String,
    job: String,
    env: GoEnvironment,
}

impl FetchConfig {
    /// Resolve the material coordinates from the host-supplied task
    /// configuration and execution context.
    pub fn new(config: &impl TaskConfiguration, context: &impl ExecutionContext) -> Self {
        Self::with_environment(config, GoEnvironment::new().put_all(context.environment()))
    }

    /// Resolve against an already seeded environment store.
    pub fn with_environment(config: &impl TaskConfiguration, env: GoEnvironment) -> Self {
        let repo = config.property(REPO).unwrap_or_default();
        let package = config.property(PACKAGE).unwrap_or_default();
        let keys = PackageKeys::for_material(&repo, &package);
        debug!(%repo, %package, label_key = %keys.label, "resolving material coordinates");

        Self {
            material_label: env.get(&keys.label).to_string(),
            pipeline: env.get(&keys.pipeline_name).to_string(),
            stage: env.get(&keys.stage_name).to_string(),
            job: env.get(&keys.job_name).to_string(),
            env,
        }
    }

    /// Check that everything the S3 transfer will need is configured.
    ///
    /// Errors accumulate in a fixed order: access key id, secret access key
    /// (both skipped when an IAM role is in use), bucket, then a single
    /// composite message when the material label could not be resolved. A
    /// malformed `AWS_USE_IAM_ROLE` value aborts validation instead.
    pub fn validate(&self) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::new();
        if !self.use_iam_role()? {
            if self.env.is_absent(AWS_ACCESS_KEY_ID) {
                result.add_error(Self::env_not_found(AWS_ACCESS_KEY_ID));
            }
            if self.env.is_absent(AWS_SECRET_ACCESS_KEY) {
                result.add_error(Self::env_not_found(AWS_SECRET_ACCESS_KEY));
            }
        }
        if self.env.is_absent(GO_ARTIFACTS_S3_BUCKET) {
            result.add_error(Self::env_not_found(GO_ARTIFACTS_S3_BUCKET));
        }
        if self.material_label.is_empty() {
            result.add_error(ValidationError::message(
                "Please check Repository name or Package name configuration. \
                 Also ensure that the appropriate S3 material is configured for the pipeline.",
            ));
        }
        Ok(result)
    }

    /// Whether credential presence checks are bypassed in favor of an IAM
    /// role. Absent (missing or empty) means `false`; otherwise the value
    /// must be one of
    /// `true`/`yes`/`on`/`false`/`no`/`off`, case-insensitive.
    pub fn use_iam_role(&self) -> Result<bool, ConfigError> {
        if self.env.is_absent(AWS_USE_IAM_ROLE) {
            return Ok(false);
        }
        let value = self.env.get(AWS_USE_IAM_ROLE);
        match value.to_lowercase().as_str() {
            "true" | "yes" | "on" => Ok(true),
            "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::unexpected_flag_value(
                AWS_USE_IAM_ROLE,
                value,
                &VALID_USE_IAM_ROLE_VALUES,
            )),
        }
    }

    /// Bucket prefix the upstream job published its artifacts under.
    ///
    /// Precondition: the material label resolved and splits into
    /// `<pipelineCounter>.<stageCounter>`; a label that does not is
    /// reported as [`ConfigError::MalformedMaterialLabel`].
    pub fn artifacts_location(&self) -> Result<String, ConfigError> {
        let mut counters = self.material_label.split('.');
        let malformed = || ConfigError::MalformedMaterialLabel {
            label: self.material_label.clone(),
        };
        let pipeline_counter = counters.next().ok_or_else(malformed)?;
        let stage_counter = counters.next().ok_or_else(malformed)?;
        Ok(self.env.artifacts_location_template(
            &self.pipeline,
            &self.stage,
            &self.job,
            pipeline_counter,
            stage_counter,
        ))
    }

    /// `AWS_ACCESS_KEY_ID` verbatim, unvalidated.
    pub fn aws_access_key_id(&self) -> &str {
        self.env.get(AWS_ACCESS_KEY_ID)
    }

    /// `AWS_SECRET_ACCESS_KEY` verbatim, unvalidated.
    pub fn aws_secret_access_key(&self) -> &str {
        self.env.get(AWS_SECRET_ACCESS_KEY)
    }

    /// `GO_ARTIFACTS_S3_BUCKET` verbatim, unvalidated.
    pub fn s3_bucket(&self) -> &str {
        self.env.get(GO_ARTIFACTS_S3_BUCKET)
    }

    /// Material label as resolved, `""` when the dynamic key was absent.
    pub fn material_label(&self) -> &str {
        &self.material_label
    }

    /// Upstream pipeline name as resolved.
    pub fn pipeline(&self) -> &str {
        &self.pipeline
    }

    /// Upstream stage name as resolved.
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Upstream job name as resolved.
    pub fn job(&self) -> &str {
        &self.job
    }

    fn env_not_found(variable: &str) -> ValidationError {
        ValidationError::for_key(variable, format!("{variable} environment variable not present"))
    }
}
