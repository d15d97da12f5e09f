//! Environment-variable key names and dynamic key derivation.
//!
//! Fixed key names are the contract between the GoCD agent and this plugin.
//! Dynamic keys are derived per material from the task's repository and
//! package names; the derivation is split into two pure functions
//! (normalization and templating) so each can be tested on its own.

/// AWS access key id, consumed when no instance profile is selected.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// AWS secret access key, consumed when no instance profile is selected.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Flag: skip static-key validation and rely on an IAM role.
pub const AWS_USE_IAM_ROLE: &str = "AWS_USE_IAM_ROLE";
/// Flag: resolve credentials from the instance metadata endpoint.
pub const AWS_USE_INSTANCE_PROFILE: &str = "AWS_USE_INSTANCE_PROFILE";
/// Bucket holding published artifacts.
pub const GO_ARTIFACTS_S3_BUCKET: &str = "GO_ARTIFACTS_S3_BUCKET";
/// Base URL of the GoCD server.
pub const GO_SERVER_URL: &str = "GO_SERVER_URL";
/// Name of the currently running pipeline.
pub const GO_PIPELINE_NAME: &str = "GO_PIPELINE_NAME";
/// Counter of the currently running pipeline.
pub const GO_PIPELINE_COUNTER: &str = "GO_PIPELINE_COUNTER";
/// Name of the currently running stage.
pub const GO_STAGE_NAME: &str = "GO_STAGE_NAME";
/// Counter of the currently running stage.
pub const GO_STAGE_COUNTER: &str = "GO_STAGE_COUNTER";
/// Name of the currently running job.
pub const GO_JOB_NAME: &str = "GO_JOB_NAME";
/// User who triggered the build.
pub const GO_TRIGGER_USER: &str = "GO_TRIGGER_USER";

/// Canonicalize a free-form identifier into an environment-key fragment.
///
/// ASCII letters are uppercased, digits and underscores pass through, and
/// every other character (dash, period, any punctuation or non-ASCII)
/// becomes exactly one underscore. Total over any input; idempotent and
/// length-preserving in characters.
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// The four dynamically named environment keys that describe where a
/// package material's artifacts were published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageKeys {
    /// `GO_PACKAGE_<REPO>_<PACKAGE>_LABEL`
    pub label: String,
    /// `GO_PACKAGE_<REPO>_<PACKAGE>_PIPELINE_NAME`
    pub pipeline_name: String,
    /// `GO_PACKAGE_<REPO>_<PACKAGE>_STAGE_NAME`
    pub stage_name: String,
    /// `GO_PACKAGE_<REPO>_<PACKAGE>_JOB_NAME`
    pub job_name: String,
}

impl PackageKeys {
    /// Derive the dynamic key set for a repository/package pair.
    ///
    /// Both identifiers are normalized first, so names containing dashes,
    /// periods, or other special characters resolve to the same keys the
    /// GoCD server exports.
    pub fn for_material(repo: &str, package: &str) -> Self {
        let repo = normalize_identifier(repo);
        let package = normalize_identifier(package);
        Self {
            label: format!("GO_PACKAGE_{repo}_{package}_LABEL"),
            pipeline_name: format!("GO_PACKAGE_{repo}_{package}_PIPELINE_NAME"),
            stage_name: format!("GO_PACKAGE_{repo}_{package}_STAGE_NAME"),
            job_name: format!("GO_PACKAGE_{repo}_{package}_JOB_NAME"),
        }
    }
}
