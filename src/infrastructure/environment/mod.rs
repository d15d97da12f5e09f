//! Process-environment snapshot used by the fetch task.
//!
//! `GoEnvironment` wraps the flat key/value mapping the GoCD agent hands to
//! a task execution. It is seeded once during construction and read-only
//! afterwards. The load-bearing distinction for validation is between
//! [`GoEnvironment::has`] (key exists at all) and
//! [`GoEnvironment::is_absent`] (key missing or empty) — an empty value is
//! never valid configuration.

use std::collections::HashMap;

pub mod keys;

use keys::{
    GO_JOB_NAME, GO_PIPELINE_COUNTER, GO_PIPELINE_NAME, GO_SERVER_URL, GO_STAGE_COUNTER,
    GO_STAGE_NAME, GO_TRIGGER_USER,
};

/// Snapshot of the environment variables visible to one task execution.
#[derive(Debug, Clone, Default)]
pub struct GoEnvironment {
    vars: HashMap<String, String>,
}

impl GoEnvironment {
    /// Create an empty environment, to be seeded with [`Self::put_all`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    pub fn from_process_env() -> Self {
        Self::new().put_all(std::env::vars())
    }

    /// Bulk-insert entries, consuming and returning the store so a seeded
    /// environment can be built in one expression. Used once during
    /// construction; the store is never mutated afterwards.
    pub fn put_all<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Value for `key`, or the empty string when the key is not set.
    pub fn get(&self, key: &str) -> &str {
        self.vars.get(key).map_or("", String::as_str)
    }

    /// True iff `key` is present, including present-but-empty.
    pub fn has(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// True iff `key` is missing or its value is the empty string.
    pub fn is_absent(&self, key: &str) -> bool {
        self.get(key).is_empty()
    }

    /// Dashboard URL of the job that is currently executing, assembled from
    /// the fixed `GO_*` coordinates. Pure derivation: absent keys produce a
    /// garbled URL rather than an error.
    pub fn trace_back_url(&self) -> String {
        format!(
            "{}/tab/build/detail/{}/{}/{}/{}/{}",
            self.get(GO_SERVER_URL),
            self.get(GO_PIPELINE_NAME),
            self.get(GO_PIPELINE_COUNTER),
            self.get(GO_STAGE_NAME),
            self.get(GO_STAGE_COUNTER),
            self.get(GO_JOB_NAME),
        )
    }

    /// User who triggered the build, verbatim.
    pub fn triggered_user(&self) -> &str {
        self.get(GO_TRIGGER_USER)
    }

    /// Location prefix `<pipeline>/<stage>/<job>/<pipelineCounter>.<stageCounter>`
    /// under which a job's artifacts live in the bucket.
    pub fn artifacts_location_template(
        &self,
        pipeline: &str,
        stage: &str,
        job: &str,
        pipeline_counter: &str,
        stage_counter: &str,
    ) -> String {
        format!("{pipeline}/{stage}/{job}/{pipeline_counter}.{stage_counter}")
    }

    /// Artifact location of the currently executing job, with all five
    /// coordinates read from their fixed `GO_*` keys.
    pub fn artifacts_location(&self) -> String {
        self.artifacts_location_template(
            self.get(GO_PIPELINE_NAME),
            self.get(GO_STAGE_NAME),
            self.get(GO_JOB_NAME),
            self.get(GO_PIPELINE_COUNTER),
            self.get(GO_STAGE_COUNTER),
        )
    }
}
