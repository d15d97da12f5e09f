//! Port traits for the plugin host runtime.
//!
//! The host supplies two things at task start: the task-level configuration
//! (the `REPO` and `PACKAGE` properties the pipeline author typed in) and
//! the full environment snapshot of the executing agent. These traits keep
//! the domain independent of the concrete plugin API types.

use std::collections::HashMap;

/// Task-configuration property naming the package repository.
pub const REPO: &str = "REPO";
/// Task-configuration property naming the package.
pub const PACKAGE: &str = "PACKAGE";

/// Task-level key/value configuration supplied by the host.
pub trait TaskConfiguration {
    /// Value of the named property, if the author set one.
    fn property(&self, name: &str) -> Option<String>;
}

/// Execution-time context supplied by the host.
pub trait ExecutionContext {
    /// The full environment snapshot for this task execution.
    fn environment(&self) -> HashMap<String, String>;
}

impl TaskConfiguration for HashMap<String, String> {
    fn property(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl ExecutionContext for HashMap<String, String> {
    fn environment(&self) -> HashMap<String, String> {
        self.clone()
    }
}
