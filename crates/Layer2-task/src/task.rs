//! Process invocation and result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Unique identifier for a process invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(pub Uuid);

impl InvocationId {
    /// Generate a new random InvocationId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A shell command to run in a working directory
///
/// Created per invocation and not retained after the result is returned.
#[derive(Debug, Clone)]
pub struct ProcessInvocation {
    /// Identifier used in log lines
    pub id: InvocationId,

    /// Command line passed to the platform shell
    pub command: String,

    /// Working directory for the child
    pub working_dir: PathBuf,

    /// When the invocation was created
    pub created_at: DateTime<Utc>,
}

impl ProcessInvocation {
    pub fn new(command: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            id: InvocationId::new(),
            command: command.into(),
            working_dir: working_dir.into(),
            created_at: Utc::now(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

/// Output of a process that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Everything written to stdout
    pub stdout: String,

    /// Everything written to stderr
    pub stderr: String,
}

impl ProcessResult {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}
