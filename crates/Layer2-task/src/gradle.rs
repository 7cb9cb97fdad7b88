//! Gradle invoker - builds wrapper invocations on top of a `ProcessRunner`
//!
//! No validation or escaping is applied to the argument string; callers
//! build it with `deploy_args` / `debug_deploy_args`.

use crate::executor::{LocalExecutor, ProcessRunner};
use crate::output::OutputSink;
use crate::task::{ProcessInvocation, ProcessResult};
use async_trait::async_trait;
use rio_foundation::{Result, DEFAULT_GRADLE_WRAPPER};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// `deploy --offline -PteamNumber=<team>`
pub fn deploy_args(team_number: u32) -> String {
    format!("deploy --offline -PteamNumber={}", team_number)
}

/// `deploy --offline -PdebugMode -PteamNumber=<team>`
pub fn debug_deploy_args(team_number: u32) -> String {
    format!("deploy --offline -PdebugMode -PteamNumber={}", team_number)
}

/// Build tool seam used by the deploy/debug providers
#[async_trait]
pub trait BuildTool: Send + Sync {
    /// Run the build tool with `args` in `working_dir`
    async fn run(
        &self,
        args: &str,
        working_dir: &Path,
        sink: Option<&dyn OutputSink>,
    ) -> Result<ProcessResult>;

    /// Get build tool name
    fn name(&self) -> &str;
}

/// Gradle wrapper invoker
pub struct Gradle {
    /// Wrapper executable (`./gradlew`, `gradlew`, ...)
    wrapper: String,

    /// Process runner
    runner: Arc<dyn ProcessRunner>,
}

impl Gradle {
    /// Create with the platform default wrapper and a local executor
    pub fn new() -> Self {
        Self::with_wrapper(DEFAULT_GRADLE_WRAPPER)
    }

    pub fn with_wrapper(wrapper: impl Into<String>) -> Self {
        Self {
            wrapper: wrapper.into(),
            runner: Arc::new(LocalExecutor::new()),
        }
    }

    /// Use a custom process runner
    pub fn with_runner(mut self, runner: Arc<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn wrapper(&self) -> &str {
        &self.wrapper
    }

    /// Full command line for `args`
    pub fn command_for(&self, args: &str) -> String {
        format!("{} {}", self.wrapper, args)
    }
}

impl Default for Gradle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BuildTool for Gradle {
    async fn run(
        &self,
        args: &str,
        working_dir: &Path,
        sink: Option<&dyn OutputSink>,
    ) -> Result<ProcessResult> {
        let invocation = ProcessInvocation::new(self.command_for(args), working_dir);
        info!(
            "Running gradle ({}) in {}: {}",
            invocation.id,
            working_dir.display(),
            args
        );
        self.runner.run(&invocation, sink).await
    }

    fn name(&self) -> &str {
        "gradle"
    }
}
