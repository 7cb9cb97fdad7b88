//! Process runner trait

use crate::output::OutputSink;
use crate::task::{ProcessInvocation, ProcessResult};
use async_trait::async_trait;
use rio_foundation::Result;

/// Process runner trait - implement to add new execution backends
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the invocation to completion
    ///
    /// Every chunk of output is forwarded to `sink` as it arrives. A non-zero
    /// exit or a spawn failure is returned as `Error::Process`.
    async fn run(
        &self,
        invocation: &ProcessInvocation,
        sink: Option<&dyn OutputSink>,
    ) -> Result<ProcessResult>;

    /// Get runner name
    fn name(&self) -> &'static str;
}
