//! # rio-task
//!
//! Process execution for rio-deploy.
//! Runs external commands and streams their output while they run.
//!
//! ## Features
//!
//! - Shell command execution in a chosen working directory
//! - **Incremental stdout/stderr streaming** to an `OutputSink`
//! - Full output capture, with partial output kept on failure
//! - Gradle wrapper invocation for deploy / debug builds

pub mod executor;
pub mod gradle;
pub mod output;
pub mod task;

// Process execution
pub use executor::{LocalExecutor, LocalExecutorConfig, ProcessRunner};
pub use task::{InvocationId, ProcessInvocation, ProcessResult};

// Output streaming
pub use output::{OutputBuffer, OutputSink, OutputStream, Utf8Decoder};

// Build tool
pub use gradle::{debug_deploy_args, deploy_args, BuildTool, Gradle};
