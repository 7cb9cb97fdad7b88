//! Process runners
//!
//! - `LocalExecutor` - runs a command through the platform shell with output streaming

pub mod local;
pub mod r#trait;

pub use local::{LocalExecutor, LocalExecutorConfig};
pub use r#trait::ProcessRunner;
