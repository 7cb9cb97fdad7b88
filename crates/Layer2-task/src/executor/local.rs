//! Local executor - runs commands on the host system with output streaming
//!
//! Features:
//! - Real-time stdout/stderr streaming to an `OutputSink`
//! - Full stdout/stderr capture, independent of the sink
//! - Partial output attached to process errors
//! - Child killed when the caller drops the future

use crate::executor::ProcessRunner;
use crate::output::{OutputSink, OutputStream, Utf8Decoder};
use crate::task::{ProcessInvocation, ProcessResult};
use async_trait::async_trait;
use rio_foundation::{ProcessError, ProcessFailure, Result};
use std::process::Stdio;
use std::time::Instant;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Read buffer size per pipe
const DEFAULT_READ_BUFFER: usize = 8 * 1024;

/// Local executor configuration
#[derive(Debug, Clone)]
pub struct LocalExecutorConfig {
    /// Shell program
    pub shell: String,
    /// Argument that makes the shell run the next argument as a command
    pub shell_arg: String,
    /// Bytes read from a pipe per chunk
    pub read_buffer_size: usize,
}

impl Default for LocalExecutorConfig {
    fn default() -> Self {
        let (shell, shell_arg) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };
        Self {
            shell: shell.to_string(),
            shell_arg: shell_arg.to_string(),
            read_buffer_size: DEFAULT_READ_BUFFER,
        }
    }
}

/// Local executor that runs commands directly on the host
#[derive(Debug, Clone, Default)]
pub struct LocalExecutor {
    config: LocalExecutorConfig,
}

impl LocalExecutor {
    /// Create a new local executor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with configuration
    pub fn with_config(config: LocalExecutorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocalExecutorConfig {
        &self.config
    }

    fn build_command(&self, invocation: &ProcessInvocation) -> Command {
        let mut cmd = Command::new(&self.config.shell);
        cmd.arg(&self.config.shell_arg)
            .arg(&invocation.command)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl ProcessRunner for LocalExecutor {
    async fn run(
        &self,
        invocation: &ProcessInvocation,
        sink: Option<&dyn OutputSink>,
    ) -> Result<ProcessResult> {
        debug!(
            "Executing {} in {}: {}",
            invocation.id,
            invocation.working_dir.display(),
            invocation.command
        );

        let started_at = Instant::now();

        let mut child = self.build_command(invocation).spawn().map_err(|e| {
            warn!("Failed to spawn {}: {}", invocation.id, e);
            ProcessError::new(&invocation.command, ProcessFailure::Spawn(e))
        })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let buffer_size = self.config.read_buffer_size;

        // Both pipes are drained concurrently with the wait so a full pipe never
        // blocks the child.
        let (stdout, stderr, status) = tokio::join!(
            pump(stdout, OutputStream::Stdout, sink, buffer_size),
            pump(stderr, OutputStream::Stderr, sink, buffer_size),
            child.wait(),
        );

        let elapsed = started_at.elapsed().as_secs_f64();

        let failure = match (status, stdout.error, stderr.error) {
            (Err(e), _, _) => Some(ProcessFailure::Wait(e)),
            (Ok(status), _, _) if !status.success() => Some(match status.code() {
                Some(code) => ProcessFailure::Exit(code),
                None => ProcessFailure::Signal,
            }),
            (Ok(_), Some(e), _) | (Ok(_), None, Some(e)) => Some(ProcessFailure::Wait(e)),
            (Ok(_), None, None) => None,
        };

        match failure {
            None => {
                info!("Process {} finished in {:.1}s", invocation.id, elapsed);
                Ok(ProcessResult::new(stdout.text, stderr.text))
            }
            Some(failure) => {
                warn!(
                    "Process {} failed after {:.1}s: {}",
                    invocation.id, elapsed, failure
                );
                Err(ProcessError::new(&invocation.command, failure)
                    .with_output(stdout.text, stderr.text)
                    .into())
            }
        }
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

/// Text captured from one pipe, plus the read error that ended it early
struct Captured {
    text: String,
    error: Option<std::io::Error>,
}

/// Read a pipe to EOF, forwarding each decoded chunk to the sink
async fn pump<R>(
    reader: Option<R>,
    stream: OutputStream,
    sink: Option<&dyn OutputSink>,
    buffer_size: usize,
) -> Captured
where
    R: AsyncRead + Unpin,
{
    let mut captured = Captured {
        text: String::new(),
        error: None,
    };
    let Some(mut reader) = reader else {
        return captured;
    };

    let mut buf = vec![0u8; buffer_size.max(1)];
    let mut decoder = Utf8Decoder::new();

    loop {
        let (chunk, done) = match reader.read(&mut buf).await {
            Ok(0) => (decoder.finish(), true),
            Ok(n) => (decoder.decode(&buf[..n]), false),
            Err(e) => {
                captured.error = Some(e);
                (decoder.finish(), true)
            }
        };

        if !chunk.is_empty() {
            if let Some(sink) = sink {
                sink.on_output(stream, &chunk);
            }
            captured.text.push_str(&chunk);
        }

        if done {
            break;
        }
    }

    captured
}
