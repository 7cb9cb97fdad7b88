//! Fakes for the host traits used by unit tests

use crate::debug::DebugAttachConfig;
use crate::host::{DebugSessions, OutputChannel, Window};
use async_trait::async_trait;
use parking_lot::Mutex;
use rio_foundation::{Error, ProcessError, ProcessFailure, Result};
use rio_task::{BuildTool, OutputSink, OutputStream, ProcessResult};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ============================================================================
// Window
// ============================================================================

#[derive(Default)]
pub struct FakeChannel {
    pub name: String,
    text: Mutex<String>,
    shows: Mutex<usize>,
}

impl FakeChannel {
    pub fn text(&self) -> String {
        self.text.lock().clone()
    }

    pub fn show_count(&self) -> usize {
        *self.shows.lock()
    }
}

impl OutputChannel for FakeChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, text: &str) {
        self.text.lock().push_str(text);
    }

    fn show(&self) {
        *self.shows.lock() += 1;
    }
}

#[derive(Default)]
pub struct FakeWindow {
    picks: Mutex<VecDeque<Option<usize>>>,
    pick_items: Mutex<Vec<Vec<String>>>,
    errors: Mutex<Vec<String>>,
    channels: Mutex<Vec<Arc<FakeChannel>>>,
}

impl FakeWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers for successive quick picks (empty queue = dismissed)
    pub fn with_picks(self, picks: Vec<Option<usize>>) -> Self {
        *self.picks.lock() = picks.into();
        self
    }

    pub fn pick_count(&self) -> usize {
        self.pick_items.lock().len()
    }

    pub fn last_pick_items(&self) -> Vec<String> {
        self.pick_items.lock().last().cloned().unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    pub fn channel(&self, name: &str) -> Option<Arc<FakeChannel>> {
        self.channels.lock().iter().find(|c| c.name == name).cloned()
    }
}

#[async_trait]
impl Window for FakeWindow {
    fn show_error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }

    async fn show_quick_pick(&self, items: &[String], _placeholder: &str) -> Option<usize> {
        self.pick_items.lock().push(items.to_vec());
        self.picks.lock().pop_front().flatten()
    }

    fn create_output_channel(&self, name: &str) -> Arc<dyn OutputChannel> {
        let channel = Arc::new(FakeChannel {
            name: name.to_string(),
            ..Default::default()
        });
        self.channels.lock().push(channel.clone());
        channel
    }
}

// ============================================================================
// Debug sessions
// ============================================================================

#[derive(Default)]
pub struct FakeDebugSessions {
    reject: bool,
    attempts: Mutex<usize>,
    started: Mutex<Vec<DebugAttachConfig>>,
}

impl FakeDebugSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    pub fn started(&self) -> Vec<DebugAttachConfig> {
        self.started.lock().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }
}

#[async_trait]
impl DebugSessions for FakeDebugSessions {
    async fn start_debugging(&self, config: &DebugAttachConfig) -> Result<()> {
        *self.attempts.lock() += 1;
        if self.reject {
            return Err(Error::Internal("debug adapter not ready".to_string()));
        }
        self.started.lock().push(config.clone());
        Ok(())
    }
}

// ============================================================================
// Build tool
// ============================================================================

/// Records every build and either succeeds or exits with `exit_code`
#[derive(Default)]
pub struct RecordingBuild {
    exit_code: Option<i32>,
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingBuild {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing(exit_code: i32) -> Self {
        Self {
            exit_code: Some(exit_code),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl BuildTool for RecordingBuild {
    async fn run(
        &self,
        args: &str,
        working_dir: &Path,
        sink: Option<&dyn OutputSink>,
    ) -> Result<ProcessResult> {
        self.calls
            .lock()
            .push((args.to_string(), working_dir.to_path_buf()));

        let line = format!("> gradlew {}\n", args);
        if let Some(sink) = sink {
            sink.on_output(OutputStream::Stdout, &line);
        }

        match self.exit_code {
            None => Ok(ProcessResult::new(line, "")),
            Some(code) => Err(ProcessError::new(
                format!("gradlew {}", args),
                ProcessFailure::Exit(code),
            )
            .with_output(line, "BUILD FAILED\n")
            .into()),
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}
