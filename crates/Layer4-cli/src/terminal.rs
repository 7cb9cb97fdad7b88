//! Terminal host surface
//!
//! - 빌드 출력: stdout 그대로
//! - 메시지, 선택 프롬프트: stderr
//! - 선택 입력: stdin 한 줄 (번호)

use async_trait::async_trait;
use rio_core::{OutputChannel, Window};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

// ============================================================================
// StdoutChannel
// ============================================================================

/// stdout으로 출력하는 채널
pub struct StdoutChannel {
    name: String,
    shown: AtomicBool,
}

impl StdoutChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shown: AtomicBool::new(false),
        }
    }
}

impl OutputChannel for StdoutChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn append(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        // stdout이 닫혀도 빌드는 계속 진행
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }

    fn show(&self) {
        if !self.shown.swap(true, Ordering::SeqCst) {
            eprintln!("[{}]", self.name);
        }
    }
}

// ============================================================================
// TerminalWindow
// ============================================================================

/// Terminal window
pub struct TerminalWindow {
    stdin: Mutex<BufReader<Stdin>>,
}

impl TerminalWindow {
    pub fn new() -> Self {
        Self {
            stdin: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

impl Default for TerminalWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Window for TerminalWindow {
    fn show_error(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    async fn show_quick_pick(&self, items: &[String], placeholder: &str) -> Option<usize> {
        eprintln!("{}:", placeholder);
        for (i, item) in items.iter().enumerate() {
            eprintln!("  {}) {}", i + 1, item);
        }
        eprint!("> ");

        let mut line = String::new();
        let read = self.stdin.lock().await.read_line(&mut line).await;
        match read {
            Ok(0) | Err(_) => {
                debug!("Selection input closed");
                None
            }
            Ok(_) => parse_pick(&line, items.len()),
        }
    }

    fn create_output_channel(&self, name: &str) -> Arc<dyn OutputChannel> {
        Arc::new(StdoutChannel::new(name))
    }
}

/// 1부터 시작하는 번호를 인덱스로 변환 (범위 밖, 빈 입력은 None)
fn parse_pick(input: &str, count: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}
