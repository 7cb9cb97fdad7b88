//! Attach request output
//!
//! 터미널에는 debug adapter가 없으므로 attach 요청을 JSON으로 내보낸다.
//! IDE의 launch 설정이나 jdb로 그대로 이어서 쓸 수 있다.

use async_trait::async_trait;
use rio_core::{DebugAttachConfig, DebugSessions};
use rio_foundation::Result;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// attach 설정을 stdout (또는 파일)로 내보내는 DebugSessions
pub struct LaunchWriter {
    launch_file: Option<PathBuf>,
}

impl LaunchWriter {
    pub fn new(launch_file: Option<PathBuf>) -> Self {
        Self { launch_file }
    }
}

#[async_trait]
impl DebugSessions for LaunchWriter {
    async fn start_debugging(&self, config: &DebugAttachConfig) -> Result<()> {
        let rendered = serde_json::to_string_pretty(&attach_json(config))?;

        match &self.launch_file {
            Some(path) => {
                tokio::fs::write(path, format!("{}\n", rendered)).await?;
                info!("Attach configuration written to {}", path.display());
                eprintln!("Attach configuration written to {}", path.display());
            }
            None => println!("{}", rendered),
        }
        Ok(())
    }
}

/// attach 설정 + 워크스페이스 (`cwd`)
fn attach_json(config: &DebugAttachConfig) -> Value {
    let mut value = serde_json::json!({
        "name": config.name,
        "type": config.debugger_type,
        "request": config.request,
        "hostName": config.host_name,
        "port": config.port,
    });
    if let (Some(workspace), Value::Object(map)) = (&config.workspace, &mut value) {
        map.insert(
            "cwd".to_string(),
            Value::String(workspace.root().display().to_string()),
        );
    }
    value
}
