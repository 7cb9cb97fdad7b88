//! Debug launcher - asks the host to attach a Java debugger to the robot
//!
//! 실제 attach는 외부 debug adapter가 수행한다. 여기서는 고정된 형태의
//! attach 설정을 만들어 호스트에 한 번 요청할 뿐이며 재시도는 없다.

use crate::host::DebugSessions;
use rio_foundation::{DebugEndpoint, Error, Result, WorkspaceRef};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// 디버그 설정 이름
pub const DEBUG_CONFIG_NAME: &str = "wpilibJavaDebug";

/// Debug adapter 타입
pub const JAVA_DEBUGGER_TYPE: &str = "java";

/// Attach 요청 모드
pub const ATTACH_REQUEST: &str = "attach";

// ============================================================================
// DebugAttachConfig
// ============================================================================

/// 호스트의 start-debugging 진입점에 넘기는 attach 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugAttachConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub debugger_type: String,

    pub request: String,

    pub host_name: String,

    pub port: u16,

    /// 디버그 세션이 속할 워크스페이스 폴더
    #[serde(skip)]
    pub workspace: Option<WorkspaceRef>,
}

impl DebugAttachConfig {
    /// Java remote attach 설정
    pub fn java_attach(endpoint: &DebugEndpoint, workspace: &WorkspaceRef) -> Self {
        Self {
            name: DEBUG_CONFIG_NAME.to_string(),
            debugger_type: JAVA_DEBUGGER_TYPE.to_string(),
            request: ATTACH_REQUEST.to_string(),
            host_name: endpoint.address.clone(),
            port: endpoint.port,
            workspace: Some(workspace.clone()),
        }
    }
}

// ============================================================================
// DebugLauncher
// ============================================================================

/// Debug launcher
#[derive(Clone)]
pub struct DebugLauncher {
    sessions: Arc<dyn DebugSessions>,
}

impl DebugLauncher {
    pub fn new(sessions: Arc<dyn DebugSessions>) -> Self {
        Self { sessions }
    }

    /// Attach 세션 시작 (호스트 수락까지 대기)
    pub async fn attach(&self, endpoint: &DebugEndpoint, workspace: &WorkspaceRef) -> Result<()> {
        let config = DebugAttachConfig::java_attach(endpoint, workspace);
        info!("Starting {} attach to {} for {}", config.debugger_type, endpoint, workspace);

        match self.sessions.start_debugging(&config).await {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("Debug session start rejected: {}", e);
                Err(match e {
                    Error::Attach(_) => e,
                    other => Error::attach(other.to_string()),
                })
            }
        }
    }
}
