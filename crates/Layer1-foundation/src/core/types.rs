//! Shared data types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 기본 디버그 주소 (USB 연결 시 로봇 컨트롤러 주소)
pub const DEFAULT_DEBUG_ADDRESS: &str = "172.22.11.2";

/// 기본 디버그 포트
pub const DEFAULT_DEBUG_PORT: u16 = 6667;

// ============================================================================
// WorkspaceRef
// ============================================================================

/// 빌드 가능한 프로젝트 루트
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRef {
    /// 프로젝트 루트 경로
    pub root: PathBuf,

    /// 선택 UI에 표시할 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl WorkspaceRef {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 표시 이름 (없으면 디렉토리 이름, 그것도 없으면 전체 경로)
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}

impl fmt::Display for WorkspaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.root.display())
    }
}

// ============================================================================
// DebugEndpoint
// ============================================================================

/// Remote debug endpoint on the robot controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugEndpoint {
    pub address: String,
    pub port: u16,
}

impl DebugEndpoint {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }
}

impl Default for DebugEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_DEBUG_ADDRESS, DEFAULT_DEBUG_PORT)
    }
}

impl fmt::Display for DebugEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallbacks() {
        let named = WorkspaceRef::new("/work/robot").with_name("Robot 2024");
        assert_eq!(named.display_name(), "Robot 2024");

        let unnamed = WorkspaceRef::new("/work/robot");
        assert_eq!(unnamed.display_name(), "robot");
    }

    #[test]
    fn test_default_endpoint() {
        let endpoint = DebugEndpoint::default();
        assert_eq!(endpoint.address, "172.22.11.2");
        assert_eq!(endpoint.port, 6667);
        assert_eq!(endpoint.to_string(), "172.22.11.2:6667");
    }
}
