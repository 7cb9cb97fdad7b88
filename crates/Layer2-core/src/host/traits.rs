//! Host traits - 호스트 런타임이 제공하는 서비스 인터페이스
//!
//! 전역 싱글톤 대신 `HostServices`로 묶어서 `activate`에 명시적으로 전달한다.

use crate::debug::DebugAttachConfig;
use crate::provider::CapabilitySurface;
use async_trait::async_trait;
use rio_foundation::{Result, WorkspaceRef};
use std::sync::Arc;

// ============================================================================
// Extension - 외부 확장
// ============================================================================

/// 호스트 레지스트리에 등록된 외부 확장
#[async_trait]
pub trait Extension: Send + Sync {
    /// 확장 ID (`publisher.name`)
    fn id(&self) -> &str;

    /// 이미 활성화되었는지
    fn is_active(&self) -> bool;

    /// 확장 활성화
    async fn activate(&self) -> Result<()>;

    /// 확장이 export하는 capability surface (core 확장만 제공)
    fn capability_surface(&self) -> Option<Arc<dyn CapabilitySurface>> {
        None
    }
}

/// 확장 레지스트리 조회
pub trait ExtensionRegistry: Send + Sync {
    fn get_extension(&self, id: &str) -> Option<Arc<dyn Extension>>;
}

// ============================================================================
// Window - UI 표면
// ============================================================================

/// 빌드 출력이 표시되는 채널
pub trait OutputChannel: Send + Sync {
    fn name(&self) -> &str;

    /// 텍스트 추가 (줄바꿈 없음)
    fn append(&self, text: &str);

    /// 채널을 화면에 표시
    fn show(&self);
}

/// 메시지, 선택 프롬프트, 출력 채널
#[async_trait]
pub trait Window: Send + Sync {
    fn show_error(&self, message: &str);

    /// 항목 중 하나를 고르게 함
    ///
    /// 선택된 인덱스, 닫히면 `None`
    async fn show_quick_pick(&self, items: &[String], placeholder: &str) -> Option<usize>;

    fn create_output_channel(&self, name: &str) -> Arc<dyn OutputChannel>;
}

// ============================================================================
// Workspace / Debug
// ============================================================================

/// 현재 열려 있는 워크스페이스 폴더 (순서 유지)
pub trait WorkspaceFolders: Send + Sync {
    fn folders(&self) -> Vec<WorkspaceRef>;
}

/// 호스트의 "start debugging" 진입점
#[async_trait]
pub trait DebugSessions: Send + Sync {
    /// 디버그 세션 시작 요청 (호스트가 수락할 때까지 대기)
    async fn start_debugging(&self, config: &DebugAttachConfig) -> Result<()>;
}

// ============================================================================
// HostServices
// ============================================================================

/// `activate`에 전달되는 호스트 서비스 묶음
#[derive(Clone)]
pub struct HostServices {
    pub extensions: Arc<dyn ExtensionRegistry>,
    pub window: Arc<dyn Window>,
    pub workspace: Arc<dyn WorkspaceFolders>,
    pub debug: Arc<dyn DebugSessions>,
}

impl HostServices {
    pub fn new(
        extensions: Arc<dyn ExtensionRegistry>,
        window: Arc<dyn Window>,
        workspace: Arc<dyn WorkspaceFolders>,
        debug: Arc<dyn DebugSessions>,
    ) -> Self {
        Self {
            extensions,
            window,
            workspace,
            debug,
        }
    }
}
