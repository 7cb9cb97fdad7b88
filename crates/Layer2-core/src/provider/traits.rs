//! Provider traits - 배포/디버그 action 계약

use async_trait::async_trait;
use rio_foundation::Result;
use std::sync::Arc;

/// 호스트가 선택해서 실행하는 배포/디버그 action
///
/// 호스트는 사용자 action 하나당 `run`을 한 번 호출한다.
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// 현재 워크스페이스에서 사용 가능한지
    async fn is_currently_valid(&self) -> bool;

    /// 지정한 팀 번호로 실행
    ///
    /// 워크스페이스가 없으면 `Ok(false)`, 빌드/attach 실패는 `Err`
    async fn run(&self, team_number: u32) -> Result<bool>;

    /// 선택 UI에 표시할 이름
    fn display_name(&self) -> &str;
}

/// Core 확장이 export하는 등록 인터페이스
#[async_trait]
pub trait CapabilitySurface: Send + Sync {
    async fn register_deployer(&self, provider: Arc<dyn ActionProvider>);

    async fn register_debugger(&self, provider: Arc<dyn ActionProvider>);
}

/// Core 확장에 추가하는 보조 도구
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run_tool(&self) -> Result<()>;

    fn display_name(&self) -> &str;
}
