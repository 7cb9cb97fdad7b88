//! Core capabilities - the core extension's exported surface
//!
//! 등록된 deployer/debugger/tool을 보관하고, 사용자 action마다
//! 하나를 골라 실행한다.
//!
//! 선택 규칙 (deploy/debug/tool 공통):
//! - 유효한 후보 없음: 에러 표시 후 `false`
//! - 하나: 바로 실행
//! - 여럿: quick pick (닫으면 `false`)

use crate::activation::CORE_EXTENSION_ID;
use crate::host::{Extension, Window};
use crate::provider::{ActionProvider, CapabilitySurface, ToolRunner};
use async_trait::async_trait;
use rio_foundation::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Capability surface 버전
pub const API_VERSION: u32 = 1;

const DEPLOYER_PICK_PLACEHOLDER: &str = "Select a deployer";
const DEBUGGER_PICK_PLACEHOLDER: &str = "Select a debugger";
const TOOL_PICK_PLACEHOLDER: &str = "Select a tool";

/// Action 종류 (로그/메시지용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionKind {
    Deploy,
    Debug,
}

impl ActionKind {
    fn noun(&self) -> &'static str {
        match self {
            ActionKind::Deploy => "deployer",
            ActionKind::Debug => "debugger",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            ActionKind::Deploy => DEPLOYER_PICK_PLACEHOLDER,
            ActionKind::Debug => DEBUGGER_PICK_PLACEHOLDER,
        }
    }
}

// ============================================================================
// CoreCapabilities
// ============================================================================

/// Provider/tool 레지스트리와 선택 워크플로
pub struct CoreCapabilities {
    window: Arc<dyn Window>,
    deployers: RwLock<Vec<Arc<dyn ActionProvider>>>,
    debuggers: RwLock<Vec<Arc<dyn ActionProvider>>>,
    tools: RwLock<Vec<Arc<dyn ToolRunner>>>,
    team_number: RwLock<Option<u32>>,
}

impl CoreCapabilities {
    pub fn new(window: Arc<dyn Window>) -> Self {
        Self {
            window,
            deployers: RwLock::new(Vec::new()),
            debuggers: RwLock::new(Vec::new()),
            tools: RwLock::new(Vec::new()),
            team_number: RwLock::new(None),
        }
    }

    pub fn api_version(&self) -> u32 {
        API_VERSION
    }

    // ========================================================================
    // Team number
    // ========================================================================

    /// 현재 팀 번호 (설정되지 않았으면 에러)
    pub async fn get_team_number(&self) -> Result<u32> {
        self.team_number
            .read()
            .await
            .ok_or_else(|| Error::InvalidInput("Team number is not set".to_string()))
    }

    pub async fn set_team_number(&self, team_number: u32) {
        info!("Team number set to {}", team_number);
        *self.team_number.write().await = Some(team_number);
    }

    // ========================================================================
    // Registries
    // ========================================================================

    pub async fn deployers(&self) -> Vec<Arc<dyn ActionProvider>> {
        self.deployers.read().await.clone()
    }

    pub async fn debuggers(&self) -> Vec<Arc<dyn ActionProvider>> {
        self.debuggers.read().await.clone()
    }

    pub async fn tools(&self) -> Vec<Arc<dyn ToolRunner>> {
        self.tools.read().await.clone()
    }

    pub async fn add_tool(&self, tool: Arc<dyn ToolRunner>) {
        debug!("Registered tool: {}", tool.display_name());
        self.tools.write().await.push(tool);
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// 배포 실행
    pub async fn deploy_code(&self) -> Result<bool> {
        let candidates = self.deployers().await;
        self.run_action(ActionKind::Deploy, candidates).await
    }

    /// 디버그 배포 후 attach
    pub async fn debug_code(&self) -> Result<bool> {
        let candidates = self.debuggers().await;
        self.run_action(ActionKind::Debug, candidates).await
    }

    /// 등록된 tool 하나 실행
    pub async fn start_tool(&self) -> Result<()> {
        let tools = self.tools().await;
        let names: Vec<String> = tools.iter().map(|t| t.display_name().to_string()).collect();

        let Some(tool) = self.choose(&tools, &names, "tool", TOOL_PICK_PLACEHOLDER).await else {
            return Ok(());
        };

        info!("Starting tool {}", tool.display_name());
        if let Err(e) = tool.run_tool().await {
            self.report_failure(&format!("{} tool", tool.display_name()), &e);
            return Err(e);
        }
        Ok(())
    }

    async fn run_action(
        &self,
        kind: ActionKind,
        candidates: Vec<Arc<dyn ActionProvider>>,
    ) -> Result<bool> {
        let team_number = match self.get_team_number().await {
            Ok(team) => team,
            Err(e) => {
                warn!("Cannot run {}: {}", kind.noun(), e);
                self.window.show_error(&e.to_string());
                return Ok(false);
            }
        };

        let mut valid = Vec::with_capacity(candidates.len());
        for provider in candidates {
            if provider.is_currently_valid().await {
                valid.push(provider);
            }
        }
        let names: Vec<String> = valid.iter().map(|p| p.display_name().to_string()).collect();

        let Some(provider) = self
            .choose(&valid, &names, kind.noun(), kind.placeholder())
            .await
        else {
            return Ok(false);
        };

        info!(
            "Running {} {} for team {}",
            kind.noun(),
            provider.display_name(),
            team_number
        );
        match provider.run(team_number).await {
            Ok(done) => {
                debug!("{} {} finished: {}", kind.noun(), provider.display_name(), done);
                Ok(done)
            }
            Err(e) => {
                self.report_failure(&format!("{} {}", provider.display_name(), kind.noun()), &e);
                Ok(false)
            }
        }
    }

    /// 실패 보고 - 내부 에러는 로그에만 남기고 일반 메시지 표시
    fn report_failure(&self, what: &str, e: &Error) {
        error!("{} failed: {}", what, e);
        if e.is_user_facing() {
            self.window.show_error(&format!("{} failed: {}", what, e));
        } else {
            self.window
                .show_error(&format!("{} failed, see the log for details", what));
        }
    }

    /// 후보 중 하나 선택
    async fn choose<T: ?Sized>(
        &self,
        items: &[Arc<T>],
        names: &[String],
        noun: &str,
        placeholder: &str,
    ) -> Option<Arc<T>> {
        match items {
            [] => {
                warn!("No {} available", noun);
                self.window.show_error(&format!("No {} available", noun));
                None
            }
            [only] => Some(Arc::clone(only)),
            _ => {
                let picked = self.window.show_quick_pick(names, placeholder).await;
                let chosen = picked.and_then(|i| items.get(i)).cloned();
                if chosen.is_none() {
                    debug!("{} selection dismissed", noun);
                }
                chosen
            }
        }
    }
}

#[async_trait]
impl CapabilitySurface for CoreCapabilities {
    async fn register_deployer(&self, provider: Arc<dyn ActionProvider>) {
        info!("Registered deployer: {}", provider.display_name());
        self.deployers.write().await.push(provider);
    }

    async fn register_debugger(&self, provider: Arc<dyn ActionProvider>) {
        info!("Registered debugger: {}", provider.display_name());
        self.debuggers.write().await.push(provider);
    }
}

// ============================================================================
// CoreExtension
// ============================================================================

/// `CoreCapabilities`를 export하는 in-process core 확장
pub struct CoreExtension {
    capabilities: Arc<CoreCapabilities>,
    active: AtomicBool,
}

impl CoreExtension {
    pub fn new(capabilities: Arc<CoreCapabilities>) -> Self {
        Self {
            capabilities,
            active: AtomicBool::new(false),
        }
    }

    pub fn capabilities(&self) -> Arc<CoreCapabilities> {
        Arc::clone(&self.capabilities)
    }
}

#[async_trait]
impl Extension for CoreExtension {
    fn id(&self) -> &str {
        CORE_EXTENSION_ID
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    async fn activate(&self) -> Result<()> {
        if !self.active.swap(true, Ordering::SeqCst) {
            debug!("Core extension activated (api v{})", API_VERSION);
        }
        Ok(())
    }

    fn capability_surface(&self) -> Option<Arc<dyn CapabilitySurface>> {
        Some(self.capabilities.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeWindow;
    use parking_lot::Mutex;

    struct StubProvider {
        name: &'static str,
        valid: bool,
        outcome: Option<bool>,
        failure: fn() -> Error,
        runs: Mutex<Vec<u32>>,
    }

    impl StubProvider {
        fn new(name: &'static str, valid: bool, outcome: Option<bool>) -> Arc<Self> {
            Arc::new(Self {
                name,
                valid,
                outcome,
                failure: || Error::Internal("stub failure".to_string()),
                runs: Mutex::new(Vec::new()),
            })
        }

        fn failing(name: &'static str, failure: fn() -> Error) -> Arc<Self> {
            Arc::new(Self {
                name,
                valid: true,
                outcome: None,
                failure,
                runs: Mutex::new(Vec::new()),
            })
        }

        fn runs(&self) -> Vec<u32> {
            self.runs.lock().clone()
        }
    }

    #[async_trait]
    impl ActionProvider for StubProvider {
        async fn is_currently_valid(&self) -> bool {
            self.valid
        }

        async fn run(&self, team_number: u32) -> Result<bool> {
            self.runs.lock().push(team_number);
            self.outcome.ok_or_else(self.failure)
        }

        fn display_name(&self) -> &str {
            self.name
        }
    }

    struct StubTool {
        runs: Mutex<usize>,
    }

    #[async_trait]
    impl ToolRunner for StubTool {
        async fn run_tool(&self) -> Result<()> {
            *self.runs.lock() += 1;
            Ok(())
        }

        fn display_name(&self) -> &str {
            "shuffleboard"
        }
    }

    async fn capabilities(window: Arc<FakeWindow>) -> CoreCapabilities {
        let caps = CoreCapabilities::new(window);
        caps.set_team_number(190).await;
        caps
    }

    #[tokio::test]
    async fn test_team_number() {
        let caps = CoreCapabilities::new(Arc::new(FakeWindow::new()));
        assert!(caps.get_team_number().await.is_err());

        caps.set_team_number(5190).await;
        assert_eq!(caps.get_team_number().await.unwrap(), 5190);
        assert_eq!(caps.api_version(), API_VERSION);
    }

    #[tokio::test]
    async fn test_deploy_without_team_number() {
        let window = Arc::new(FakeWindow::new());
        let caps = CoreCapabilities::new(window.clone());
        let provider = StubProvider::new("java", true, Some(true));
        caps.register_deployer(provider.clone()).await;

        assert!(!caps.deploy_code().await.unwrap());
        assert!(provider.runs().is_empty());
        assert_eq!(window.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_single_valid_deployer_runs() {
        let window = Arc::new(FakeWindow::new());
        let caps = capabilities(window.clone()).await;
        let valid = StubProvider::new("java", true, Some(true));
        let invalid = StubProvider::new("cpp", false, Some(true));
        caps.register_deployer(invalid.clone()).await;
        caps.register_deployer(valid.clone()).await;

        assert!(caps.deploy_code().await.unwrap());
        assert_eq!(valid.runs(), vec![190]);
        assert!(invalid.runs().is_empty());
        assert_eq!(window.pick_count(), 0);
    }

    #[tokio::test]
    async fn test_multiple_debuggers_prompt() {
        let window = Arc::new(FakeWindow::new().with_picks(vec![Some(1)]));
        let caps = capabilities(window.clone()).await;
        let first = StubProvider::new("java", true, Some(true));
        let second = StubProvider::new("cpp", true, Some(true));
        caps.register_debugger(first.clone()).await;
        caps.register_debugger(second.clone()).await;

        assert!(caps.debug_code().await.unwrap());
        assert!(first.runs().is_empty());
        assert_eq!(second.runs(), vec![190]);
        assert_eq!(
            window.last_pick_items(),
            vec!["java".to_string(), "cpp".to_string()]
        );
    }

    #[tokio::test]
    async fn test_no_provider_reports() {
        let window = Arc::new(FakeWindow::new());
        let caps = capabilities(window.clone()).await;

        assert!(!caps.debug_code().await.unwrap());
        assert_eq!(window.errors(), vec!["No debugger available".to_string()]);
    }

    #[tokio::test]
    async fn test_provider_error_reported() {
        let window = Arc::new(FakeWindow::new());
        let caps = capabilities(window.clone()).await;
        caps.register_deployer(StubProvider::new("java", true, None))
            .await;

        assert!(!caps.deploy_code().await.unwrap());
        assert_eq!(
            window.errors(),
            vec!["java deployer failed, see the log for details".to_string()]
        );
    }

    #[tokio::test]
    async fn test_user_facing_error_shown() {
        let window = Arc::new(FakeWindow::new());
        let caps = capabilities(window.clone()).await;
        caps.register_debugger(StubProvider::failing("java", || {
            Error::attach("connection refused")
        }))
        .await;

        assert!(!caps.debug_code().await.unwrap());
        assert_eq!(window.errors().len(), 1);
        assert!(window.errors()[0].starts_with("java debugger failed: "));
        assert!(window.errors()[0].contains("connection refused"));
    }

    struct FailingTool;

    #[async_trait]
    impl ToolRunner for FailingTool {
        async fn run_tool(&self) -> Result<()> {
            Err(Error::Internal("socket closed".to_string()))
        }

        fn display_name(&self) -> &str {
            "glass"
        }
    }

    #[tokio::test]
    async fn test_tool_internal_error_hidden() {
        let window = Arc::new(FakeWindow::new());
        let caps = capabilities(window.clone()).await;
        caps.add_tool(Arc::new(FailingTool)).await;

        assert!(caps.start_tool().await.is_err());
        assert_eq!(
            window.errors(),
            vec!["glass tool failed, see the log for details".to_string()]
        );
    }

    #[tokio::test]
    async fn test_start_tool() {
        let window = Arc::new(FakeWindow::new());
        let caps = capabilities(window.clone()).await;

        caps.start_tool().await.unwrap();
        assert_eq!(window.errors(), vec!["No tool available".to_string()]);

        let tool = Arc::new(StubTool {
            runs: Mutex::new(0),
        });
        caps.add_tool(tool.clone()).await;
        caps.start_tool().await.unwrap();
        assert_eq!(*tool.runs.lock(), 1);
    }

    #[tokio::test]
    async fn test_core_extension_surface() {
        let caps = Arc::new(CoreCapabilities::new(Arc::new(FakeWindow::new())));
        let extension = CoreExtension::new(caps.clone());

        assert_eq!(extension.id(), CORE_EXTENSION_ID);
        assert!(!extension.is_active());
        extension.activate().await.unwrap();
        assert!(extension.is_active());

        let surface = extension.capability_surface().unwrap();
        surface
            .register_deployer(StubProvider::new("java", true, Some(true)))
            .await;
        assert_eq!(caps.deployers().await.len(), 1);
    }
}
