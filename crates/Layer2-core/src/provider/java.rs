//! Java deploy/debug providers
//!
//! 두 provider는 같은 빌드 단계를 공유한다:
//! 워크스페이스 결정 → 출력 채널 표시 → Gradle deploy (출력 스트리밍).
//! 디버거는 빌드가 성공했을 때만 attach 단계로 넘어간다.

use super::state::ActionState;
use super::traits::ActionProvider;
use crate::debug::DebugLauncher;
use crate::host::{OutputChannel, Window, WorkspaceFolders};
use crate::workspace::WorkspaceResolver;
use async_trait::async_trait;
use rio_foundation::{DebugEndpoint, Error, Result, WorkspaceRef};
use rio_task::{debug_deploy_args, deploy_args, BuildTool, OutputSink, OutputStream};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 선택 UI에 표시되는 provider 이름
pub const JAVA_DISPLAY_NAME: &str = "java";

// ============================================================================
// ChannelSink - OutputChannel을 OutputSink로 사용
// ============================================================================

/// Forwards both streams to an output channel, unmodified
pub struct ChannelSink<'a>(pub &'a dyn OutputChannel);

impl OutputSink for ChannelSink<'_> {
    fn on_output(&self, _stream: OutputStream, chunk: &str) {
        self.0.append(chunk);
    }
}

// ============================================================================
// BuildStep - 공유 빌드 단계
// ============================================================================

/// Deployer와 Debugger가 공유하는 의존성
pub struct BuildStep {
    resolver: WorkspaceResolver,
    workspace: Arc<dyn WorkspaceFolders>,
    window: Arc<dyn Window>,
    build: Arc<dyn BuildTool>,
    channel: Arc<dyn OutputChannel>,
}

impl BuildStep {
    pub fn new(
        window: Arc<dyn Window>,
        workspace: Arc<dyn WorkspaceFolders>,
        build: Arc<dyn BuildTool>,
        channel: Arc<dyn OutputChannel>,
    ) -> Self {
        Self {
            resolver: WorkspaceResolver::new(Arc::clone(&window)),
            workspace,
            window,
            build,
            channel,
        }
    }

    pub fn channel(&self) -> &Arc<dyn OutputChannel> {
        &self.channel
    }

    /// 워크스페이스 결정 후 빌드
    ///
    /// 워크스페이스가 없으면 사용자에게 알리고 `Ok(None)`.
    /// 빌드 실패는 `Err`로 그대로 전파한다.
    async fn run(&self, provider: &str, args: &str) -> Result<Option<WorkspaceRef>> {
        transition(provider, ActionState::Idle, ActionState::ResolvingWorkspace);

        let candidates = self.workspace.folders();
        let workspace = match self.resolver.resolve(&candidates).await {
            Ok(workspace) => workspace,
            Err(Error::NoWorkspace(reason)) => {
                transition(
                    provider,
                    ActionState::ResolvingWorkspace,
                    ActionState::NoWorkspace,
                );
                warn!("{} action aborted: {}", provider, reason);
                self.window.show_error(&reason.to_string());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        transition(provider, ActionState::ResolvingWorkspace, ActionState::Building);
        self.channel.show();

        let sink = ChannelSink(self.channel.as_ref());
        match self.build.run(args, workspace.root(), Some(&sink)).await {
            Ok(result) => {
                transition(provider, ActionState::Building, ActionState::Built);
                debug!(
                    "{} build output: {} bytes stdout, {} bytes stderr",
                    provider,
                    result.stdout.len(),
                    result.stderr.len()
                );
                Ok(Some(workspace))
            }
            Err(e) => {
                transition(provider, ActionState::Building, ActionState::BuildFailed);
                Err(e)
            }
        }
    }
}

fn transition(provider: &str, from: ActionState, to: ActionState) {
    debug_assert!(from.can_transition_to(to), "{} -> {}", from, to);
    debug!("{} action: {} -> {}", provider, from, to);
}

// ============================================================================
// JavaDeployer
// ============================================================================

/// `deploy --offline -PteamNumber=<n>`
pub struct JavaDeployer {
    step: Arc<BuildStep>,
}

impl JavaDeployer {
    pub fn new(step: Arc<BuildStep>) -> Self {
        Self { step }
    }
}

#[async_trait]
impl ActionProvider for JavaDeployer {
    async fn is_currently_valid(&self) -> bool {
        true
    }

    async fn run(&self, team_number: u32) -> Result<bool> {
        info!("Deploying for team {}", team_number);
        let workspace = self.step.run("deployer", &deploy_args(team_number)).await?;
        Ok(workspace.is_some())
    }

    fn display_name(&self) -> &str {
        JAVA_DISPLAY_NAME
    }
}

// ============================================================================
// JavaDebugger
// ============================================================================

/// `deploy --offline -PdebugMode -PteamNumber=<n>` 후 원격 attach
pub struct JavaDebugger {
    step: Arc<BuildStep>,
    launcher: DebugLauncher,
    endpoint: DebugEndpoint,
}

impl JavaDebugger {
    pub fn new(step: Arc<BuildStep>, launcher: DebugLauncher, endpoint: DebugEndpoint) -> Self {
        Self {
            step,
            launcher,
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &DebugEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl ActionProvider for JavaDebugger {
    async fn is_currently_valid(&self) -> bool {
        true
    }

    async fn run(&self, team_number: u32) -> Result<bool> {
        info!("Deploying debug build for team {}", team_number);

        // 빌드 실패 시 여기서 전파되고 attach는 시도하지 않는다
        let Some(workspace) = self
            .step
            .run("debugger", &debug_deploy_args(team_number))
            .await?
        else {
            return Ok(false);
        };

        transition("debugger", ActionState::Built, ActionState::Attaching);
        match self.launcher.attach(&self.endpoint, &workspace).await {
            Ok(()) => {
                transition("debugger", ActionState::Attaching, ActionState::Attached);
                Ok(true)
            }
            Err(e) => {
                transition("debugger", ActionState::Attaching, ActionState::AttachFailed);
                Err(e)
            }
        }
    }

    fn display_name(&self) -> &str {
        JAVA_DISPLAY_NAME
    }
}
