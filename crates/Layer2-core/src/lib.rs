//! rio-core: deploy/debug orchestration for rio-deploy
//!
//! Layer2 - 호스트와 빌드 도구 사이의 조율 레이어
//!
//! # 주요 모듈
//!
//! - `activation`: 확장 조회/활성화 후 Java deployer/debugger 등록
//! - `capabilities`: core 확장의 capability surface (레지스트리, 선택 워크플로)
//! - `provider`: `ActionProvider` 계약과 Java 구현
//! - `workspace`: 워크스페이스 결정
//! - `debug`: 원격 Java 디버거 attach
//! - `host`: 호스트 서비스 trait (Window, ExtensionRegistry, DebugSessions ...)
//!
//! # 사용 예시
//!
//! ```ignore
//! use rio_core::{activate, CoreCapabilities, CoreExtension, ExtensionMap, HostServices};
//!
//! let capabilities = Arc::new(CoreCapabilities::new(window.clone()));
//! let extensions = ExtensionMap::new();
//! extensions.register(Arc::new(CoreExtension::new(capabilities.clone())));
//! extensions.register(java_debug_extension);
//!
//! let host = HostServices::new(Arc::new(extensions), window, workspace, debug);
//! let activation = activate(&host, &config).await?;
//!
//! capabilities.set_team_number(190).await;
//! capabilities.deploy_code().await?;
//! ```

pub mod activation;
pub mod capabilities;
pub mod debug;
pub mod host;
pub mod provider;
pub mod workspace;

#[cfg(test)]
mod test_support;

// Re-exports: Activation
pub use activation::{
    activate, activate_with, deactivate, Activation, CORE_EXTENSION_ID, JAVA_DEBUG_EXTENSION_ID,
};

// Re-exports: Capabilities
pub use capabilities::{CoreCapabilities, CoreExtension, API_VERSION};

// Re-exports: Debug
pub use debug::{DebugAttachConfig, DebugLauncher, DEBUG_CONFIG_NAME};

// Re-exports: Host
pub use host::{
    DebugSessions, Extension, ExtensionMap, ExtensionRegistry, HostServices, OutputChannel,
    Window, WorkspaceFolders, WorkspaceList,
};

// Re-exports: Provider
pub use provider::{
    ActionProvider, ActionState, BuildStep, CapabilitySurface, ChannelSink, JavaDebugger,
    JavaDeployer, ToolRunner, JAVA_DISPLAY_NAME,
};

// Re-exports: Workspace
pub use workspace::{WorkspaceResolver, WORKSPACE_PICK_PLACEHOLDER};
