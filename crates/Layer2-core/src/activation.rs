//! Activation - wires the Java deployer/debugger into the core extension
//!
//! 순서:
//! 1. core 확장과 Java debug adapter 확장 조회 (없으면 에러 표시 후 중단)
//! 2. 비활성 확장을 동시에 활성화
//! 3. core 확장의 capability surface 획득
//! 4. deployer, debugger 등록
//!
//! 실패하면 아무것도 등록되지 않는다.

use crate::debug::DebugLauncher;
use crate::host::{Extension, HostServices, OutputChannel};
use crate::provider::{ActionProvider, BuildStep, CapabilitySurface, JavaDebugger, JavaDeployer};
use futures::future::try_join_all;
use rio_foundation::{DeployConfig, Error, Result};
use rio_task::{BuildTool, Gradle};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Core 확장 ID
pub const CORE_EXTENSION_ID: &str = "wpifirst.vscode-wpilib-core";

/// Java debug adapter 확장 ID
pub const JAVA_DEBUG_EXTENSION_ID: &str = "vscjava.vscode-java-debug";

const MISSING_CORE_MESSAGE: &str = "Could not find core library";
const MISSING_JAVA_MESSAGE: &str = "Could not find java extension";

/// 활성화 결과 - 등록된 provider와 공유 자원
pub struct Activation {
    pub surface: Arc<dyn CapabilitySurface>,
    pub channel: Arc<dyn OutputChannel>,
    pub deployer: Arc<JavaDeployer>,
    pub debugger: Arc<JavaDebugger>,
}

/// 설정의 Gradle wrapper로 활성화
pub async fn activate(host: &HostServices, config: &DeployConfig) -> Result<Activation> {
    let gradle = Gradle::with_wrapper(config.gradle_wrapper());
    activate_with(host, config, Arc::new(gradle)).await
}

/// 주어진 빌드 도구로 활성화
pub async fn activate_with(
    host: &HostServices,
    config: &DeployConfig,
    build: Arc<dyn BuildTool>,
) -> Result<Activation> {
    info!("Activating Java deploy support");

    let core = find_extension(host, CORE_EXTENSION_ID, MISSING_CORE_MESSAGE)?;
    let java = find_extension(host, JAVA_DEBUG_EXTENSION_ID, MISSING_JAVA_MESSAGE)?;

    let pending: Vec<Arc<dyn Extension>> = [java, Arc::clone(&core)]
        .into_iter()
        .filter(|ext| !ext.is_active())
        .collect();

    if !pending.is_empty() {
        debug!("Activating {} extension(s)", pending.len());
        try_join_all(pending.iter().map(|ext| ext.activate()))
            .await
            .map_err(|e| precondition(host, format!("Extension activation failed: {}", e)))?;
    }

    let surface = core.capability_surface().ok_or_else(|| {
        precondition(
            host,
            format!("{} exports no capability surface", CORE_EXTENSION_ID),
        )
    })?;

    let channel = host.window.create_output_channel(config.output_channel());
    let step = Arc::new(BuildStep::new(
        Arc::clone(&host.window),
        Arc::clone(&host.workspace),
        build,
        Arc::clone(&channel),
    ));

    let deployer = Arc::new(JavaDeployer::new(Arc::clone(&step)));
    let debugger = Arc::new(JavaDebugger::new(
        step,
        DebugLauncher::new(Arc::clone(&host.debug)),
        config.debug_endpoint(),
    ));

    surface
        .register_deployer(deployer.clone() as Arc<dyn ActionProvider>)
        .await;
    surface
        .register_debugger(debugger.clone() as Arc<dyn ActionProvider>)
        .await;

    info!(
        "Java deploy support active (channel {}, debug endpoint {})",
        channel.name(),
        debugger.endpoint()
    );

    Ok(Activation {
        surface,
        channel,
        deployer,
        debugger,
    })
}

/// 비활성화 (정리할 자원 없음)
pub fn deactivate(activation: Activation) {
    debug!("Deactivating Java deploy support ({})", activation.channel.name());
}

fn find_extension(host: &HostServices, id: &str, missing: &str) -> Result<Arc<dyn Extension>> {
    host.extensions.get_extension(id).ok_or_else(|| {
        debug!("Extension {} not found", id);
        precondition(host, missing.to_string())
    })
}

/// 사용자에게 보고하고 Precondition 에러 생성
fn precondition(host: &HostServices, message: String) -> Error {
    error!("Activation aborted: {}", message);
    host.window.show_error(&message);
    Error::Precondition(message)
}
