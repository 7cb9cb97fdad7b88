//! Command execution - host wiring for deploy / debug / providers

use crate::extensions::JavaDebugExtension;
use crate::launch::LaunchWriter;
use crate::terminal::TerminalWindow;
use rio_core::{
    activate, deactivate, CoreCapabilities, CoreExtension, ExtensionMap, HostServices, Window,
    WorkspaceList,
};
use rio_foundation::{DeployConfig, WorkspaceRef};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

/// 실행할 action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deploy,
    Debug,
    Providers,
}

/// Activate the Java providers against a terminal host and run one action
pub async fn run(
    action: Action,
    config: DeployConfig,
    workspaces: Vec<PathBuf>,
    launch_file: Option<PathBuf>,
) -> anyhow::Result<ExitCode> {
    let window: Arc<dyn Window> = Arc::new(TerminalWindow::new());
    let capabilities = Arc::new(CoreCapabilities::new(Arc::clone(&window)));
    if let Some(team) = config.team_number {
        capabilities.set_team_number(team).await;
    }

    let extensions = ExtensionMap::new();
    extensions.register(Arc::new(CoreExtension::new(Arc::clone(&capabilities))));
    extensions.register(Arc::new(JavaDebugExtension::new()));

    let folders: Vec<WorkspaceRef> = workspaces.into_iter().map(WorkspaceRef::new).collect();
    debug!("Workspace folders: {:?}", folders);

    let host = HostServices::new(
        Arc::new(extensions),
        Arc::clone(&window),
        Arc::new(WorkspaceList::new(folders)),
        Arc::new(LaunchWriter::new(launch_file)),
    );

    let activation = match activate(&host, &config).await {
        Ok(activation) => activation,
        // 이미 window로 보고됨
        Err(_) => return Ok(ExitCode::FAILURE),
    };

    let succeeded = match action {
        Action::Deploy => capabilities.deploy_code().await?,
        Action::Debug => capabilities.debug_code().await?,
        Action::Providers => {
            print_providers(&capabilities).await;
            true
        }
    };

    deactivate(activation);
    info!("{:?} finished: {}", action, succeeded);

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn print_providers(capabilities: &CoreCapabilities) {
    println!("api version {}", capabilities.api_version());
    for deployer in capabilities.deployers().await {
        let valid = deployer.is_currently_valid().await;
        println!("deployer  {}  (valid: {})", deployer.display_name(), valid);
    }
    for debugger in capabilities.debuggers().await {
        let valid = debugger.is_currently_valid().await;
        println!("debugger  {}  (valid: {})", debugger.display_name(), valid);
    }
    for tool in capabilities.tools().await {
        println!("tool      {}", tool.display_name());
    }
}
