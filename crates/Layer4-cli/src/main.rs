//! rio-deploy CLI - Main entry point

mod cli;
mod extensions;
mod launch;
mod terminal;

use clap::{Parser, Subcommand};
use cli::Action;
use rio_foundation::{ConfigLoader, DebugConfig, DeployConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// rio-deploy - build, deploy and debug robot code with Gradle
#[derive(Parser, Debug)]
#[command(name = "rio-deploy")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Team number (overrides settings)
    #[arg(short, long, global = true)]
    team: Option<u32>,

    /// Workspace folder, repeat for several (default: current directory)
    #[arg(short, long = "workspace", global = true)]
    workspaces: Vec<PathBuf>,

    /// Gradle wrapper command
    #[arg(long, global = true)]
    wrapper: Option<String>,

    /// Remote debug address
    #[arg(long, global = true)]
    debug_address: Option<String>,

    /// Remote debug port
    #[arg(long, global = true)]
    debug_port: Option<u16>,

    /// Write the attach configuration to this file instead of stdout
    #[arg(long, global = true)]
    launch_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Build and deploy robot code
    Deploy,
    /// Deploy a debug build and emit a remote attach request
    Debug,
    /// List registered deployers and debuggers
    Providers,
}

impl Args {
    /// 커맨드라인 값만 담은 설정 (settings 파일 위에 병합)
    fn overrides(&self) -> DeployConfig {
        DeployConfig {
            team_number: self.team,
            gradle_wrapper: self.wrapper.clone(),
            output_channel: None,
            debug: DebugConfig {
                address: self.debug_address.clone(),
                port: self.debug_port,
            },
        }
    }

    fn action(&self) -> Action {
        match self.command {
            Command::Deploy => Action::Deploy,
            Command::Debug => Action::Debug,
            Command::Providers => Action::Providers,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cwd = std::env::current_dir()?;

    // Load configuration
    let loader = ConfigLoader::new(&cwd);
    for path in loader.existing_files() {
        tracing::debug!("Using settings from {}", path.display());
    }
    let mut config = loader.load_all();
    config.merge(args.overrides());

    let workspaces = if args.workspaces.is_empty() {
        vec![cwd]
    } else {
        args.workspaces.clone()
    };

    cli::run(args.action(), config, workspaces, args.launch_file.clone()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deploy() {
        let args = Args::try_parse_from(["rio-deploy", "deploy", "--team", "190"]).unwrap();
        assert_eq!(args.action(), Action::Deploy);
        assert_eq!(args.overrides().team_number, Some(190));
        assert!(args.workspaces.is_empty());
    }

    #[test]
    fn test_parse_debug_overrides() {
        let args = Args::try_parse_from([
            "rio-deploy",
            "debug",
            "-w",
            "/work/a",
            "-w",
            "/work/b",
            "--debug-port",
            "5005",
            "--wrapper",
            "sh ./gradlew",
        ])
        .unwrap();

        assert_eq!(args.action(), Action::Debug);
        assert_eq!(
            args.workspaces,
            vec![PathBuf::from("/work/a"), PathBuf::from("/work/b")]
        );

        let overrides = args.overrides();
        assert_eq!(overrides.debug.port, Some(5005));
        assert_eq!(overrides.debug.address, None);
        assert_eq!(overrides.gradle_wrapper.as_deref(), Some("sh ./gradlew"));
    }

    #[test]
    fn test_overrides_win_over_settings() {
        let args = Args::try_parse_from(["rio-deploy", "deploy", "-t", "254"]).unwrap();
        let mut config = DeployConfig {
            team_number: Some(190),
            gradle_wrapper: Some("gradlew.bat".to_string()),
            ..Default::default()
        };
        config.merge(args.overrides());

        assert_eq!(config.team_number, Some(254));
        assert_eq!(config.gradle_wrapper(), "gradlew.bat");
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["rio-deploy"]).is_err());
    }
}
