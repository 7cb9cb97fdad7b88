//! # rio-foundation
//!
//! Foundation layer for rio-deploy:
//! - Error: 중앙 에러 타입 (Precondition, NoWorkspace, Process, Attach)
//! - Config: 계층형 설정 (DeployConfig, ConfigLoader)
//! - Core: 공유 타입 (WorkspaceRef, DebugEndpoint)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  rio-cli (terminal host)                                 │
//! │                     │                                   │
//! │                     ▼                                   │
//! │  rio-core: activate → register deployer / debugger      │
//! │          │                         │                    │
//! │          ▼                         ▼                    │
//! │   rio-task: Gradle → ProcessRunner   DebugLauncher      │
//! │                     │                                   │
//! │                     ▼                                   │
//! │  rio-foundation: Error, DeployConfig, WorkspaceRef      │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, NoWorkspaceReason, ProcessError, ProcessFailure, Result};

// ============================================================================
// Core (공유 타입)
// ============================================================================
pub use self::core::{DebugEndpoint, WorkspaceRef};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    load_config_from_file, ConfigLoader, DebugConfig, DeployConfig, CONFIG_DIR_NAME,
    DEFAULT_GRADLE_WRAPPER, DEFAULT_OUTPUT_CHANNEL,
};
