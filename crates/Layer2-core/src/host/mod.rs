//! Host - 호스트 런타임 경계
//!
//! - `traits.rs`: Extension, Window, OutputChannel, DebugSessions, HostServices
//! - `registry.rs`: 인프로세스 구현 (ExtensionMap, WorkspaceList)

pub mod registry;
pub mod traits;

pub use registry::{ExtensionMap, WorkspaceList};
pub use traits::{
    DebugSessions, Extension, ExtensionRegistry, HostServices, OutputChannel, Window,
    WorkspaceFolders,
};
