//! Core Module - 레이어 간에 공유하는 타입
//!
//! - `types.rs`: WorkspaceRef, DebugEndpoint

pub mod types;

pub use types::{DebugEndpoint, WorkspaceRef};
