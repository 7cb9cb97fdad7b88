//! Deploy/debug providers
//!
//! # 구조
//!
//! - `traits.rs`: `ActionProvider`, `CapabilitySurface`, `ToolRunner`
//! - `state.rs`: action 진행 상태
//! - `java.rs`: Gradle 기반 Java deployer/debugger
//!
//! ```rust,ignore
//! let step = Arc::new(BuildStep::new(window, workspace, build, channel));
//! surface.register_deployer(Arc::new(JavaDeployer::new(step.clone()))).await;
//! surface.register_debugger(Arc::new(JavaDebugger::new(step, launcher, endpoint))).await;
//! ```

mod java;
mod state;
mod traits;

pub use java::{BuildStep, ChannelSink, JavaDebugger, JavaDeployer, JAVA_DISPLAY_NAME};
pub use state::ActionState;
pub use traits::{ActionProvider, CapabilitySurface, ToolRunner};
