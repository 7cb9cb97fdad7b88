//! In-process extensions registered by the CLI host

use async_trait::async_trait;
use rio_core::{Extension, JAVA_DEBUG_EXTENSION_ID};
use rio_foundation::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Java debug adapter 확장
///
/// 터미널에서는 attach 요청을 내보내기만 하므로 JDK 존재 여부만 확인한다.
#[derive(Default)]
pub struct JavaDebugExtension {
    active: AtomicBool,
}

impl JavaDebugExtension {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Extension for JavaDebugExtension {
    fn id(&self) -> &str {
        JAVA_DEBUG_EXTENSION_ID
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    async fn activate(&self) -> Result<()> {
        match which::which("java") {
            Ok(path) => info!("Java found at {}", path.display()),
            Err(_) => warn!("java not found on PATH, attach configurations still emitted"),
        }
        self.active.store(true, Ordering::SeqCst);
        Ok(())
    }
}
