//! In-process host registries

use super::traits::{Extension, ExtensionRegistry, WorkspaceFolders};
use parking_lot::RwLock;
use rio_foundation::WorkspaceRef;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// 확장 레지스트리 - ID로 확장 관리
#[derive(Default)]
pub struct ExtensionMap {
    extensions: RwLock<HashMap<String, Arc<dyn Extension>>>,
}

impl ExtensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 확장 등록 (같은 ID가 있으면 false)
    pub fn register(&self, extension: Arc<dyn Extension>) -> bool {
        let id = extension.id().to_string();
        let mut extensions = self.extensions.write();

        if extensions.contains_key(&id) {
            warn!("Extension {} is already registered", id);
            return false;
        }

        extensions.insert(id.clone(), extension);
        info!("Registered extension: {}", id);
        true
    }

    /// 등록된 확장 ID 목록
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.extensions.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.extensions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.read().is_empty()
    }
}

impl ExtensionRegistry for ExtensionMap {
    fn get_extension(&self, id: &str) -> Option<Arc<dyn Extension>> {
        self.extensions.read().get(id).cloned()
    }
}

/// 고정된 워크스페이스 폴더 목록
#[derive(Debug, Clone, Default)]
pub struct WorkspaceList {
    folders: Vec<WorkspaceRef>,
}

impl WorkspaceList {
    pub fn new(folders: Vec<WorkspaceRef>) -> Self {
        Self { folders }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl WorkspaceFolders for WorkspaceList {
    fn folders(&self) -> Vec<WorkspaceRef> {
        self.folders.clone()
    }
}
