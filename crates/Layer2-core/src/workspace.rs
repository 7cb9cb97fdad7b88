//! Workspace resolver - picks the project root an action runs against
//!
//! - 0 candidates: `NoWorkspace(Empty)` without prompting
//! - 1 candidate: chosen automatically
//! - more: interactive selection, dismissal is `NoWorkspace(Dismissed)`

use crate::host::Window;
use rio_foundation::{Error, NoWorkspaceReason, Result, WorkspaceRef};
use std::sync::Arc;
use tracing::{debug, warn};

/// Placeholder shown in the selection prompt
pub const WORKSPACE_PICK_PLACEHOLDER: &str = "Select a workspace folder to deploy";

/// Workspace resolver
#[derive(Clone)]
pub struct WorkspaceResolver {
    window: Arc<dyn Window>,
}

impl WorkspaceResolver {
    pub fn new(window: Arc<dyn Window>) -> Self {
        Self { window }
    }

    /// Resolve one workspace out of `candidates`
    ///
    /// The returned workspace is always a member of `candidates`.
    pub async fn resolve(&self, candidates: &[WorkspaceRef]) -> Result<WorkspaceRef> {
        match candidates {
            [] => {
                debug!("No workspace candidates");
                Err(Error::NoWorkspace(NoWorkspaceReason::Empty))
            }
            [only] => {
                debug!("Using sole workspace {}", only);
                Ok(only.clone())
            }
            _ => {
                let labels: Vec<String> = candidates.iter().map(|w| w.display_name()).collect();
                let picked = self
                    .window
                    .show_quick_pick(&labels, WORKSPACE_PICK_PLACEHOLDER)
                    .await;

                match picked.and_then(|i| candidates.get(i).map(|w| (i, w))) {
                    Some((index, workspace)) => {
                        debug!("Workspace {} selected: {}", index, workspace);
                        Ok(workspace.clone())
                    }
                    None => {
                        if let Some(index) = picked {
                            warn!(
                                "Workspace pick {} out of range ({} candidates)",
                                index,
                                candidates.len()
                            );
                        }
                        Err(Error::NoWorkspace(NoWorkspaceReason::Dismissed))
                    }
                }
            }
        }
    }
}
