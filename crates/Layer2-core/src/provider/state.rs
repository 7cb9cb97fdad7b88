//! Action state machine
//!
//! ```text
//! Idle → ResolvingWorkspace → NoWorkspace
//!                           → Building → BuildFailed
//!                                      → Built → (debugger) Attaching → AttachFailed
//!                                                                     → Attached
//! ```

/// Possible states of a deploy/debug action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    Idle,
    ResolvingWorkspace,
    /// No workspace available or selection dismissed
    NoWorkspace,
    Building,
    BuildFailed,
    /// Build succeeded (terminal for the deployer)
    Built,
    Attaching,
    AttachFailed,
    Attached,
}

impl ActionState {
    /// Whether `next` is a legal transition from this state
    pub fn can_transition_to(&self, next: ActionState) -> bool {
        use ActionState::*;
        matches!(
            (self, next),
            (Idle, ResolvingWorkspace)
                | (ResolvingWorkspace, NoWorkspace)
                | (ResolvingWorkspace, Building)
                | (Building, BuildFailed)
                | (Building, Built)
                | (Built, Attaching)
                | (Attaching, AttachFailed)
                | (Attaching, Attached)
        )
    }

    /// Get display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            ActionState::Idle => "Idle",
            ActionState::ResolvingWorkspace => "ResolvingWorkspace",
            ActionState::NoWorkspace => "Failed(no-workspace)",
            ActionState::Building => "Building",
            ActionState::BuildFailed => "BuildFailed",
            ActionState::Built => "BuiltOK",
            ActionState::Attaching => "Attaching",
            ActionState::AttachFailed => "AttachFailed",
            ActionState::Attached => "AttachedOK",
        }
    }
}

impl std::fmt::Display for ActionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
