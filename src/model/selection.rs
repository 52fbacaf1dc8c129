use serde::{Deserialize, Serialize};

use super::id::ProjectId;

/// What the workspace is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "project", rename_all = "snake_case")]
pub enum Selection {
    /// Nothing selected and no draft open (initial state)
    #[default]
    NoSelection,
    /// A new project is being composed; no project is active
    DraftInProgress,
    /// An existing project is selected
    Active(ProjectId),
}

impl Selection {
    pub fn active_id(self) -> Option<ProjectId> {
        match self {
            Selection::Active(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_draft(self) -> bool {
        self == Selection::DraftInProgress
    }
}
