use serde::{Deserialize, Serialize};

use super::id::{ProjectId, TaskId};

/// Which project a task was attached to when it was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "project", rename_all = "lowercase")]
pub enum TaskOwner {
    Project(ProjectId),
    /// No project was active at creation time
    Unassigned,
}

impl TaskOwner {
    pub fn project_id(self) -> Option<ProjectId> {
        match self {
            TaskOwner::Project(id) => Some(id),
            TaskOwner::Unassigned => None,
        }
    }

    pub fn belongs_to(self, project: ProjectId) -> bool {
        self.project_id() == Some(project)
    }
}

/// A single task line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Free-form, may be empty
    pub text: String,
    pub owner: TaskOwner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_belongs_to() {
        let owner = TaskOwner::Project(ProjectId(3));
        assert!(owner.belongs_to(ProjectId(3)));
        assert!(!owner.belongs_to(ProjectId(4)));
        assert!(!TaskOwner::Unassigned.belongs_to(ProjectId(3)));
    }

    #[test]
    fn test_owner_serializes_tagged() {
        let json = serde_json::to_string(&TaskOwner::Project(ProjectId(3))).unwrap();
        assert_eq!(json, r#"{"kind":"project","project":3}"#);
        let json = serde_json::to_string(&TaskOwner::Unassigned).unwrap();
        assert_eq!(json, r#"{"kind":"unassigned"}"#);
    }
}
