use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{
    IdGenerator, OrphanPolicy, Project, ProjectId, Selection, Task, TaskId, TaskOwner,
    WorkspaceConfig,
};

/// Error type for workspace lookups. A failed operation leaves the
/// workspace exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkspaceError {
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Owned copy of everything a front end renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub selection: Selection,
}

/// The session state core: projects, tasks and the selection pointer.
///
/// All mutation goes through the methods below. While the selection is
/// `Active(id)`, `id` names a project that is present.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    config: WorkspaceConfig,
    ids: IdGenerator,
    /// Insertion order is display order
    projects: IndexMap<ProjectId, Project>,
    /// Newest first
    tasks: Vec<Task>,
    selection: Selection,
}

impl Workspace {
    pub fn new(config: WorkspaceConfig) -> Self {
        Workspace {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Open the new-project draft.
    pub fn start_new_project_draft(&mut self) {
        debug!(from = ?self.selection, "start new project draft");
        self.selection = Selection::DraftInProgress;
    }

    /// Select an existing project. Unknown ids leave the selection alone.
    pub fn select_project(&mut self, id: ProjectId) -> Result<(), WorkspaceError> {
        if !self.projects.contains_key(&id) {
            debug!(%id, "select ignored: unknown project");
            return Err(WorkspaceError::ProjectNotFound(id));
        }
        debug!(%id, "select project");
        self.selection = Selection::Active(id);
        Ok(())
    }

    /// Back to "nothing selected", from a draft or an active project.
    pub fn cancel_draft_or_selection(&mut self) {
        debug!(from = ?self.selection, "clear selection");
        self.selection = Selection::NoSelection;
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// Append a new project. The caller has already validated the fields.
    ///
    /// The selection returns to `NoSelection` unless the workspace is
    /// configured to select new projects.
    pub fn commit_new_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> ProjectId {
        let id = self.ids.project_id();
        let project = Project {
            id,
            title: title.into(),
            description: description.into(),
            due_date,
        };
        info!(%id, title = %project.title, %due_date, "project created");
        self.projects.insert(id, project);
        self.selection = if self.config.select_new_project {
            Selection::Active(id)
        } else {
            Selection::NoSelection
        };
        id
    }

    /// Remove the active project and clear the selection.
    /// Returns `None` without touching anything when no project is active.
    pub fn delete_active_project(&mut self) -> Option<Project> {
        let id = self.selection.active_id()?;
        self.selection = Selection::NoSelection;
        let removed = self.projects.shift_remove(&id);

        let mut dropped_tasks = 0;
        if self.config.on_project_delete == OrphanPolicy::Cascade {
            let before = self.tasks.len();
            self.tasks.retain(|t| !t.owner.belongs_to(id));
            dropped_tasks = before - self.tasks.len();
        }
        info!(%id, dropped_tasks, policy = ?self.config.on_project_delete, "project deleted");
        removed
    }

    pub fn projects(&self) -> impl ExactSizeIterator<Item = &Project> + '_ {
        self.projects.values()
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Position of a project in display order
    pub fn project_index(&self, id: ProjectId) -> Option<usize> {
        self.projects.get_index_of(&id)
    }

    pub fn project_at(&self, index: usize) -> Option<&Project> {
        self.projects.get_index(index).map(|(_, p)| p)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.selection
            .active_id()
            .and_then(|id| self.projects.get(&id))
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// Prepend a task owned by whichever project is active right now.
    pub fn add_task(&mut self, text: impl Into<String>) -> TaskId {
        let id = self.ids.task_id();
        let owner = match self.selection.active_id() {
            Some(project) => TaskOwner::Project(project),
            None => TaskOwner::Unassigned,
        };
        debug!(%id, ?owner, "task added");
        self.tasks.insert(
            0,
            Task {
                id,
                text: text.into(),
                owner,
            },
        );
        id
    }

    /// Remove a task. Unknown ids leave the list unchanged.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, WorkspaceError> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                debug!(%id, "task deleted");
                Ok(self.tasks.remove(idx))
            }
            None => {
                debug!(%id, "delete ignored: unknown task");
                Err(WorkspaceError::TaskNotFound(id))
            }
        }
    }

    /// Every task, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks of the active project, newest first; empty unless a project is active.
    pub fn tasks_for_active_project(&self) -> Vec<&Task> {
        match self.selection.active_id() {
            Some(id) => self.tasks.iter().filter(|t| t.owner.belongs_to(id)).collect(),
            None => Vec::new(),
        }
    }

    pub fn task_count_for(&self, project: ProjectId) -> usize {
        self.tasks.iter().filter(|t| t.owner.belongs_to(project)).count()
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            projects: self.projects.values().cloned().collect(),
            tasks: self.tasks.clone(),
            selection: self.selection,
        }
    }
}
