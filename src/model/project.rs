use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::ProjectId;

/// A committed project. The workspace only hands out shared references,
/// so a project never changes after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Trimmed, never empty
    pub title: String,
    /// Trimmed, never empty
    pub description: String,
    /// Serialized as `YYYY-MM-DD`
    pub due_date: NaiveDate,
}
