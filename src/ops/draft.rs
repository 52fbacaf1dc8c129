use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::model::ProjectId;
use crate::ops::date::{self, DatePicker};
use crate::ops::workspace::Workspace;
use crate::util::unicode;

/// Fields of the new-project form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    DueDate,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Title, DraftField::Description, DraftField::DueDate];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Description => "Description",
            DraftField::DueDate => "Due Date",
        }
    }

    fn next(self) -> Self {
        match self {
            DraftField::Title => DraftField::Description,
            DraftField::Description => DraftField::DueDate,
            DraftField::DueDate => DraftField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            DraftField::Title => DraftField::DueDate,
            DraftField::Description => DraftField::Title,
            DraftField::DueDate => DraftField::Description,
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a draft was rejected. Shown to the user as the invalid-input notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} must not be empty")]
    EmptyField(DraftField),
    #[error("invalid due date: {0:?}")]
    InvalidDate(String),
}

/// Coarse state of the form, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    Empty,
    PartiallyFilled,
    InvalidNotice,
}

/// Uncommitted fields of a new project.
///
/// `submit` is the only way a draft reaches the workspace; every trigger
/// (save action, Enter key) goes through it.
#[derive(Debug, Clone)]
pub struct DraftForm {
    title: String,
    description: String,
    /// Canonical `YYYY-MM-DD`, or empty
    due_date: String,
    focus: DraftField,
    invalid_notice: bool,
    picker: DatePicker,
}

impl Default for DraftForm {
    fn default() -> Self {
        DraftForm::new(date::today())
    }
}

impl DraftForm {
    /// An empty form whose date picker starts at `picker_start`
    pub fn new(picker_start: NaiveDate) -> Self {
        DraftForm {
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            focus: DraftField::Title,
            invalid_notice: false,
            picker: DatePicker::new(picker_start),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::DueDate => &self.due_date,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
            DraftField::DueDate => &mut self.due_date,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    // -----------------------------------------------------------------------
    // Focus and editing
    // -----------------------------------------------------------------------

    pub fn focus(&self) -> DraftField {
        self.focus
    }

    pub fn set_focus(&mut self, field: DraftField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type into the focused field. The due date only changes through
    /// the picker, so typing there is ignored.
    pub fn insert_char(&mut self, c: char) {
        if self.focus == DraftField::DueDate {
            return;
        }
        self.field_mut(self.focus).push(c);
    }

    /// Remove the last grapheme of the focused field; clears the due date.
    pub fn backspace(&mut self) {
        if self.focus == DraftField::DueDate {
            self.select_date(None);
            return;
        }
        let text = self.field_mut(self.focus);
        if let Some(cut) = unicode::prev_grapheme_boundary(text, text.len()) {
            text.truncate(cut);
        }
    }

    // -----------------------------------------------------------------------
    // Date picker
    // -----------------------------------------------------------------------

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut DatePicker {
        &mut self.picker
    }

    /// Set the due date to `YYYY-MM-DD`, or clear it with `None`.
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        match date {
            Some(d) => {
                self.due_date = date::format_date(d);
                self.picker.set_cursor(d);
            }
            None => self.due_date.clear(),
        }
    }

    /// Choose the date under the picker cursor
    pub fn pick_cursor_date(&mut self) {
        self.select_date(Some(self.picker.cursor()));
    }

    /// The chosen due date, if the field holds a valid one
    pub fn selected_date(&self) -> Option<NaiveDate> {
        date::parse_date(&self.due_date)
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Validate, then hand the trimmed fields to the workspace and reset.
    ///
    /// On failure the notice is raised and neither the workspace nor the
    /// fields change.
    pub fn submit(&mut self, workspace: &mut Workspace) -> Result<ProjectId, DraftError> {
        let (title, description, due) = match self.validate() {
            Ok(fields) => fields,
            Err(e) => {
                debug!(error = %e, "draft rejected");
                self.invalid_notice = true;
                return Err(e);
            }
        };
        let id = workspace.commit_new_project(title, description, due);
        self.clear();
        Ok(id)
    }

    fn validate(&self) -> Result<(String, String, NaiveDate), DraftError> {
        if let Some(blank) = DraftField::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
        {
            return Err(DraftError::EmptyField(blank));
        }
        let due = date::parse_date(&self.due_date)
            .ok_or_else(|| DraftError::InvalidDate(self.due_date.trim().to_string()))?;
        Ok((
            self.title.trim().to_string(),
            self.description.trim().to_string(),
            due,
        ))
    }

    pub fn is_notice_visible(&self) -> bool {
        self.invalid_notice
    }

    /// Dismiss the invalid-input notice; fields are kept for correction.
    pub fn acknowledge_notice(&mut self) {
        self.invalid_notice = false;
    }

    /// Discard everything typed so far.
    pub fn cancel(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.due_date.clear();
        self.focus = DraftField::Title;
        self.invalid_notice = false;
    }

    pub fn phase(&self) -> DraftPhase {
        if self.invalid_notice {
            DraftPhase::InvalidNotice
        } else if DraftField::ALL.iter().all(|f| self.field(*f).is_empty()) {
            DraftPhase::Empty
        } else {
            DraftPhase::PartiallyFilled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Selection;

    fn date(s: &str) -> NaiveDate {
        date::parse_date(s).unwrap()
    }

    fn filled(title: &str, description: &str, due: &str) -> DraftForm {
        let mut form = DraftForm::new(date("2024-04-15"));
        form.set_field(DraftField::Title, title);
        form.set_field(DraftField::Description, description);
        form.set_field(DraftField::DueDate, due);
        form
    }

    fn drafting() -> Workspace {
        let mut ws = Workspace::default();
        ws.start_new_project_draft();
        ws
    }

    #[test]
    fn test_submit_valid_creates_project_and_resets() {
        let mut ws = drafting();
        let mut form = filled("Launch", "Ship v1", "2024-05-01");
        let id = form.submit(&mut ws).unwrap();

        assert_eq!(ws.project_count(), 1);
        let p = ws.project(id).unwrap();
        assert_eq!(p.title, "Launch");
        assert_eq!(p.description, "Ship v1");
        assert_eq!(p.due_date, date("2024-05-01"));
        for f in DraftField::ALL {
            assert_eq!(form.field(f), "");
        }
        assert_eq!(form.phase(), DraftPhase::Empty);
        assert_eq!(ws.selection(), Selection::NoSelection);
    }

    #[test]
    fn test_submit_empty_title_rejected() {
        let mut ws = drafting();
        let mut form = filled("", "Sprint work", "2024-05-01");
        let err = form.submit(&mut ws).unwrap_err();

        assert_eq!(err, DraftError::EmptyField(DraftField::Title));
        assert!(form.is_notice_visible());
        assert_eq!(form.phase(), DraftPhase::InvalidNotice);
        assert_eq!(ws.project_count(), 0);
        assert_eq!(ws.selection(), Selection::DraftInProgress);
        assert_eq!(form.field(DraftField::Description), "Sprint work");
    }

    #[test]
    fn test_submit_whitespace_only_rejected() {
        let mut ws = drafting();
        let mut form = filled("Launch", "   \t", "2024-05-01");
        assert_eq!(
            form.submit(&mut ws),
            Err(DraftError::EmptyField(DraftField::Description))
        );
        let mut form = filled("Launch", "Ship", " ");
        assert_eq!(
            form.submit(&mut ws),
            Err(DraftError::EmptyField(DraftField::DueDate))
        );
        assert_eq!(ws.project_count(), 0);
    }

    #[test]
    fn test_submit_bad_date_rejected() {
        let mut ws = drafting();
        let mut form = filled("Launch", "Ship", "next tuesday");
        assert_eq!(
            form.submit(&mut ws),
            Err(DraftError::InvalidDate("next tuesday".into()))
        );
        assert!(form.is_notice_visible());
        assert_eq!(ws.project_count(), 0);
    }

    #[test]
    fn test_submit_trims_fields() {
        let mut ws = drafting();
        let mut form = filled("  Launch ", "\nShip v1  ", "2024-05-01");
        let id = form.submit(&mut ws).unwrap();
        let p = ws.project(id).unwrap();
        assert_eq!(p.title, "Launch");
        assert_eq!(p.description, "Ship v1");
    }

    #[test]
    fn test_acknowledge_keeps_fields() {
        let mut ws = drafting();
        let mut form = filled("Launch", "", "2024-05-01");
        form.submit(&mut ws).unwrap_err();
        form.acknowledge_notice();
        assert!(!form.is_notice_visible());
        assert_eq!(form.field(DraftField::Title), "Launch");
        assert_eq!(form.field(DraftField::DueDate), "2024-05-01");
        assert_eq!(form.phase(), DraftPhase::PartiallyFilled);
    }

    #[test]
    fn test_select_date_canonical_and_clear() {
        let mut form = DraftForm::new(date("2024-04-15"));
        form.select_date(NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(form.field(DraftField::DueDate), "2024-05-01");
        assert_eq!(form.picker().cursor(), date("2024-05-01"));
        form.select_date(None);
        assert_eq!(form.field(DraftField::DueDate), "");
    }

    #[test]
    fn test_pick_cursor_date() {
        let mut form = DraftForm::new(date("2024-04-15"));
        form.picker_mut().move_days(3);
        form.pick_cursor_date();
        assert_eq!(form.selected_date(), Some(date("2024-04-18")));
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut form = DraftForm::new(date("2024-04-15"));
        for c in "Hi".chars() {
            form.insert_char(c);
        }
        form.insert_char('é');
        assert_eq!(form.field(DraftField::Title), "Hié");
        form.backspace();
        assert_eq!(form.field(DraftField::Title), "Hi");
        form.focus_next();
        form.insert_char('d');
        assert_eq!(form.field(DraftField::Description), "d");
    }

    #[test]
    fn test_due_date_ignores_typing_backspace_clears() {
        let mut form = DraftForm::new(date("2024-04-15"));
        form.set_focus(DraftField::DueDate);
        form.insert_char('x');
        assert_eq!(form.field(DraftField::DueDate), "");
        form.pick_cursor_date();
        form.backspace();
        assert_eq!(form.field(DraftField::DueDate), "");
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = DraftForm::new(date("2024-04-15"));
        form.focus_prev();
        assert_eq!(form.focus(), DraftField::DueDate);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), DraftField::Description);
    }

    #[test]
    fn test_cancel_discards() {
        let mut form = filled("Launch", "Ship", "2024-05-01");
        form.set_focus(DraftField::DueDate);
        form.cancel();
        assert_eq!(form.phase(), DraftPhase::Empty);
        assert_eq!(form.focus(), DraftField::Title);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DraftError::EmptyField(DraftField::DueDate).to_string(),
            "Due Date must not be empty"
        );
    }
}
