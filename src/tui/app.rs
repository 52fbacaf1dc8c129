use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{DeckConfig, Task};
use crate::ops::date;
use crate::ops::draft::DraftForm;
use crate::ops::workspace::Workspace;

use super::input;
use super::listener::{KeyAction, KeyListeners, ListenerId};
use super::render;
use super::theme::Theme;

/// Current interaction mode outside the draft form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task for the active project
    TaskEntry,
    /// Waiting for y/n on deleting the active project
    ConfirmDelete,
}

/// Which pane the cursor keys move in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Tasks,
}

/// An open new-project draft and the Enter listener that belongs to it
#[derive(Debug)]
pub struct DraftSession {
    pub form: DraftForm,
    listener: ListenerId,
}

/// Main application state
pub struct App {
    pub workspace: Workspace,
    /// Present exactly while the workspace selection is `DraftInProgress`
    pub draft: Option<DraftSession>,
    pub listeners: KeyListeners,
    pub mode: Mode,
    pub focus: Focus,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor into the project list
    pub sidebar_cursor: usize,
    /// Cursor into the active project's task list
    pub task_cursor: usize,
    /// Task text being typed in TaskEntry mode
    pub task_input: String,
    /// One-line message for the status row, cleared on the next key
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &DeckConfig) -> Self {
        App {
            workspace: Workspace::new(config.workspace),
            draft: None,
            listeners: KeyListeners::default(),
            mode: Mode::Navigate,
            focus: Focus::Sidebar,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            sidebar_cursor: 0,
            task_cursor: 0,
            task_input: String::new(),
            status: None,
            should_quit: false,
        }
    }

    /// Open or close the draft session to match the workspace selection.
    ///
    /// Called after every selection change. Opening registers the Enter
    /// listener once; closing drops the form and deregisters it.
    pub fn sync_draft_session(&mut self) {
        let drafting = self.workspace.selection().is_draft();
        if drafting && self.draft.is_none() {
            let listener = self
                .listeners
                .register(KeyCode::Enter, KeyAction::SubmitDraft);
            self.draft = Some(DraftSession {
                form: DraftForm::new(date::today()),
                listener,
            });
            debug!("draft session opened");
        } else if !drafting && let Some(session) = self.draft.take() {
            self.listeners.deregister(session.listener);
            debug!("draft session closed");
        }
    }

    pub fn perform(&mut self, action: KeyAction) {
        match action {
            KeyAction::SubmitDraft => self.submit_draft(),
        }
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    pub fn start_draft(&mut self) {
        self.workspace.start_new_project_draft();
        self.mode = Mode::Navigate;
        self.focus = Focus::Sidebar;
        self.sync_draft_session();
    }

    /// Leave the draft or deselect the active project
    pub fn cancel(&mut self) {
        if let Some(session) = self.draft.as_mut() {
            session.form.cancel();
        }
        self.workspace.cancel_draft_or_selection();
        self.mode = Mode::Navigate;
        self.focus = Focus::Sidebar;
        self.task_input.clear();
        self.sync_draft_session();
    }

    /// The single submit path for the draft form (save key and Enter).
    pub fn submit_draft(&mut self) {
        let Some(session) = self.draft.as_mut() else {
            return;
        };
        match session.form.submit(&mut self.workspace) {
            Ok(id) => {
                if let Some(project) = self.workspace.project(id) {
                    self.status = Some(format!("Created \u{201c}{}\u{201d}", project.title));
                }
                if let Some(idx) = self.workspace.project_index(id) {
                    self.sidebar_cursor = idx;
                }
            }
            Err(e) => debug!(error = %e, "draft submit rejected"),
        }
        self.sync_draft_session();
    }

    pub fn select_project_at_cursor(&mut self) {
        let Some(id) = self
            .workspace
            .project_at(self.sidebar_cursor)
            .map(|p| p.id)
        else {
            return;
        };
        if self.workspace.select_project(id).is_ok() {
            self.task_cursor = 0;
            self.mode = Mode::Navigate;
        }
        self.sync_draft_session();
    }

    pub fn move_sidebar_cursor(&mut self, delta: isize) {
        self.sidebar_cursor = step(self.sidebar_cursor, delta, self.workspace.project_count());
    }

    // -----------------------------------------------------------------------
    // Active project
    // -----------------------------------------------------------------------

    pub fn request_delete_project(&mut self) {
        if self.workspace.active_project().is_some() {
            self.mode = Mode::ConfirmDelete;
        }
    }

    pub fn confirm_delete_project(&mut self) {
        self.mode = Mode::Navigate;
        self.focus = Focus::Sidebar;
        if let Some(project) = self.workspace.delete_active_project() {
            info!(id = %project.id, "project deleted from tui");
            self.status = Some(format!("Deleted \u{201c}{}\u{201d}", project.title));
        }
        let count = self.workspace.project_count();
        if self.sidebar_cursor >= count {
            self.sidebar_cursor = count.saturating_sub(1);
        }
        self.sync_draft_session();
    }

    pub fn start_task_entry(&mut self) {
        if self.workspace.active_project().is_some() {
            self.mode = Mode::TaskEntry;
            self.task_input.clear();
        }
    }

    /// Add the typed task to the active project. Blank input is dropped.
    pub fn commit_task_input(&mut self) {
        let text = std::mem::take(&mut self.task_input);
        if text.trim().is_empty() {
            return;
        }
        self.workspace.add_task(text.trim());
        self.task_cursor = 0;
    }

    pub fn active_tasks(&self) -> Vec<&Task> {
        self.workspace.tasks_for_active_project()
    }

    pub fn move_task_cursor(&mut self, delta: isize) {
        self.task_cursor = step(self.task_cursor, delta, self.active_tasks().len());
    }

    pub fn delete_task_at_cursor(&mut self) {
        let Some(id) = self.active_tasks().get(self.task_cursor).map(|t| t.id) else {
            return;
        };
        if let Err(e) = self.workspace.delete_task(id) {
            debug!(error = %e, "task delete ignored");
        }
        let remaining = self.active_tasks().len();
        if self.task_cursor >= remaining {
            self.task_cursor = remaining.saturating_sub(1);
        }
    }

    pub fn toggle_focus(&mut self) {
        if self.workspace.active_project().is_none() {
            self.focus = Focus::Sidebar;
            return;
        }
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Tasks,
            Focus::Tasks => Focus::Sidebar,
        };
    }
}

/// Move an index by `delta`, clamped to `0..len`
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

/// Run the TUI application. Returns the final workspace.
pub fn run(config: &DeckConfig) -> Result<Workspace, Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!(
        projects = app.workspace.project_count(),
        tasks = app.workspace.tasks().len(),
        "tui stopped"
    );

    result.map(|()| app.workspace)
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Selection;
    use crate::ops::draft::DraftField;

    fn app() -> App {
        App::new(&DeckConfig::default())
    }

    fn fill(app: &mut App, title: &str, description: &str, due: &str) {
        let form = &mut app.draft.as_mut().unwrap().form;
        form.set_field(DraftField::Title, title);
        form.set_field(DraftField::Description, description);
        form.set_field(DraftField::DueDate, due);
    }

    #[test]
    fn test_start_draft_registers_one_listener() {
        let mut app = app();
        app.start_draft();
        assert!(app.draft.is_some());
        assert_eq!(app.listeners.len(), 1);
        // Starting again while drafting keeps the same session
        app.start_draft();
        app.sync_draft_session();
        assert_eq!(app.listeners.len(), 1);
    }

    #[test]
    fn test_cancel_deregisters_listener() {
        let mut app = app();
        app.start_draft();
        app.cancel();
        assert!(app.draft.is_none());
        assert!(app.listeners.is_empty());
        assert_eq!(app.workspace.selection(), Selection::NoSelection);
    }

    #[test]
    fn test_submit_success_closes_session() {
        let mut app = app();
        app.start_draft();
        fill(&mut app, "Launch", "Ship v1", "2024-05-01");
        app.submit_draft();
        assert_eq!(app.workspace.project_count(), 1);
        assert!(app.draft.is_none());
        assert!(app.listeners.is_empty());
        assert!(app.status.as_deref().unwrap().contains("Launch"));
    }

    #[test]
    fn test_submit_failure_keeps_session() {
        let mut app = app();
        app.start_draft();
        fill(&mut app, "", "Sprint work", "2024-05-01");
        app.submit_draft();
        assert_eq!(app.workspace.project_count(), 0);
        let session = app.draft.as_ref().unwrap();
        assert!(session.form.is_notice_visible());
        assert_eq!(app.listeners.len(), 1);
    }

    #[test]
    fn test_submit_without_draft_is_noop() {
        let mut app = app();
        app.submit_draft();
        assert_eq!(app.workspace.project_count(), 0);
    }

    #[test]
    fn test_select_from_draft_closes_session() {
        let mut app = app();
        app.start_draft();
        fill(&mut app, "A", "a", "2024-05-01");
        app.submit_draft();
        app.start_draft();
        app.sidebar_cursor = 0;
        app.select_project_at_cursor();
        assert!(app.draft.is_none());
        assert!(app.listeners.is_empty());
        assert!(app.workspace.active_project().is_some());
    }

    #[test]
    fn test_delete_project_clamps_cursor() {
        let mut app = app();
        for title in ["A", "B"] {
            app.start_draft();
            fill(&mut app, title, "d", "2024-05-01");
            app.submit_draft();
        }
        app.sidebar_cursor = 1;
        app.select_project_at_cursor();
        app.request_delete_project();
        assert_eq!(app.mode, Mode::ConfirmDelete);
        app.confirm_delete_project();
        assert_eq!(app.workspace.project_count(), 1);
        assert_eq!(app.sidebar_cursor, 0);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn test_task_entry_and_delete() {
        let mut app = app();
        app.start_draft();
        fill(&mut app, "A", "a", "2024-05-01");
        app.submit_draft();
        app.select_project_at_cursor();

        app.start_task_entry();
        app.task_input = "write docs".into();
        app.commit_task_input();
        app.task_input = "   ".into();
        app.commit_task_input();
        assert_eq!(app.active_tasks().len(), 1);

        app.delete_task_at_cursor();
        assert!(app.active_tasks().is_empty());
        assert_eq!(app.task_cursor, 0);
    }

    #[test]
    fn test_step_clamps() {
        assert_eq!(step(0, -1, 3), 0);
        assert_eq!(step(2, 1, 3), 2);
        assert_eq!(step(1, 1, 3), 2);
        assert_eq!(step(5, 0, 0), 0);
    }
}
