use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') => app.confirm_delete_project(),
        KeyCode::Char('n') | KeyCode::Esc => app.mode = Mode::Navigate,
        _ => {}
    }
}
