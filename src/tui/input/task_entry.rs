use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

pub(super) fn handle_task_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_task_input(),
        KeyCode::Esc => {
            app.task_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            if let Some(cut) = unicode::prev_grapheme_boundary(&app.task_input, app.task_input.len())
            {
                app.task_input.truncate(cut);
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.task_input.push(c)
        }
        _ => {}
    }
}
