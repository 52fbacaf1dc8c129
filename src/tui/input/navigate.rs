use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,

        (_, KeyCode::Char('n')) | (_, KeyCode::Char('a')) => app.start_draft(),
        (_, KeyCode::Esc) => app.cancel(),
        (_, KeyCode::Tab) => app.toggle_focus(),

        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => match app.focus {
            Focus::Sidebar => app.move_sidebar_cursor(1),
            Focus::Tasks => app.move_task_cursor(1),
        },
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => match app.focus {
            Focus::Sidebar => app.move_sidebar_cursor(-1),
            Focus::Tasks => app.move_task_cursor(-1),
        },
        (_, KeyCode::Enter) if app.focus == Focus::Sidebar => app.select_project_at_cursor(),

        (_, KeyCode::Char('i')) => app.start_task_entry(),
        (_, KeyCode::Char('x')) | (_, KeyCode::Delete) if app.focus == Focus::Tasks => {
            app.delete_task_at_cursor()
        }
        (_, KeyCode::Char('D')) => app.request_delete_project(),
        _ => {}
    }
}
