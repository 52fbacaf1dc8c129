mod confirm;
mod draft;
mod navigate;
mod task_entry;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    // The invalid-input notice is modal
    if let Some(session) = app.draft.as_mut()
        && session.form.is_notice_visible()
    {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            session.form.acknowledge_notice();
        }
        return;
    }

    // Session listeners see keys before any mode does
    if let Some(action) = app.listeners.dispatch(&key) {
        app.perform(action);
        return;
    }

    if app.draft.is_some() {
        draft::handle_draft(app, key);
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::TaskEntry => task_entry::handle_task_entry(app, key),
        Mode::ConfirmDelete => confirm::handle_confirm(app, key),
    }
}
