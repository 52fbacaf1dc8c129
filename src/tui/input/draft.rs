use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::draft::{DraftField, DraftForm};
use crate::tui::app::App;

pub(super) fn handle_draft(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Save: same path as the Enter listener
        (m, KeyCode::Char('s')) if m.contains(KeyModifiers::CONTROL) => app.submit_draft(),
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (_, KeyCode::Esc) => app.cancel(),
        _ => {
            if let Some(session) = app.draft.as_mut() {
                handle_form_key(&mut session.form, key);
            }
        }
    }
}

fn handle_form_key(form: &mut DraftForm, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => form.focus_next(),
        KeyCode::BackTab => form.focus_prev(),
        _ if form.focus() == DraftField::DueDate => handle_picker_key(form, key),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.insert_char(c),
        _ => {}
    }
}

/// Calendar navigation while the due-date field has focus
fn handle_picker_key(form: &mut DraftForm, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => form.picker_mut().move_days(-1),
        KeyCode::Right | KeyCode::Char('l') => form.picker_mut().move_days(1),
        KeyCode::Up | KeyCode::Char('k') => form.picker_mut().move_days(-7),
        KeyCode::Down | KeyCode::Char('j') => form.picker_mut().move_days(7),
        KeyCode::PageUp | KeyCode::Char('<') => form.picker_mut().move_months(-1),
        KeyCode::PageDown | KeyCode::Char('>') => form.picker_mut().move_months(1),
        KeyCode::Char(' ') => form.pick_cursor_date(),
        KeyCode::Backspace | KeyCode::Delete => form.select_date(None),
        _ => {}
    }
}
