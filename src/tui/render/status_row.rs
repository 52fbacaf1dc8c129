use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::OrphanPolicy;
use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let text = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let (message, hint) = status_parts(app);
    let mut spans = vec![Span::styled(message, text)];
    if app.show_key_hints && !hint.is_empty() {
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, dim));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Left-aligned message and right-aligned key hint for the current state
fn status_parts(app: &App) -> (String, &'static str) {
    if let Some(session) = &app.draft {
        if session.form.is_notice_visible() {
            return (String::new(), "Enter close");
        }
        return (
            String::new(),
            "Tab next field  Space pick date  Enter save  Esc cancel",
        );
    }
    match app.mode {
        Mode::ConfirmDelete => {
            let title = app
                .workspace
                .active_project()
                .map_or("", |p| p.title.as_str());
            let prompt = match app.workspace.config().on_project_delete {
                OrphanPolicy::Cascade => format!("Delete \u{201c}{title}\u{201d} and its tasks? y/n"),
                OrphanPolicy::Keep => format!("Delete \u{201c}{title}\u{201d}? y/n"),
            };
            (prompt, "")
        }
        Mode::TaskEntry => (String::new(), "Enter add  Esc done"),
        Mode::Navigate => {
            let message = app.status.clone().unwrap_or_default();
            let hint = if app.workspace.active_project().is_some() {
                "i add task  Tab tasks  x delete task  D delete project  Esc back"
            } else {
                "n new  j/k move  Enter select  q quit"
            };
            (message, hint)
        }
    }
}
