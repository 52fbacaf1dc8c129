use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Render the project list on the left
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.sidebar_bg;
    let base = Style::default().fg(app.theme.dim).bg(bg);
    let header = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let inner_w = area.width.saturating_sub(4) as usize;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(" YOUR PROJECTS", header)),
        Line::from(""),
        Line::from(Span::styled(" + Add Project (n)", base)),
        Line::from(""),
    ];

    let active = app.workspace.selection().active_id();
    let show_cursor = app.draft.is_none() && app.focus == Focus::Sidebar;
    for (i, project) in app.workspace.projects().enumerate() {
        let is_active = active == Some(project.id);
        let style = if is_active {
            Style::default()
                .fg(app.theme.highlight)
                .bg(app.theme.selection_bg)
        } else {
            base
        };
        let marker = if show_cursor && i == app.sidebar_cursor {
            "\u{25b8}"
        } else {
            " "
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), base),
            Span::styled(unicode::truncate_to_width(&project.title, inner_w), style),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().style(Style::default().bg(bg)));
    frame.render_widget(paragraph, area);
}
