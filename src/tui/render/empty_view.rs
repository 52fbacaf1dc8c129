use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Shown when nothing is selected
pub fn render_empty_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let title = Style::default()
        .fg(app.theme.dim)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(app.theme.dim).bg(bg);
    let key = Style::default().fg(app.theme.text_bright).bg(bg);

    let top_pad = area.height / 4;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled("No project selected", title)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Select a project or start with a new one",
        text,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", text),
        Span::styled("n", key),
        Span::styled(" to create a new project", text),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
