use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::ops::date;
use crate::tui::app::{App, Focus, Mode};

/// Render the active project: header, description and its tasks
pub fn render_project_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(project) = app.workspace.active_project() else {
        return;
    };
    let bg = app.theme.background;
    let title = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let text = Style::default().fg(app.theme.text).bg(bg);
    let rule = "\u{2500}".repeat(area.width as usize);

    let mut lines = vec![
        Line::from(Span::styled(project.title.clone(), title)),
        Line::from(Span::styled(
            format!("Due {}", date::display_date(project.due_date)),
            dim,
        )),
        Line::from(""),
    ];
    for desc_line in project.description.lines() {
        lines.push(Line::from(Span::styled(desc_line.to_string(), text)));
    }
    lines.push(Line::from(Span::styled(rule, dim)));
    lines.push(Line::from(Span::styled("TASKS", title)));
    lines.push(Line::from(""));

    if app.mode == Mode::TaskEntry {
        lines.push(Line::from(vec![
            Span::styled("New task: ", dim),
            Span::styled(app.task_input.clone(), text),
            Span::styled("\u{258C}", Style::default().fg(app.theme.text_bright).bg(bg)),
        ]));
        lines.push(Line::from(""));
    }

    let tasks = app.active_tasks();
    if tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            "This project does not have any tasks yet.",
            text,
        )));
    }
    for (i, task) in tasks.iter().enumerate() {
        let selected = app.focus == Focus::Tasks && i == app.task_cursor;
        let style = if selected {
            Style::default()
                .fg(app.theme.highlight)
                .bg(app.theme.selection_bg)
        } else {
            text
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "\u{25b8} " } else { "\u{2022} " }, dim),
            Span::styled(task.text.clone(), style),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
