use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::draft::{DraftField, DraftForm};
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render the new-project form with its calendar
pub fn render_draft_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.draft.as_ref() else {
        return;
    };
    let form = &session.form;
    let theme = &app.theme;
    let bg = theme.background;
    let header = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme.dim).bg(bg);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("NEW PROJECT", header),
            Span::styled("   Esc cancel \u{00b7} Ctrl-S save", dim),
        ]),
        Line::from(""),
    ];

    for field in DraftField::ALL {
        lines.extend(field_lines(form, field, theme));
    }
    lines.push(Line::from(""));
    lines.extend(calendar_lines(form, theme));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn field_lines<'a>(form: &'a DraftForm, field: DraftField, theme: &Theme) -> Vec<Line<'a>> {
    let bg = theme.background;
    let focused = form.focus() == field;
    let label_style = if focused {
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let value_style = Style::default().fg(theme.text).bg(bg);
    let value = form.field(field);

    let mut value_spans = vec![Span::styled(if focused { "> " } else { "  " }, label_style)];
    if field == DraftField::DueDate && value.is_empty() {
        value_spans.push(Span::styled("not set", Style::default().fg(theme.dim).bg(bg)));
    } else {
        value_spans.push(Span::styled(value, value_style));
    }
    if focused && field != DraftField::DueDate {
        value_spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.text_bright).bg(bg),
        ));
    }

    vec![
        Line::from(Span::styled(field.label(), label_style)),
        Line::from(value_spans),
    ]
}

/// Month grid for the date picker, Monday first
fn calendar_lines(form: &DraftForm, theme: &Theme) -> Vec<Line<'static>> {
    let bg = theme.background;
    let picker = form.picker();
    let cursor = picker.cursor();
    let selected = form.selected_date();
    let picking = form.focus() == DraftField::DueDate;
    let dim = Style::default().fg(theme.dim).bg(bg);
    let day_style = Style::default().fg(theme.text).bg(bg);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("  {}", cursor.format("%B %Y")),
            Style::default().fg(theme.text_bright).bg(bg),
        )),
        Line::from(Span::styled("  Mo Tu We Th Fr Sa Su", dim)),
    ];
    for week in picker.month_grid() {
        let mut spans = vec![Span::styled("  ", day_style)];
        for day in week {
            let Some(day) = day else {
                spans.push(Span::styled("   ", day_style));
                continue;
            };
            let mut style = day_style;
            if Some(day) == selected {
                style = style.fg(theme.green).add_modifier(Modifier::BOLD);
            }
            if picking && day == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{:>2}", day.day()), style));
            spans.push(Span::styled(" ", day_style));
        }
        lines.push(Line::from(spans));
    }
    lines
}
