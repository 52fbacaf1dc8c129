use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::DeckConfig;
use crate::ops::draft::DraftField;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App holding one committed project per title, nothing selected.
pub fn app_with_projects(titles: &[&str]) -> App {
    let mut app = App::new(&DeckConfig::default());
    for title in titles {
        app.start_draft();
        let form = &mut app.draft.as_mut().unwrap().form;
        form.set_field(DraftField::Title, *title);
        form.set_field(DraftField::Description, format!("About {title}"));
        form.set_field(DraftField::DueDate, "2024-05-01");
        app.submit_draft();
    }
    app.status = None;
    app.sidebar_cursor = 0;
    app
}

/// Like `app_with_projects`, with the first project active.
pub fn app_with_active_project(titles: &[&str]) -> App {
    let mut app = app_with_projects(titles);
    app.select_project_at_cursor();
    app
}
