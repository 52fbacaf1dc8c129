pub mod draft_view;
pub mod empty_view;
pub mod notice_popup;
pub mod project_view;
pub mod sidebar;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::model::Selection;

use super::app::App;

/// Sidebar width in columns
const SIDEBAR_W: u16 = 28;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content | status row (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_W), Constraint::Min(1)])
        .split(rows[0]);

    sidebar::render_sidebar(frame, app, cols[0]);
    render_main(frame, app, padded(cols[1]));

    if app
        .draft
        .as_ref()
        .is_some_and(|s| s.form.is_notice_visible())
    {
        notice_popup::render_notice_popup(frame, app, area);
    }

    status_row::render_status_row(frame, app, rows[1]);
}

/// The pane to the right of the sidebar, chosen by the selection
fn render_main(frame: &mut Frame, app: &App, area: Rect) {
    match app.workspace.selection() {
        Selection::NoSelection => empty_view::render_empty_view(frame, app, area),
        Selection::DraftInProgress => draft_view::render_draft_view(frame, app, area),
        Selection::Active(_) => project_view::render_project_view(frame, app, area),
    }
}

/// Inset by two columns and one row on each side
fn padded(area: Rect) -> Rect {
    Rect::new(
        area.x + 2.min(area.width),
        area.y + 1.min(area.height),
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}
