//! Layout calculations for the UI

use crate::model::ROW_CONFIGS;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub title: Rect,
    pub table: Rect,
    pub confirmations: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// Vertical stack: title, row table, confirmation lines, help bar.
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    // One bordered line per row plus the header line and the table border
    let table_height = ROW_CONFIGS.len() as u16 + 3;
    // One potential confirmation line per row
    let confirmations_height = ROW_CONFIGS.len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(table_height),
            Constraint::Length(confirmations_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    MainLayout {
        title: chunks[0],
        table: chunks[1],
        confirmations: chunks[2],
        help: chunks[4],
    }
}
