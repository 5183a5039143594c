//! Home component - Main application screen
//!
//! Displays the row table, per-row confirmation lines, and the help bar.
//! Owns navigation state (which row is selected).

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::model::{LabelColor, SessionState, ROW_CONFIGS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the label column in the row table
const LABEL_COLUMN_WIDTH: usize = 30;

/// Map a row's color tag to a terminal color
fn label_color(color: LabelColor) -> Color {
    match color {
        LabelColor::Green => Color::Green,
        LabelColor::Red => Color::Red,
    }
}

/// Truncate a label to the column width by display width, not bytes
fn truncate_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_string();
    }
    let mut out = String::new();
    for ch in label.chars() {
        // Account for the candidate character's own width so a trailing
        // double-width character cannot push the result past the budget
        if out.width() + ch.width().unwrap_or(0) + 3 > width {
            break;
        }
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Home component for the main application view
pub struct HomeComponent {
    /// Index of the selected row in `ROW_CONFIGS`
    pub selected: usize,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Move selection to the next row, wrapping at the end
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % ROW_CONFIGS.len();
    }

    /// Move selection to the previous row, wrapping at the start
    pub fn previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(ROW_CONFIGS.len() - 1);
    }

    /// Id of the currently selected row
    pub fn selected_row_id(&self) -> crate::model::RowId {
        ROW_CONFIGS[self.selected].id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Confirmation lines shown below the table
    ///
    /// One line per row whose last submission is non-empty.
    pub fn confirmation_lines(session: &SessionState) -> Vec<Line<'static>> {
        ROW_CONFIGS
            .iter()
            .filter(|config| !session.last_submitted(config.id).is_empty())
            .map(|config| {
                Line::from(Span::styled(
                    format!(
                        "Row {} now reads: {}",
                        config.id,
                        session.last_submitted(config.id)
                    ),
                    Style::default().fg(Color::Green),
                ))
            })
            .collect()
    }

    fn table_lines(&self, session: &SessionState) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            format!("  {:width$}", "Row Name", width = LABEL_COLUMN_WIDTH),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        for (index, config) in ROW_CONFIGS.iter().enumerate() {
            let marker = if index == self.selected { "▶ " } else { "  " };
            let label = truncate_label(session.current_label(config.id), LABEL_COLUMN_WIDTH);

            let mut row_style = Style::default()
                .fg(label_color(config.color))
                .add_modifier(Modifier::BOLD);
            if index == self.selected {
                row_style = row_style.bg(Color::DarkGray);
            }

            lines.push(Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{:width$}", label, width = LABEL_COLUMN_WIDTH),
                    row_style,
                ),
                Span::styled(" [r] Rename ", Style::default().fg(Color::DarkGray)),
                Span::styled(" [c] Clear ", Style::default().fg(Color::Red)),
            ]));
        }

        lines
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(vec![Line::from(Span::styled(
            "Row labels",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))]);
        frame.render_widget(title, area);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect, session: &SessionState) {
        let table = Paragraph::new(self.table_lines(session)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(table, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(vec![Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" r/Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Rename  "),
            Span::styled(" c ", Style::default().fg(Color::Yellow)),
            Span::raw("Clear  "),
            Span::styled(" q ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit"),
        ])])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, area);
    }

    /// Draw the full home screen: title, table, confirmations, help bar
    pub fn draw_with_session(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        session: &SessionState,
    ) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.draw_title(frame, layout.title);
        self.draw_table(frame, layout.table, session);
        frame.render_widget(
            Paragraph::new(Self::confirmation_lines(session)),
            layout.confirmations,
        );
        self.draw_help(frame, layout.help);

        Ok(())
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('r') | KeyCode::Enter => {
                Some(Action::OpenRenameDialog(self.selected_row_id()))
            }
            KeyCode::Char('c') => Some(Action::ClearRow(self.selected_row_id())),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextRow => self.next(),
            Action::PrevRow => self.previous(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Home is drawn through draw_with_session, which needs the session state
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_selection_wraps_in_both_directions() {
        let mut home = HomeComponent::new();
        assert_eq!(home.selected_row_id(), 1);

        home.next();
        assert_eq!(home.selected_row_id(), 2);
        home.next();
        assert_eq!(home.selected_row_id(), 1);

        home.previous();
        assert_eq!(home.selected_row_id(), 2);
    }

    #[test]
    fn test_confirmation_lines_shown_only_after_submission() {
        let mut session = SessionState::new();
        assert!(HomeComponent::confirmation_lines(&session).is_empty());

        session.submit(2, "Renamed");
        let lines = HomeComponent::confirmation_lines(&session);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "Row 2 now reads: Renamed");

        session.clear(2);
        assert!(HomeComponent::confirmation_lines(&session).is_empty());
    }

    #[test]
    fn test_truncate_label_by_display_width() {
        assert_eq!(truncate_label("short", 10), "short");
        let long = "a".repeat(40);
        let truncated = truncate_label(&long, 10);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.width(), 10);
    }

    #[test]
    fn test_truncate_label_with_wide_characters() {
        // Each CJK character occupies two columns
        let wide = "漢".repeat(20);
        let truncated = truncate_label(&wide, 10);
        assert!(truncated.ends_with("..."));
        assert!(truncated.width() <= 10);

        // A wide character that would land exactly on the budget is kept
        let truncated = truncate_label(&wide, 11);
        assert!(truncated.width() <= 11);
        assert!(truncated.starts_with("漢漢漢漢"));
    }
}
