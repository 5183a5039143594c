//! Rename dialog component
//!
//! A centered popup with a single text input. The draft text lives on the
//! `Modal::RenameRow` entry in the modal stack, so this component is
//! stateless: the app passes the row config and the current draft in.

use crate::components::centered_popup;
use crate::model::RowConfig;
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rename dialog popup
#[derive(Default)]
pub struct RenameDialog;

impl RenameDialog {
    /// Draw the dialog for one row with the current draft text
    pub fn draw_with_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        row: &RowConfig,
        input: &str,
    ) -> Result<()> {
        let popup_area = centered_popup(area, 50, 9);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Rename row {}", row.id),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("> {}_", input),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Submit  "),
                Span::styled(
                    " Esc ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Rename row ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
