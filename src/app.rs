//! Root application component
//!
//! The App struct acts as the root component: it owns the session state
//! and the modal stack, and delegates event handling and rendering to
//! child components. State transitions happen in `update`; event handlers
//! only translate keys into Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::{HomeComponent, QuitDialog, RenameDialog};
use crate::model::{row_config, Modal, ModalStack, SessionState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use tracing::debug;

/// Main application state - coordinates between components
pub struct App {
    /// Per-row label state for this session
    pub session: SessionState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub rename_dialog: RenameDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance with default row labels
    pub fn new() -> App {
        App {
            session: SessionState::new(),
            modals: ModalStack::new(),
            should_quit: false,
            home: HomeComponent::new(),
            quit_dialog: QuitDialog,
            rename_dialog: RenameDialog,
        }
    }

    /// Handle a key event, routing it to the top modal if one is open
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::RenameRow { row_id, input } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::SubmitRename(*row_id, input.clone())),
                    KeyCode::Backspace => {
                        if let Some(Modal::RenameRow { input, .. }) = self.modals.top_mut() {
                            input.pop();
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::RenameRow { input, .. }) = self.modals.top_mut() {
                            input.push(c);
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
        }
    }

    /// Process an Action and update state
    pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(_, _) => {}

            Action::ForceQuit => {
                debug!("quitting");
                self.should_quit = true;
            }

            // Navigation (delegate to HomeComponent)
            Action::NextRow | Action::PrevRow => {
                return self.home.update(action);
            }

            Action::OpenRenameDialog(row_id) => {
                // Validate the id up front; an unknown id is a bug
                row_config(row_id);
                debug!(row_id, "opening rename dialog");
                // At most one rename dialog may be open; opening for a new
                // row replaces it. The draft is seeded from the committed
                // label, so a re-open for the same row also re-seeds it.
                self.modals.close_rename();
                self.modals.push(Modal::RenameRow {
                    row_id,
                    input: self.session.current_label(row_id).to_string(),
                });
            }

            Action::SubmitRename(row_id, text) => {
                debug!(row_id, text = text.as_str(), "rename submitted");
                self.session.submit(row_id, &text);
                self.modals.close_rename();
            }

            Action::ClearRow(row_id) => {
                debug!(row_id, "clearing row");
                self.session.clear(row_id);
                // Clearing closes the rename dialog no matter which row it
                // was open for
                self.modals.close_rename();
            }

            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }

            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    /// Draw the main screen and any open modals on top of it
    pub fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.home.draw_with_session(frame, area, &self.session)?;

        // Render modals from bottom to top
        let open_modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &open_modals {
            match modal {
                Modal::RenameRow { row_id, input } => {
                    self.rename_dialog
                        .draw_with_input(frame, area, row_config(*row_id), input)?;
                }
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    /// Drive a key event through the app, applying any resulting actions
    fn press(app: &mut App, code: KeyCode) {
        let mut action = app.handle_key_event(key(code)).unwrap();
        while let Some(a) = action.take() {
            action = app.update(a).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_initial_state() {
        let app = App::new();
        assert_eq!(app.session.current_label(1), "Row 1");
        assert_eq!(app.session.current_label(2), "Row 2");
        assert_eq!(app.session.last_submitted(1), "");
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_open_dialog_seeds_draft_from_current_label() {
        let mut app = App::new();
        app.update(Action::OpenRenameDialog(1)).unwrap();
        assert_eq!(
            app.modals.top(),
            Some(&Modal::RenameRow {
                row_id: 1,
                input: "Row 1".to_string(),
            })
        );
    }

    #[test]
    fn test_rename_flow_trims_and_commits() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('r'));
        // Wipe the seeded draft, then type a padded replacement
        for _ in 0.."Row 1".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "  Hello  ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.current_label(1), "Hello");
        assert_eq!(app.session.last_submitted(1), "Hello");
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_whitespace_only_submit_keeps_label() {
        let mut app = App::new();
        app.update(Action::OpenRenameDialog(1)).unwrap();
        app.update(Action::SubmitRename(1, "   ".to_string()))
            .unwrap();

        assert_eq!(app.session.current_label(1), "Row 1");
        assert_eq!(app.session.last_submitted(1), "Row 1");
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_only_one_rename_dialog_at_a_time() {
        let mut app = App::new();
        app.update(Action::OpenRenameDialog(1)).unwrap();
        app.update(Action::OpenRenameDialog(2)).unwrap();

        assert_eq!(app.modals.rename_row(), Some(2));
        assert_eq!(
            app.modals.top(),
            Some(&Modal::RenameRow {
                row_id: 2,
                input: "Row 2".to_string(),
            })
        );
    }

    #[test]
    fn test_clear_closes_dialog_for_other_row() {
        let mut app = App::new();
        app.update(Action::OpenRenameDialog(1)).unwrap();
        app.update(Action::ClearRow(2)).unwrap();

        assert!(app.modals.is_empty());
        assert_eq!(app.session.current_label(2), "");
        assert_eq!(app.session.last_submitted(2), "");
        // Row 1 is untouched
        assert_eq!(app.session.current_label(1), "Row 1");
    }

    #[test]
    fn test_clear_via_keys_is_idempotent() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('c'));

        assert_eq!(app.session.current_label(1), "");
        assert_eq!(app.session.last_submitted(1), "");
    }

    #[test]
    fn test_escape_discards_draft_edits() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('r'));
        type_text(&mut app, "edited");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.session.current_label(1), "Row 1");
        assert_eq!(app.session.last_submitted(1), "");
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_reopen_reseeds_draft() {
        let mut app = App::new();
        app.update(Action::OpenRenameDialog(1)).unwrap();
        if let Some(Modal::RenameRow { input, .. }) = app.modals.top_mut() {
            input.push_str("garbage");
        }
        app.update(Action::OpenRenameDialog(1)).unwrap();

        assert_eq!(
            app.modals.top(),
            Some(&Modal::RenameRow {
                row_id: 1,
                input: "Row 1".to_string(),
            })
        );
    }

    #[test]
    fn test_selection_routes_actions_to_selected_row() {
        let mut app = App::new();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.last_submitted(2), "Row 2");
        assert_eq!(app.session.last_submitted(1), "");
    }

    #[test]
    fn test_quit_flow_requires_confirmation() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    #[should_panic]
    fn test_open_dialog_for_unknown_row_panics() {
        let mut app = App::new();
        let _ = app.update(Action::OpenRenameDialog(99));
    }
}
