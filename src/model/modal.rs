//! Modal stack for managing overlays
//!
//! Dialog visibility is a proper state machine rather than a set of
//! boolean flags: the stack holds whichever overlays are open, and only
//! the top modal receives input.

use super::row::RowId;

/// Represents a modal overlay displayed on top of the main UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Rename dialog for one row
    ///
    /// `input` is the draft buffer: seeded from the row's current label
    /// when the dialog opens, edited by keystrokes, and discarded when
    /// the dialog closes. The committed label only changes on submit.
    RenameRow { row_id: RowId, input: String },
    /// Quit confirmation dialog
    QuitConfirm,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Get a mutable reference to the top modal
    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterate over open modals from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }

    /// The row whose rename dialog is open, if any
    ///
    /// At most one rename dialog exists on the stack at a time.
    pub fn rename_row(&self) -> Option<RowId> {
        self.stack.iter().find_map(|modal| match modal {
            Modal::RenameRow { row_id, .. } => Some(*row_id),
            Modal::QuitConfirm => None,
        })
    }

    /// Remove any open rename dialog, discarding its draft
    pub fn close_rename(&mut self) {
        self.stack
            .retain(|modal| !matches!(modal, Modal::RenameRow { .. }));
    }
}
