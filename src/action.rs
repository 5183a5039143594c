//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::RowId;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick when no input is pending
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move selection to the next row
    NextRow,
    /// Move selection to the previous row
    PrevRow,

    // ─────────────────────────────────────────────────────────────────────────
    // Row Actions
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the rename dialog for a row
    OpenRenameDialog(RowId),
    /// Submit the rename dialog's text for a row
    SubmitRename(RowId, String),
    /// Clear a row's label and confirmation, no dialog involved
    ClearRow(RowId),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Close the current modal without applying anything
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::OpenRenameDialog(id) => write!(f, "OpenRenameDialog({})", id),
            Action::SubmitRename(id, text) => write!(f, "SubmitRename({}, {})", id, text),
            Action::ClearRow(id) => write!(f, "ClearRow({})", id),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_payloads() {
        assert_eq!(Action::OpenRenameDialog(2).to_string(), "OpenRenameDialog(2)");
        assert_eq!(
            Action::SubmitRename(1, "Hello".to_string()).to_string(),
            "SubmitRename(1, Hello)"
        );
        assert_eq!(Action::Resize(80, 24).to_string(), "Resize(80, 24)");
    }
}
