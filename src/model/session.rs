//! Session state - per-row label state and its transitions
//!
//! This is the state the UI mutates in response to user interaction.
//! It lives for the duration of the process and is seeded once from
//! `ROW_CONFIGS`. Dialog visibility is tracked separately by the modal
//! stack; the draft text being edited lives on the modal itself.

use super::row::{RowConfig, RowId, ROW_CONFIGS};

/// Mutable state for one row
#[derive(Debug, Clone)]
pub struct RowState {
    /// Label currently shown in the table (may be empty)
    pub current_label: String,
    /// Last submitted label, shown as a confirmation line when non-empty
    ///
    /// Tracked independently of `current_label` so that clearing a row
    /// also removes its confirmation line.
    pub last_submitted: String,
}

impl RowState {
    fn from_config(config: &RowConfig) -> Self {
        Self {
            current_label: config.default_label.to_string(),
            last_submitted: String::new(),
        }
    }
}

/// Session-scoped label state, one entry per configured row
///
/// Row ids are drawn from the static `ROW_CONFIGS` set, so every accessor
/// treats an unknown id as a programming error and panics.
#[derive(Debug)]
pub struct SessionState {
    rows: Vec<(RowId, RowState)>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Initialize all rows to their configured default labels
    pub fn new() -> Self {
        Self {
            rows: ROW_CONFIGS
                .iter()
                .map(|config| (config.id, RowState::from_config(config)))
                .collect(),
        }
    }

    fn row(&self, id: RowId) -> &RowState {
        self.rows
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, state)| state)
            .unwrap_or_else(|| panic!("row id {} is not configured", id))
    }

    fn row_mut(&mut self, id: RowId) -> &mut RowState {
        self.rows
            .iter_mut()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, state)| state)
            .unwrap_or_else(|| panic!("row id {} is not configured", id))
    }

    /// Label currently shown for a row
    pub fn current_label(&self, id: RowId) -> &str {
        &self.row(id).current_label
    }

    /// Last submitted label for a row (empty when nothing was submitted
    /// since startup or the last clear)
    pub fn last_submitted(&self, id: RowId) -> &str {
        &self.row(id).last_submitted
    }

    /// Apply a rename submission
    ///
    /// The text is trimmed; an empty or whitespace-only submission keeps
    /// the current label rather than clearing it. Either way the result
    /// is recorded as the last submission.
    pub fn submit(&mut self, id: RowId, raw: &str) {
        let row = self.row_mut(id);
        let trimmed = raw.trim();
        let label = if trimmed.is_empty() {
            row.current_label.clone()
        } else {
            trimmed.to_string()
        };
        row.current_label = label.clone();
        row.last_submitted = label;
    }

    /// Clear both the displayed label and the last submission for a row
    pub fn clear(&mut self, id: RowId) {
        let row = self.row_mut(id);
        row.current_label.clear();
        row.last_submitted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::row::row_config;

    #[test]
    fn test_initial_state_matches_defaults() {
        let session = SessionState::new();
        for config in &ROW_CONFIGS {
            assert_eq!(
                session.current_label(config.id),
                row_config(config.id).default_label
            );
            assert_eq!(session.last_submitted(config.id), "");
        }
    }

    #[test]
    fn test_submit_trims_whitespace() {
        let mut session = SessionState::new();
        session.submit(1, "  Hello  ");
        assert_eq!(session.current_label(1), "Hello");
        assert_eq!(session.last_submitted(1), "Hello");
    }

    #[test]
    fn test_whitespace_only_submit_keeps_current_label() {
        let mut session = SessionState::new();
        session.submit(1, "   ");
        assert_eq!(session.current_label(1), "Row 1");
        // The unchanged label still counts as the last submission
        assert_eq!(session.last_submitted(1), "Row 1");
    }

    #[test]
    fn test_empty_submit_after_clear_keeps_empty_label() {
        let mut session = SessionState::new();
        session.clear(1);
        session.submit(1, "");
        assert_eq!(session.current_label(1), "");
        assert_eq!(session.last_submitted(1), "");
    }

    #[test]
    fn test_clear_empties_both_fields() {
        let mut session = SessionState::new();
        session.submit(2, "Renamed");
        session.clear(2);
        assert_eq!(session.current_label(2), "");
        assert_eq!(session.last_submitted(2), "");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut session = SessionState::new();
        session.clear(1);
        session.clear(1);
        assert_eq!(session.current_label(1), "");
        assert_eq!(session.last_submitted(1), "");
    }

    #[test]
    fn test_rows_are_independent() {
        let mut session = SessionState::new();
        session.submit(1, "One");
        assert_eq!(session.current_label(2), "Row 2");
        assert_eq!(session.last_submitted(2), "");
    }

    #[test]
    #[should_panic]
    fn test_unknown_row_id_panics() {
        let session = SessionState::new();
        session.current_label(99);
    }
}
