//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `SessionState` - per-row label state and its transitions
//! - `ModalStack` - modal overlay management (dialog visibility + draft)
//! - `RowConfig` - the static row set

pub mod modal;
pub mod row;
pub mod session;

// Re-export commonly used types
pub use modal::{Modal, ModalStack};
pub use row::{row_config, LabelColor, RowConfig, RowId, ROW_CONFIGS};
pub use session::SessionState;
