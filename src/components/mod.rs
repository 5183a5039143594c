//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod rename_dialog;

pub use home::HomeComponent;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use rename_dialog::RenameDialog;
