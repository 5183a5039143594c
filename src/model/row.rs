//! Row configuration - the fixed set of rows shown in the table
//!
//! Rows are defined at compile time; there is no runtime configuration
//! file or environment variable for them.

/// Identifier for a configured row
pub type RowId = u32;

/// Display color tag for a row label
///
/// Kept UI-framework-free here; components map this to a terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    Green,
    Red,
}

/// Static configuration for one row
#[derive(Debug, Clone, Copy)]
pub struct RowConfig {
    pub id: RowId,
    pub default_label: &'static str,
    pub color: LabelColor,
}

/// The fixed row set
pub const ROW_CONFIGS: [RowConfig; 2] = [
    RowConfig {
        id: 1,
        default_label: "Row 1",
        color: LabelColor::Green,
    },
    RowConfig {
        id: 2,
        default_label: "Row 2",
        color: LabelColor::Red,
    },
];

/// Look up a row config by id
///
/// Panics on an unknown id: the row set is static, so an unknown id is a
/// programming error rather than a recoverable condition.
pub fn row_config(id: RowId) -> &'static RowConfig {
    ROW_CONFIGS
        .iter()
        .find(|row| row.id == id)
        .unwrap_or_else(|| panic!("row id {} is not configured", id))
}
