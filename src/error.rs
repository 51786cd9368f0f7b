//! Error types for the layout engine.
//!
//! Every variant here is a contract violation by the caller. Invalid column
//! moves are not errors: drag gestures routinely pass through invalid states,
//! so the reorder path reports them as `None` instead.

use thiserror::Error;

use crate::column::ColumnId;

/// Errors raised by width-setting and initialization operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A width that is negative, NaN or infinite was passed for a column.
    #[error("invalid width {width} for column '{column}'")]
    InvalidWidth { column: ColumnId, width: f64 },

    /// A read-modify-write update targeted a column that was never initialized.
    #[error("no width entry for column '{column}'")]
    MissingEntry { column: ColumnId },

    /// Two leaf columns of the same table share an identity.
    #[error("duplicate leaf column '{column}'")]
    DuplicateColumn { column: ColumnId },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
