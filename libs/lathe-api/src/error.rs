use crate::value::ValueKind;

/// Error kind for cursor errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No current row, or column index out of bounds.
    Range,
    /// Named column does not exist.
    NotFound,
    /// Cell text does not parse as the requested type.
    Format,
    /// Coerced value is not of the requested type.
    Cast,
}

/// Cursor error, returned by every positioned accessor.
///
/// None of these invalidate the cursor: the caller may retry with another
/// accessor or move to a different row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CursorError {
    #[error("no current row")]
    NoCurrentRow,

    #[error("invalid column index: {index} (column count {count})")]
    ColumnIndex { index: usize, count: usize },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column {column}: cannot parse '{value}' as {target}")]
    Format {
        column: usize,
        target: &'static str,
        value: String,
    },

    #[error("column {column}: cannot convert {actual:?} value to {target}")]
    Cast {
        column: usize,
        target: &'static str,
        actual: ValueKind,
    },
}

impl CursorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoCurrentRow | Self::ColumnIndex { .. } => ErrorKind::Range,
            Self::ColumnNotFound(_) => ErrorKind::NotFound,
            Self::Format { .. } => ErrorKind::Format,
            Self::Cast { .. } => ErrorKind::Cast,
        }
    }
}
