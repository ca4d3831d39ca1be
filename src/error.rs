//! Error type shared by the library and the command-line front-end.

/// Errors produced by focus resolution and argument handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalError {
    /// The focused range points past the end of the range list.
    #[error("Focused range index {index} is out of bounds ({len} ranges)")]
    RangeIndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid display mode: {0}")]
    InvalidDisplayMode(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid year: {0} (must be 1-9999)")]
    InvalidYear(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid columns value: {0}")]
    InvalidColumns(String),

    #[error("Options -y, -3 and --week-of are mutually exclusive")]
    ConflictingModes,

    #[error("Invalid argument combination")]
    InvalidArguments,
}
