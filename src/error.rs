//! Error types for log-line parsing.

use std::fmt;

/// Error returned when parsing a log line fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLineError {
    /// The line does not split into two populated fields plus the empty
    /// trailing field
    FieldCount { found: usize },
    /// The trailing field carries text where the emitted line leaves it empty
    TrailingField { text: String },
    /// A populated field is not a whole number
    Number { field: &'static str, text: String },
}

impl fmt::Display for ParseLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => {
                write!(f, "expected 3 `;`-separated fields, found {found}")
            }
            Self::TrailingField { text } => {
                write!(f, "trailing field must be empty, found `{text}`")
            }
            Self::Number { field, text } => {
                write!(f, "{field} field `{text}` is not a whole number")
            }
        }
    }
}

impl std::error::Error for ParseLineError {}
