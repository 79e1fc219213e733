//! Error types.

use std::fmt;
use thiserror::Error;

/// Result type for operations touching the file system or the text format.
pub type Result<T> = std::result::Result<T, Error>;

/// An index based mutation addressed a dot that doesn't exist.
///
/// The spline is left untouched whenever this is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("index {index} is out of range for a spline of {len} dots")]
pub struct IndexError {
    /// The rejected index
    pub index: usize,
    /// Number of dots at the time of the call
    pub len: usize,
}

/// The five values stored per dot, in file order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    /// Horizontal position
    X,
    /// Vertical position
    Y,
    /// Tension parameter
    Tension,
    /// Bias parameter
    Bias,
    /// Continuity parameter
    Continuity,
}

impl Field {
    /// All fields in the order they appear on a line.
    pub const ALL: [Field; 5] = [
        Field::X,
        Field::Y,
        Field::Tension,
        Field::Bias,
        Field::Continuity,
    ];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::X => "X",
            Field::Y => "Y",
            Field::Tension => "tension",
            Field::Bias => "bias",
            Field::Continuity => "continuity",
        })
    }
}

/// Malformed spline text.
///
/// Line numbers start at 1.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A line didn't consist of exactly five space separated values.
    #[error("line {line}: wrong number of dot parameters, expected 5 but found {found}")]
    FieldCount {
        /// Offending line
        line: usize,
        /// Number of fields on that line
        found: usize,
    },

    /// A value couldn't be parsed as a number.
    #[error("line {line}: invalid {field} parameter {value:?}")]
    InvalidField {
        /// Offending line
        line: usize,
        /// Which of the five values failed
        field: Field,
        /// The text that failed to parse
        value: String,
    },
}

/// Errors that can occur while loading or saving a spline.
#[derive(Debug, Error)]
pub enum Error {
    /// The data was read but isn't a valid spline.
    #[error("file format error: {0}")]
    Format(#[from] FormatError),

    /// Reading or writing failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
