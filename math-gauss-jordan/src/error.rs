//! Error types for Gauss-Jordan elimination.
//!
//! Shape problems are detected before a matrix is touched and reported as
//! [`GaussJordanError`]. Problems reading the text input format are reported
//! as [`ParseError`].

use thiserror::Error;

/// Errors that can occur before elimination starts.
///
/// A column without a usable pivot is not an error; it is reported through
/// [`crate::EliminationReport::skipped_columns`].
#[derive(Debug, Error)]
pub enum GaussJordanError {
    /// The matrix has no rows or no columns to eliminate.
    #[error("matrix must have at least one row and one column, got {rows}x{columns}")]
    EmptyMatrix {
        /// Number of rows supplied
        rows: usize,
        /// Number of coefficient columns supplied
        columns: usize,
    },

    /// A row does not have the same length as the first row.
    #[error("ragged matrix: row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// The right-hand side does not have one entry per row.
    #[error("right-hand side length mismatch: expected {expected}, got {got}")]
    RhsLengthMismatch {
        /// Number of matrix rows
        expected: usize,
        /// Length of the right-hand side
        got: usize,
    },

    /// The zero-pivot tolerance is not a positive finite number.
    #[error("invalid pivot tolerance: {tolerance} (must be finite and > 0)")]
    InvalidTolerance {
        /// The invalid tolerance value
        tolerance: f64,
    },

    /// An elimination report was paired with a matrix of another shape.
    #[error("report describes a {expected_rows}x{expected_columns} matrix, got {rows}x{columns}")]
    ReportShapeMismatch {
        /// Rows recorded in the report
        expected_rows: usize,
        /// Columns recorded in the report
        expected_columns: usize,
        /// Rows of the supplied matrix
        rows: usize,
        /// Columns of the supplied matrix
        columns: usize,
    },
}

/// A specialized `Result` type for elimination operations.
pub type Result<T> = std::result::Result<T, GaussJordanError>;

impl GaussJordanError {
    /// Returns `true` if the input matrix or right-hand side has the wrong shape.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            GaussJordanError::EmptyMatrix { .. }
                | GaussJordanError::RaggedRow { .. }
                | GaussJordanError::RhsLengthMismatch { .. }
                | GaussJordanError::ReportShapeMismatch { .. }
        )
    }

    /// Returns `true` if this is a tolerance error.
    pub fn is_tolerance_error(&self) -> bool {
        matches!(self, GaussJordanError::InvalidTolerance { .. })
    }
}

/// Errors that can occur while reading a system from its text format.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading the underlying source failed.
    #[error("failed to read system: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before all values were read.
    #[error("unexpected end of input: expected {expected} at token {position}")]
    UnexpectedEof {
        /// What was being read
        expected: &'static str,
        /// Zero-based token index where the value was expected
        position: usize,
    },

    /// A token could not be parsed as the expected kind of value.
    #[error("invalid {expected} '{token}' at token {position}")]
    InvalidToken {
        /// What was being read
        expected: &'static str,
        /// The offending token
        token: String,
        /// Zero-based token index
        position: usize,
    },

    /// Extra tokens follow the right-hand side.
    #[error("{count} unexpected trailing token(s) after the right-hand side")]
    TrailingTokens {
        /// Number of extra tokens
        count: usize,
    },

    /// The declared dimensions do not describe a valid system.
    #[error(transparent)]
    Shape(#[from] GaussJordanError),
}
