//! Error types for the math module.
//!
//! Every variant is an unrecoverable logic error: callers are expected to
//! present vectors and matrices of compatible shapes, and these exist to
//! catch construction bugs during development and testing, not to be
//! retried at runtime.

use std::fmt;

/// Errors raised by vector and matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Two operands had incompatible dimensions.
    DimensionMismatch {
        /// Dimension required by the left operand / receiver.
        expected: usize,
        /// Dimension actually supplied.
        got: usize,
    },

    /// Determinant or inverse requested for a matrix size outside 2x2-4x4.
    UnsupportedSize {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// Inverse of a matrix whose determinant is zero.
    Singular,

    /// Normalization of a zero-magnitude vector.
    DivideByZero,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {}, got {}", expected, got)
            }
            MathError::UnsupportedSize { rows, cols } => write!(
                f,
                "unsupported matrix size {}x{}: only 2x2, 3x3 and 4x4 are supported",
                rows, cols
            ),
            MathError::Singular => write!(f, "matrix is singular (zero determinant)"),
            MathError::DivideByZero => write!(f, "cannot normalize a zero-magnitude vector"),
        }
    }
}

impl std::error::Error for MathError {}

/// Convenience alias: a `Result` using `MathError` as the error type.
pub type MathResult<T> = Result<T, MathError>;
