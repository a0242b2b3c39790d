//! Error types for the matrix crate

use thiserror::Error;

/// Errors from building a matrix out of untyped input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// Wrong number of elements (text or slice input)
    #[error("Expected {expected} matrix elements, got {found}")]
    ElementCount { expected: usize, found: usize },

    /// A text token that is not a valid f32
    #[error("Invalid matrix element at index {index}: {token:?}")]
    InvalidElement { index: usize, token: String },
}

/// Result type for fallible matrix conversions
pub type MatrixResult<T> = Result<T, MatrixError>;
