//! Error types for vecg.
//!
//! Vector arithmetic and geometry are total and never return errors. The only
//! fallible surface is building a fixed-arity vector out of a variable-length
//! collection, where the collection may hold the wrong number of components.

use std::fmt;

/// Errors that can occur when converting into a vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VecError {
    /// A collection did not hold exactly as many components as the vector.
    LengthMismatch {
        /// The arity of the target vector.
        expected: usize,
        /// The number of components the collection actually held.
        got: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VecError::LengthMismatch { expected, got } => write!(
                f,
                "Length mismatch: expected {} components, got {}",
                expected, got
            ),
        }
    }
}

impl std::error::Error for VecError {}

/// Result type alias for vecg conversions.
pub type Result<T> = std::result::Result<T, VecError>;

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, got: usize) -> VecError {
    VecError::LengthMismatch { expected, got }
}
