//! Error types for matrix kernel operations.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate. Errors describe violated shape preconditions
//! (not square, incompatible dimensions, unsupported size, ragged rows) and
//! invalid kernel configuration.
//!
//! ## Design notes
//!
//! * **Shape-first**: Every shape precondition is checked before any
//!   arithmetic happens, so an error never carries a partial result.
//! * **Singularity is not an error**: A non-invertible matrix is a normal
//!   outcome reported through `Option`/`has_inverse`.
//! * **Comparable**: Errors are `Clone` and `PartialEq` so tests can match
//!   them directly.
//!
//! ## Non-goals
//!
//! * This module does not localize messages; hosts map variants to text.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by the matrix kernel.
#[derive(Debug, Clone, PartialEq)]
pub enum MatcalcError {
    /// Rows of the input do not all have the same length.
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Expected row length (length of row 0).
        expected: usize,
        /// Actual length of the offending row.
        got: usize,
    },

    /// Operation requires a non-empty square matrix.
    NotSquare {
        /// Number of rows of the input.
        rows: usize,
        /// Number of columns of the input.
        cols: usize,
    },

    /// `cols(A) != rows(B)` in a matrix product.
    IncompatibleMultiplication {
        /// Shape of the left operand.
        left: (usize, usize),
        /// Shape of the right operand.
        right: (usize, usize),
    },

    /// Element-wise operation on matrices of different shapes.
    DimensionMismatch {
        /// Shape of the left operand.
        left: (usize, usize),
        /// Shape of the right operand.
        right: (usize, usize),
    },

    /// Square matrix of a size the operation does not support.
    UnsupportedSize {
        /// Size of the input.
        size: usize,
        /// Human-readable list of supported sizes.
        supported: &'static str,
    },

    /// A cell or parameter is NaN or infinite.
    InvalidNumericValue(String),

    /// A tolerance is negative or not finite.
    InvalidTolerance {
        /// Parameter name.
        parameter: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Sampling step count is out of range.
    InvalidSampleSteps(usize),

    /// Bisection iteration count is out of range.
    InvalidIterations(usize),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Parameter name.
        parameter: &'static str,
    },
}

impl fmt::Display for MatcalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRows { row, expected, got } => write!(
                f,
                "Ragged matrix: row {} has {} columns, expected {}",
                row, got, expected
            ),
            Self::NotSquare { rows, cols } => write!(
                f,
                "Matrix must be square and non-empty, got {}x{}",
                rows, cols
            ),
            Self::IncompatibleMultiplication { left, right } => write!(
                f,
                "Cannot multiply {}x{} by {}x{}: columns of A must equal rows of B",
                left.0, left.1, right.0, right.1
            ),
            Self::DimensionMismatch { left, right } => write!(
                f,
                "Dimension mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Self::UnsupportedSize { size, supported } => write!(
                f,
                "Unsupported matrix size {}x{} (supported: {})",
                size, size, supported
            ),
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::InvalidTolerance { parameter, value } => write!(
                f,
                "Invalid {}: {} (must be >= 0 and finite)",
                parameter, value
            ),
            Self::InvalidSampleSteps(steps) => write!(
                f,
                "Invalid sample_steps: {} (must be in [2, 100000])",
                steps
            ),
            Self::InvalidIterations(iterations) => write!(
                f,
                "Invalid bisection_iterations: {} (must be in [1, 200])",
                iterations
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

impl std::error::Error for MatcalcError {}
