//! Elementary matrix arithmetic.
//!
//! ## Purpose
//!
//! This module provides the pure building blocks used by the algorithms
//! layer: transpose, element-wise add/subtract, scalar multiplication,
//! matrix product, trace and small closed-form determinants.
//!
//! ## Design notes
//!
//! * **Pure**: Every function borrows its inputs and returns a new matrix.
//! * **Shape-checked**: Binary operations validate shapes before touching
//!   any cell and fail with a shape error instead of panicking.
//!
//! ## Invariants
//!
//! * `transpose(transpose(A)) == A`.
//! * `multiply(A, B)` has shape `rows(A) x cols(B)`.
//!
//! ## Non-goals
//!
//! * This module does not perform elimination (see `algorithms::elimination`).

use num_traits::Float;

use crate::primitives::errors::MatcalcError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Shape Checks
// ============================================================================

/// Fail unless `a` and `b` have identical shapes.
pub fn ensure_same_shape<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<(), MatcalcError> {
    if a.shape() != b.shape() {
        return Err(MatcalcError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// Fail unless `a` is non-empty and square.
pub fn ensure_square<T: Float>(a: &Matrix<T>) -> Result<(), MatcalcError> {
    if !a.is_square() {
        return Err(MatcalcError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    Ok(())
}

// ============================================================================
// Unary Operations
// ============================================================================

/// Transpose of `a`.
pub fn transpose<T: Float>(a: &Matrix<T>) -> Matrix<T> {
    Matrix::from_fn(a.cols(), a.rows(), |i, j| a[(j, i)])
}

/// Multiply every entry by `scalar`.
pub fn scale<T: Float>(a: &Matrix<T>, scalar: T) -> Matrix<T> {
    a.map(|v| v * scalar)
}

/// Sum of the main diagonal. Requires a square matrix.
pub fn trace<T: Float>(a: &Matrix<T>) -> Result<T, MatcalcError> {
    ensure_square(a)?;
    Ok((0..a.rows()).fold(T::zero(), |acc, i| acc + a[(i, i)]))
}

/// Determinant of a 2x2 or 3x3 matrix.
///
/// The 3x3 case is the cofactor expansion along the first row.
pub fn small_determinant<T: Float>(a: &Matrix<T>) -> Result<T, MatcalcError> {
    ensure_square(a)?;
    match a.rows() {
        1 => Ok(a[(0, 0)]),
        2 => Ok(a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)]),
        3 => {
            let minor = |r0: usize, c0: usize, r1: usize, c1: usize| {
                a[(r0, c0)] * a[(r1, c1)] - a[(r0, c1)] * a[(r1, c0)]
            };
            Ok(a[(0, 0)] * minor(1, 1, 2, 2) - a[(0, 1)] * minor(1, 0, 2, 2)
                + a[(0, 2)] * minor(1, 0, 2, 1))
        }
        n => Err(MatcalcError::UnsupportedSize {
            size: n,
            supported: "1, 2, 3",
        }),
    }
}

// ============================================================================
// Binary Operations
// ============================================================================

/// Element-wise `a + b`.
pub fn add<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatcalcError> {
    ensure_same_shape(a, b)?;
    Ok(Matrix::from_fn(a.rows(), a.cols(), |i, j| a[(i, j)] + b[(i, j)]))
}

/// Element-wise `a - b`.
pub fn subtract<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatcalcError> {
    ensure_same_shape(a, b)?;
    Ok(Matrix::from_fn(a.rows(), a.cols(), |i, j| a[(i, j)] - b[(i, j)]))
}

/// Matrix product `a * b`.
///
/// Fails iff `cols(a) != rows(b)`.
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatcalcError> {
    if a.cols() != b.rows() {
        return Err(MatcalcError::IncompatibleMultiplication {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let inner = a.cols();
    Ok(Matrix::from_fn(a.rows(), b.cols(), |i, j| {
        (0..inner).fold(T::zero(), |acc, k| acc + a[(i, k)] * b[(k, j)])
    }))
}

// ============================================================================
// Constants
// ============================================================================

/// Convert an `f64` constant into `T`.
#[inline]
pub fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
