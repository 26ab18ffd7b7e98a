//! Gauss–Jordan inversion.
//!
//! ## Purpose
//!
//! This module inverts square matrices by full Gauss–Jordan elimination on
//! the augmented block `[A | I]` and combines the result with the row
//! echelon form into a single rank-and-inverse record.
//!
//! ## Design notes
//!
//! * **Singularity is an outcome**: A singular or non-square input yields
//!   `None`, never an error.
//! * **Shared pivoting**: Uses the same elimination loop as the echelon
//!   form, so `has_inverse == (rank == size)` for every square input.
//!
//! ## Invariants
//!
//! * `has_inverse` implies `is_square`.
//! * `inverse.is_some() == has_inverse`.

use num_traits::Float;
use serde::Serialize;
use tracing::debug;

use crate::algorithms::echelon::to_row_echelon_form_with;
use crate::algorithms::elimination::{EliminationMode, eliminate};
use crate::primitives::matrix::Matrix;

// ============================================================================
// Result
// ============================================================================

/// Echelon form, rank and (when it exists) the inverse of a matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankAndInverseResult<T> {
    /// Row echelon form (see [`crate::algorithms::echelon`]).
    pub row_echelon_form: Matrix<T>,

    /// Rank of the input.
    pub rank: usize,

    /// Whether the input is non-empty and square.
    pub is_square: bool,

    /// Whether an inverse was found.
    pub has_inverse: bool,

    /// The inverse, present iff `has_inverse`.
    pub inverse: Option<Matrix<T>>,
}

// ============================================================================
// Operations
// ============================================================================

/// Inverse of `matrix`, or `None` when it is not square or is singular.
pub fn compute_inverse_gauss<T: Float>(matrix: &Matrix<T>) -> Option<Matrix<T>> {
    compute_inverse_gauss_with(matrix, T::zero())
}

/// Inverse of `matrix` with an explicit pivot tolerance.
pub fn compute_inverse_gauss_with<T: Float>(
    matrix: &Matrix<T>,
    pivot_tolerance: T,
) -> Option<Matrix<T>> {
    if !matrix.is_square() {
        return None;
    }

    let n = matrix.rows();
    let mut augmented = Matrix::from_fn(n, 2 * n, |i, j| {
        if j < n {
            matrix[(i, j)]
        } else if j - n == i {
            T::one()
        } else {
            T::zero()
        }
    });

    let outcome = eliminate(&mut augmented, n, EliminationMode::Full, pivot_tolerance);
    if outcome.pivots() < n {
        debug!(size = n, pivots = outcome.pivots(), "matrix is singular");
        return None;
    }

    Some(Matrix::from_fn(n, n, |i, j| augmented[(i, j + n)]))
}

/// Echelon form and rank for any matrix, plus the inverse for square input.
pub fn compute_rank_and_inverse<T: Float>(matrix: &Matrix<T>) -> RankAndInverseResult<T> {
    compute_rank_and_inverse_with(matrix, T::zero())
}

/// [`compute_rank_and_inverse`] with an explicit pivot tolerance.
pub fn compute_rank_and_inverse_with<T: Float>(
    matrix: &Matrix<T>,
    pivot_tolerance: T,
) -> RankAndInverseResult<T> {
    let echelon = to_row_echelon_form_with(matrix, pivot_tolerance);
    let is_square = matrix.is_square();

    let inverse = if is_square {
        compute_inverse_gauss_with(matrix, pivot_tolerance)
    } else {
        None
    };

    RankAndInverseResult {
        row_echelon_form: echelon.row_echelon_form,
        rank: echelon.rank,
        is_square,
        has_inverse: inverse.is_some(),
        inverse,
    }
}
