//! Row echelon form and rank.
//!
//! ## Purpose
//!
//! This module computes a row echelon form of any rectangular matrix by
//! left-to-right, top-to-bottom elimination below each pivot, and derives
//! the rank from it.
//!
//! ## Design notes
//!
//! * **Non-destructive**: Works on a clone; the caller's matrix is untouched.
//! * **Not reduced**: Entries above pivots are left as they are (this is
//!   not RREF), but every pivot is normalized to 1.
//! * **Total**: Never fails. The empty matrix has rank 0.
//!
//! ## Invariants
//!
//! * `rank <= min(rows, cols)`.
//! * `rank` equals the number of rows of the form that are not all zero
//!   (exactly so under the default zero pivot tolerance).

use num_traits::Float;
use serde::Serialize;

use crate::algorithms::elimination::{EliminationMode, eliminate};
use crate::primitives::matrix::Matrix;

// ============================================================================
// Result
// ============================================================================

/// Row echelon form of a matrix together with its rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowEchelonResult<T> {
    /// Echelon form with leading ones, zeros below every pivot.
    pub row_echelon_form: Matrix<T>,

    /// Number of non-zero rows of `row_echelon_form`.
    pub rank: usize,
}

// ============================================================================
// Operations
// ============================================================================

/// Row echelon form using an exact zero test for pivots.
pub fn to_row_echelon_form<T: Float>(matrix: &Matrix<T>) -> RowEchelonResult<T> {
    to_row_echelon_form_with(matrix, T::zero())
}

/// Row echelon form treating entries with `|x| <= pivot_tolerance` as zero.
pub fn to_row_echelon_form_with<T: Float>(
    matrix: &Matrix<T>,
    pivot_tolerance: T,
) -> RowEchelonResult<T> {
    let mut form = matrix.clone();
    let cols = form.cols();
    let outcome = eliminate(&mut form, cols, EliminationMode::BelowOnly, pivot_tolerance);

    // Every pivot row is non-zero and every row past the last pivot is zero,
    // so the pivot count is the non-zero row count.
    RowEchelonResult {
        row_echelon_form: form,
        rank: outcome.pivots(),
    }
}

/// Rank of `matrix`.
pub fn rank<T: Float>(matrix: &Matrix<T>) -> usize {
    to_row_echelon_form(matrix).rank
}
