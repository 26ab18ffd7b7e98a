//! Shared Gaussian elimination routine.
//!
//! ## Purpose
//!
//! This module implements the single pivoting loop behind both the row
//! echelon form (elimination below the pivot only) and Gauss–Jordan
//! inversion (elimination above and below). Sharing one loop means both
//! call sites agree on which columns have pivots, so rank and
//! invertibility can never disagree.
//!
//! ## Design notes
//!
//! * **Pivot search**: First row at or below the cursor whose entry in the
//!   current column exceeds the pivot tolerance in magnitude. No magnitude
//!   based partial pivoting; with the default tolerance of zero this is an
//!   exact zero test.
//! * **Normalization**: The pivot row is divided by the pivot so every
//!   pivot becomes exactly 1.
//! * **Column skipping**: A column without a pivot advances only the column
//!   cursor and contributes to rank deficiency.
//!
//! ## Invariants
//!
//! * Pivot columns are strictly increasing.
//! * The number of pivots never exceeds `min(rows, scan_columns)`.
//! * Rows below the last pivot are zero in every scanned column.
//!
//! ## Non-goals
//!
//! * This module does not allocate or clone; callers own the working copy.

use num_traits::Float;
use tracing::trace;

use crate::primitives::matrix::Matrix;

// ============================================================================
// Elimination Mode
// ============================================================================

/// Which rows are cleared in the pivot column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EliminationMode {
    /// Clear entries strictly below each pivot (row echelon form).
    #[default]
    BelowOnly,

    /// Clear entries above and below each pivot (Gauss–Jordan).
    Full,
}

/// Outcome of an elimination pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Elimination {
    /// Column index of each pivot, in row order.
    pub pivot_columns: Vec<usize>,
}

impl Elimination {
    /// Number of pivots found.
    #[inline]
    pub fn pivots(&self) -> usize {
        self.pivot_columns.len()
    }
}

// ============================================================================
// Main Routine
// ============================================================================

/// Eliminate `matrix` in place.
///
/// Only the first `scan_columns` columns are searched for pivots; the
/// remaining columns (e.g. the identity half of an augmented block) are
/// carried along by the row operations.
pub fn eliminate<T: Float>(
    matrix: &mut Matrix<T>,
    scan_columns: usize,
    mode: EliminationMode,
    pivot_tolerance: T,
) -> Elimination {
    let rows = matrix.rows();
    let scan_columns = scan_columns.min(matrix.cols());

    let mut outcome = Elimination::default();
    let mut pivot_row = 0;
    let mut pivot_col = 0;

    while pivot_row < rows && pivot_col < scan_columns {
        let found = (pivot_row..rows)
            .find(|&r| matrix[(r, pivot_col)].abs() > pivot_tolerance);

        let Some(source) = found else {
            trace!(column = pivot_col, "no pivot in column");
            pivot_col += 1;
            continue;
        };

        matrix.swap_rows(source, pivot_row);
        let pivot = matrix[(pivot_row, pivot_col)];
        matrix.divide_row(pivot_row, pivot);
        trace!(
            row = pivot_row,
            column = pivot_col,
            swapped_from = source,
            "pivot"
        );

        let targets = match mode {
            EliminationMode::BelowOnly => pivot_row + 1..rows,
            EliminationMode::Full => 0..rows,
        };
        for r in targets {
            if r == pivot_row {
                continue;
            }
            let factor = matrix[(r, pivot_col)];
            if !factor.is_zero() {
                matrix.subtract_scaled_row(r, pivot_row, factor);
            }
        }

        outcome.pivot_columns.push(pivot_col);
        pivot_row += 1;
        pivot_col += 1;
    }

    outcome
}
