//! Dense matrix value type.
//!
//! ## Purpose
//!
//! This module provides [`Matrix`], the small dense row-major matrix every
//! kernel operation consumes and produces.
//!
//! ## Design notes
//!
//! * **Validated value**: Construction from nested rows either yields a
//!   rectangular matrix with explicit `rows`/`cols` or fails with
//!   [`MatcalcError::RaggedRows`]. Shape is never rediscovered by scanning.
//! * **Row-major storage**: A single `Vec<T>` keeps rows contiguous so row
//!   swaps and row operations are slice operations.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols`.
//! * A matrix with zero rows or zero columns is the 0x0 empty matrix.
//!
//! ## Non-goals
//!
//! * This module does not implement arithmetic (see `math::ops`).

use core::fmt;
use core::ops::{Index, IndexMut};

use num_traits::Float;
use serde::ser::{Serialize, Serializer};

use crate::math::format::format_number;
use crate::primitives::errors::MatcalcError;

// ============================================================================
// Matrix
// ============================================================================

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Float> Matrix<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a matrix from nested rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatcalcError> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };

        let cols = first.as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatcalcError::RaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        if cols == 0 {
            return Ok(Self::empty());
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Create a matrix from a row-major buffer.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatcalcError> {
        if data.len() != rows * cols {
            return Err(MatcalcError::DimensionMismatch {
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        if rows == 0 || cols == 0 {
            return Ok(Self::empty());
        }
        Ok(Self { data, rows, cols })
    }

    /// The empty (0x0) matrix.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Matrix of the given shape filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    // ========================================================================
    // Shape
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True for the 0x0 matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// True when `rows == cols` and the matrix is not empty.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows > 0 && self.rows == self.cols
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Entry at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row `row` as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Row `row` as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterator over rows.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// True if every entry in `row` is exactly zero.
    pub fn is_zero_row(&self, row: usize) -> bool {
        self.row(row).iter().all(|v| v.is_zero())
    }

    // ========================================================================
    // Row Operations
    // ========================================================================

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let cols = self.cols;
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Divide every entry of `row` by `divisor`.
    pub fn divide_row(&mut self, row: usize, divisor: T) {
        for v in self.row_mut(row) {
            *v = *v / divisor;
        }
    }

    /// `row[target] -= factor * row[source]`.
    pub fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        if target == source {
            return;
        }
        for k in 0..self.cols {
            let s = self.data[source * self.cols + k];
            let t = &mut self.data[target * self.cols + k];
            *t = *t - factor * s;
        }
    }

    /// Apply `f` to every cell, producing a new matrix of the same shape.
    pub fn map(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Position of the first non-finite cell, if any.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|idx| (idx / self.cols, idx % self.cols))
    }

    /// True if every pair of cells differs by at most `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Float> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatcalcError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

// Serialized as nested rows so JSON output mirrors the input notation.
impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let cols = self.cols;
        serializer.collect_seq((0..self.rows).map(|i| &self.data[i * cols..(i + 1) * cols]))
    }
}

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }

        let cells: Vec<String> = self.data.iter().map(|&v| format_number(v)).collect();
        let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(1);

        for i in 0..self.rows {
            write!(f, "  [")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cells[i * self.cols + j], width = width)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
