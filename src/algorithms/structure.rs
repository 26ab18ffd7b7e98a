//! Structural classification of square matrices.
//!
//! ## Purpose
//!
//! This module answers structural questions about a matrix: is it upper
//! triangular, lower triangular, diagonal, and what are its symmetric and
//! skew-symmetric parts. It also bundles the triangular analysis of a pair
//! of matrices (types of `A`, `B`, `A⁻¹` and `A·B`).
//!
//! ## Design notes
//!
//! * **Tolerance**: Off-triangle entries with `|x| <= tolerance` count as
//!   zero. The default is `1e-10`.
//! * **Non-square input**: Never triangular, so it always classifies as
//!   [`TriangularType::None`].
//!
//! ## Invariants
//!
//! * `symmetric + skew_symmetric == A`.
//! * `symmetric == transpose(symmetric)`.
//! * `skew_symmetric == -transpose(skew_symmetric)`.

use core::fmt;

use num_traits::Float;
use serde::Serialize;
use tracing::debug;

use crate::algorithms::inverse::compute_inverse_gauss_with;
use crate::math::ops::{add, constant, ensure_square, multiply, scale, subtract, transpose};
use crate::primitives::errors::MatcalcError;
use crate::primitives::matrix::Matrix;

/// Default tolerance for triangular classification.
pub const DEFAULT_TRIANGULAR_TOLERANCE: f64 = 1e-10;

// ============================================================================
// Triangular Type
// ============================================================================

/// Triangular shape of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangularType {
    /// Neither upper nor lower triangular (or not square).
    #[default]
    None,

    /// Zero below the main diagonal.
    Upper,

    /// Zero above the main diagonal.
    Lower,

    /// Both upper and lower triangular, i.e. diagonal.
    Both,
}

impl TriangularType {
    /// Short description used in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "not triangular",
            Self::Upper => "upper triangular",
            Self::Lower => "lower triangular",
            Self::Both => "diagonal (upper and lower triangular)",
        }
    }
}

impl fmt::Display for TriangularType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Classification
// ============================================================================

/// True if every entry strictly below the diagonal is within `tolerance` of zero.
pub fn is_upper_triangular<T: Float>(matrix: &Matrix<T>, tolerance: T) -> bool {
    matrix.is_square()
        && (1..matrix.rows()).all(|i| (0..i).all(|j| matrix[(i, j)].abs() <= tolerance))
}

/// True if every entry strictly above the diagonal is within `tolerance` of zero.
pub fn is_lower_triangular<T: Float>(matrix: &Matrix<T>, tolerance: T) -> bool {
    matrix.is_square()
        && (0..matrix.rows())
            .all(|i| (i + 1..matrix.cols()).all(|j| matrix[(i, j)].abs() <= tolerance))
}

/// Combine the upper and lower checks into a [`TriangularType`].
pub fn classify_triangular<T: Float>(matrix: &Matrix<T>, tolerance: T) -> TriangularType {
    match (
        is_upper_triangular(matrix, tolerance),
        is_lower_triangular(matrix, tolerance),
    ) {
        (true, true) => TriangularType::Both,
        (true, false) => TriangularType::Upper,
        (false, true) => TriangularType::Lower,
        (false, false) => TriangularType::None,
    }
}

// ============================================================================
// Symmetric / Skew Decomposition
// ============================================================================

/// Symmetric and skew-symmetric parts of a square matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixDecompositionResult<T> {
    /// `(A + Aᵗ) / 2`.
    pub symmetric: Matrix<T>,

    /// `(A - Aᵗ) / 2`.
    pub skew_symmetric: Matrix<T>,
}

/// Split `matrix` into `S = (A + Aᵗ)/2` and `K = (A - Aᵗ)/2`.
pub fn decompose_into_symmetric_and_skew<T: Float>(
    matrix: &Matrix<T>,
) -> Result<MatrixDecompositionResult<T>, MatcalcError> {
    ensure_square(matrix)?;

    let half = constant::<T>(0.5);
    let transposed = transpose(matrix);
    let symmetric = scale(&add(matrix, &transposed)?, half);
    let skew_symmetric = scale(&subtract(matrix, &transposed)?, half);

    Ok(MatrixDecompositionResult {
        symmetric,
        skew_symmetric,
    })
}

// ============================================================================
// Triangular Analysis
// ============================================================================

/// Triangular types of `A`, `B`, `A⁻¹` and `A·B`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangularAnalysis<T> {
    /// Number of rows of `A`.
    pub size: usize,

    /// Type of `A`.
    pub a_type: TriangularType,

    /// Type of `B`.
    pub b_type: TriangularType,

    /// Whether `A` is invertible.
    pub inverse_exists: bool,

    /// `A⁻¹`, when it exists.
    pub inverse_a: Option<Matrix<T>>,

    /// Type of `A⁻¹`, when it exists.
    pub inverse_a_type: Option<TriangularType>,

    /// `A·B`, when the shapes allow the product.
    pub product: Option<Matrix<T>>,

    /// Type of `A·B`, when the product exists.
    pub product_type: Option<TriangularType>,
}

/// Classify `a`, `b`, the inverse of `a` and the product `a·b`.
///
/// An incompatible product is not an error; the product fields are `None`.
pub fn analyze_triangular<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    tolerance: T,
    pivot_tolerance: T,
) -> TriangularAnalysis<T> {
    let inverse_a = compute_inverse_gauss_with(a, pivot_tolerance);
    let inverse_a_type = inverse_a
        .as_ref()
        .map(|inv| classify_triangular(inv, tolerance));

    let product = match multiply(a, b) {
        Ok(p) => Some(p),
        Err(err) => {
            debug!(%err, "product skipped");
            None
        }
    };
    let product_type = product.as_ref().map(|p| classify_triangular(p, tolerance));

    TriangularAnalysis {
        size: a.rows(),
        a_type: classify_triangular(a, tolerance),
        b_type: classify_triangular(b, tolerance),
        inverse_exists: inverse_a.is_some(),
        inverse_a,
        inverse_a_type,
        product,
        product_type,
    }
}
