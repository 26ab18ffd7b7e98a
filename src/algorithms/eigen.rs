//! Characteristic polynomial and real eigenvalues of 2x2 and 3x3 matrices.
//!
//! ## Purpose
//!
//! This module computes `det(λI - A)` for small square matrices from
//! matrix invariants and extracts its real roots.
//!
//! ## Design notes
//!
//! * **2x2**: `λ² - Tλ + D` with `T = a + d`, `D = ad - bc`. Real roots come
//!   from the quadratic formula when the discriminant `T² - 4D` is
//!   non-negative; both roots are reported even when they coincide.
//! * **3x3**: `λ³ - Tλ² + ½(T² - tr(A²))λ - det(A)`, with the determinant
//!   by cofactor expansion along the first row. Roots come from
//!   [`RootFinder`].
//! * **Ordering**: Eigenvalues are always returned in ascending order.
//!
//! ## Invariants
//!
//! * `coefficients.len() == size + 1` and `coefficients[0] == 1`.
//! * `eigenvalues.len() <= size`.
//! * `has_real_eigenvalues == !eigenvalues.is_empty()`.
//!
//! ## Non-goals
//!
//! * Sizes other than 2 and 3.
//! * Complex eigenvalues.

use num_traits::Float;
use serde::Serialize;
use tracing::debug;

use crate::algorithms::roots::RootFinder;
use crate::math::format::{LAMBDA, format_polynomial};
use crate::math::ops::{constant, ensure_square, multiply, small_determinant, trace};
use crate::primitives::errors::MatcalcError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Result
// ============================================================================

/// Characteristic polynomial and real eigenvalues of a 2x2 or 3x3 matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicPolynomialResult<T> {
    /// Matrix size (2 or 3).
    pub size: usize,

    /// Polynomial coefficients, highest degree first.
    pub coefficients: Vec<T>,

    /// Rendered polynomial, e.g. `λ^2 - 4λ + 3`.
    pub formatted_polynomial: String,

    /// Real eigenvalues in ascending order.
    pub eigenvalues: Vec<T>,

    /// Whether at least one real eigenvalue was found.
    pub has_real_eigenvalues: bool,
}

// ============================================================================
// Operations
// ============================================================================

/// Coefficients of the characteristic polynomial, highest degree first.
pub fn characteristic_coefficients<T: Float>(matrix: &Matrix<T>) -> Result<Vec<T>, MatcalcError> {
    ensure_square(matrix)?;

    let t = trace(matrix)?;
    match matrix.rows() {
        2 => {
            let d = small_determinant(matrix)?;
            Ok(vec![T::one(), -t, d])
        }
        3 => {
            let trace_of_square = trace(&multiply(matrix, matrix)?)?;
            let c1 = (t * t - trace_of_square) * constant(0.5);
            let d = small_determinant(matrix)?;
            Ok(vec![T::one(), -t, c1, -d])
        }
        n => Err(MatcalcError::UnsupportedSize {
            size: n,
            supported: "2, 3",
        }),
    }
}

/// Real roots of `λ² - tλ + d`, ascending. Empty when the discriminant is negative.
pub fn quadratic_real_roots<T: Float>(t: T, d: T) -> Vec<T> {
    let two = constant::<T>(2.0);
    let discriminant = t * t - constant::<T>(4.0) * d;
    if discriminant < T::zero() {
        return Vec::new();
    }

    let root = discriminant.sqrt();
    let (lambda1, lambda2) = ((t + root) / two, (t - root) / two);
    if lambda1 <= lambda2 {
        vec![lambda1, lambda2]
    } else {
        vec![lambda2, lambda1]
    }
}

/// Characteristic polynomial and eigenvalues with the default root finder.
pub fn compute_characteristic_polynomial_and_eigenvalues<T: Float>(
    matrix: &Matrix<T>,
) -> Result<CharacteristicPolynomialResult<T>, MatcalcError> {
    compute_characteristic_polynomial_with(matrix, &RootFinder::default())
}

/// Characteristic polynomial and eigenvalues with an explicit root finder
/// for the cubic case.
pub fn compute_characteristic_polynomial_with<T: Float>(
    matrix: &Matrix<T>,
    finder: &RootFinder<T>,
) -> Result<CharacteristicPolynomialResult<T>, MatcalcError> {
    let coefficients = characteristic_coefficients(matrix)?;
    let size = matrix.rows();

    let eigenvalues = if size == 2 {
        // λ² + c1·λ + c0 with c1 = -T, c0 = D
        quadratic_real_roots(-coefficients[1], coefficients[2])
    } else {
        finder.find_real_roots(&coefficients)
    };
    debug!(
        size,
        eigenvalues = eigenvalues.len(),
        "characteristic polynomial"
    );

    Ok(CharacteristicPolynomialResult {
        size,
        formatted_polynomial: format_polynomial(&coefficients, LAMBDA),
        has_real_eigenvalues: !eigenvalues.is_empty(),
        coefficients,
        eigenvalues,
    })
}
