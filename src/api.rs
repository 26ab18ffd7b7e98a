//! High-level API for the matrix kernel.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points:
//! - Free functions for every kernel operation with default settings.
//! - A fluent [`KernelBuilder`] that configures tolerances and root finder
//!   limits once and yields an immutable [`Kernel`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called, and
//!   a [`Kernel`] rejects non-finite cells before computing.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Stateless**: A [`Kernel`] is plain configuration (`Copy`); no call
//!   affects another.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KernelBuilder`] via `Kernel::new()`.
//! 2. Chain configuration methods (`.triangular_tolerance()`, `.sample_steps()`, etc.).
//! 3. Call `.build()` to validate and obtain a [`Kernel`].

use core::fmt::Debug;

use num_traits::Float;
use tracing::debug;

use crate::algorithms::echelon::{self, to_row_echelon_form, to_row_echelon_form_with};
use crate::algorithms::eigen::{
    compute_characteristic_polynomial_and_eigenvalues, compute_characteristic_polynomial_with,
};
use crate::algorithms::inverse::{
    compute_inverse_gauss, compute_inverse_gauss_with, compute_rank_and_inverse,
    compute_rank_and_inverse_with,
};
use crate::algorithms::roots::{
    DEFAULT_BISECTION_ITERATIONS, DEFAULT_MERGE_TOLERANCE, DEFAULT_SAMPLE_STEPS,
    DEFAULT_ZERO_TOLERANCE,
};
use crate::algorithms::structure::{self, DEFAULT_TRIANGULAR_TOLERANCE};
use crate::engine::validator::Validator;
use crate::math::ops::{self, constant};

// Publicly re-exported types
pub use crate::algorithms::echelon::RowEchelonResult;
pub use crate::algorithms::eigen::CharacteristicPolynomialResult;
pub use crate::algorithms::inverse::RankAndInverseResult;
pub use crate::algorithms::roots::RootFinder;
pub use crate::algorithms::structure::{
    MatrixDecompositionResult, TriangularAnalysis, TriangularType,
};
pub use crate::primitives::errors::MatcalcError;
pub use crate::primitives::matrix::Matrix;

// ============================================================================
// Free Functions
// ============================================================================

/// Row echelon form and rank. Never fails.
pub fn row_echelon<T: Float>(matrix: &Matrix<T>) -> RowEchelonResult<T> {
    to_row_echelon_form(matrix)
}

/// Rank. Never fails.
pub fn rank<T: Float>(matrix: &Matrix<T>) -> usize {
    echelon::rank(matrix)
}

/// Inverse, or `None` for singular or non-square input.
pub fn inverse<T: Float>(matrix: &Matrix<T>) -> Option<Matrix<T>> {
    compute_inverse_gauss(matrix)
}

/// Echelon form, rank and inverse in one record. Never fails.
pub fn rank_and_inverse<T: Float>(matrix: &Matrix<T>) -> RankAndInverseResult<T> {
    compute_rank_and_inverse(matrix)
}

/// Symmetric and skew-symmetric parts. Fails unless square.
pub fn decompose_symmetric_skew<T: Float>(
    matrix: &Matrix<T>,
) -> Result<MatrixDecompositionResult<T>, MatcalcError> {
    structure::decompose_into_symmetric_and_skew(matrix)
}

/// Matrix product. Fails iff `cols(a) != rows(b)`.
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatcalcError> {
    ops::multiply(a, b)
}

/// Triangular type, with `tolerance` defaulting to `1e-10`. Never fails.
pub fn classify_triangular<T: Float>(matrix: &Matrix<T>, tolerance: Option<T>) -> TriangularType {
    let tolerance = tolerance.unwrap_or_else(|| constant(DEFAULT_TRIANGULAR_TOLERANCE));
    structure::classify_triangular(matrix, tolerance)
}

/// Characteristic polynomial and real eigenvalues. Fails unless square of size 2 or 3.
pub fn characteristic_polynomial<T: Float>(
    matrix: &Matrix<T>,
) -> Result<CharacteristicPolynomialResult<T>, MatcalcError> {
    compute_characteristic_polynomial_and_eigenvalues(matrix)
}

// ============================================================================
// Kernel Builder
// ============================================================================

/// Fluent builder for a configured [`Kernel`].
#[derive(Debug, Clone)]
pub struct KernelBuilder<T: Float> {
    /// Off-triangle magnitude treated as zero (default: 1e-10).
    pub triangular_tolerance: Option<T>,

    /// Magnitude at or below which an entry cannot be a pivot (default: 0).
    pub pivot_tolerance: Option<T>,

    /// Root finder sampling steps (default: 200).
    pub sample_steps: Option<usize>,

    /// Root finder bisection rounds (default: 40).
    pub bisection_iterations: Option<usize>,

    /// Polynomial value treated as zero (default: 1e-6).
    pub zero_tolerance: Option<T>,

    /// Distance below which roots are merged (default: 1e-4).
    pub merge_tolerance: Option<T>,

    /// Reject NaN/infinite cells before computing (default: true).
    pub check_finite: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KernelBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KernelBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            triangular_tolerance: None,
            pivot_tolerance: None,
            sample_steps: None,
            bisection_iterations: None,
            zero_tolerance: None,
            merge_tolerance: None,
            check_finite: None,
            duplicate_param: None,
        }
    }

    /// Set the tolerance for triangular classification.
    pub fn triangular_tolerance(mut self, tolerance: T) -> Self {
        if self.triangular_tolerance.is_some() {
            self.duplicate_param = Some("triangular_tolerance");
        }
        self.triangular_tolerance = Some(tolerance);
        self
    }

    /// Set the pivot tolerance used by elimination.
    pub fn pivot_tolerance(mut self, tolerance: T) -> Self {
        if self.pivot_tolerance.is_some() {
            self.duplicate_param = Some("pivot_tolerance");
        }
        self.pivot_tolerance = Some(tolerance);
        self
    }

    /// Set the number of root finder sampling steps.
    pub fn sample_steps(mut self, steps: usize) -> Self {
        if self.sample_steps.is_some() {
            self.duplicate_param = Some("sample_steps");
        }
        self.sample_steps = Some(steps);
        self
    }

    /// Set the number of bisection rounds per root.
    pub fn bisection_iterations(mut self, iterations: usize) -> Self {
        if self.bisection_iterations.is_some() {
            self.duplicate_param = Some("bisection_iterations");
        }
        self.bisection_iterations = Some(iterations);
        self
    }

    /// Set the magnitude below which a polynomial value counts as zero.
    pub fn zero_tolerance(mut self, tolerance: T) -> Self {
        if self.zero_tolerance.is_some() {
            self.duplicate_param = Some("zero_tolerance");
        }
        self.zero_tolerance = Some(tolerance);
        self
    }

    /// Set the distance below which two roots are merged.
    pub fn merge_tolerance(mut self, tolerance: T) -> Self {
        if self.merge_tolerance.is_some() {
            self.duplicate_param = Some("merge_tolerance");
        }
        self.merge_tolerance = Some(tolerance);
        self
    }

    /// Enable or disable the finite-cell check.
    pub fn check_finite(mut self, enabled: bool) -> Self {
        if self.check_finite.is_some() {
            self.duplicate_param = Some("check_finite");
        }
        self.check_finite = Some(enabled);
        self
    }

    /// Validate the configuration and build a [`Kernel`].
    pub fn build(self) -> Result<Kernel<T>, MatcalcError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let triangular_tolerance = self
            .triangular_tolerance
            .unwrap_or_else(|| constant(DEFAULT_TRIANGULAR_TOLERANCE));
        let pivot_tolerance = self.pivot_tolerance.unwrap_or_else(T::zero);
        let finder = RootFinder {
            sample_steps: self.sample_steps.unwrap_or(DEFAULT_SAMPLE_STEPS),
            bisection_iterations: self
                .bisection_iterations
                .unwrap_or(DEFAULT_BISECTION_ITERATIONS),
            zero_tolerance: self
                .zero_tolerance
                .unwrap_or_else(|| constant(DEFAULT_ZERO_TOLERANCE)),
            merge_tolerance: self
                .merge_tolerance
                .unwrap_or_else(|| constant(DEFAULT_MERGE_TOLERANCE)),
        };

        Validator::validate_tolerance(triangular_tolerance, "triangular_tolerance")?;
        Validator::validate_tolerance(pivot_tolerance, "pivot_tolerance")?;
        Validator::validate_tolerance(finder.zero_tolerance, "zero_tolerance")?;
        Validator::validate_tolerance(finder.merge_tolerance, "merge_tolerance")?;
        Validator::validate_sample_steps(finder.sample_steps)?;
        Validator::validate_bisection_iterations(finder.bisection_iterations)?;

        Ok(Kernel {
            triangular_tolerance,
            pivot_tolerance,
            finder,
            check_finite: self.check_finite.unwrap_or(true),
        })
    }
}

// ============================================================================
// Kernel
// ============================================================================

/// Configured, immutable matrix kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel<T> {
    triangular_tolerance: T,
    pivot_tolerance: T,
    finder: RootFinder<T>,
    check_finite: bool,
}

impl<T: Float + Debug> Kernel<T> {
    /// Start configuring a kernel.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> KernelBuilder<T> {
        KernelBuilder::new()
    }

    /// Tolerance used for triangular classification.
    pub fn triangular_tolerance(&self) -> T {
        self.triangular_tolerance
    }

    /// Pivot tolerance used by elimination.
    pub fn pivot_tolerance(&self) -> T {
        self.pivot_tolerance
    }

    /// Root finder used for cubic characteristic polynomials.
    pub fn root_finder(&self) -> &RootFinder<T> {
        &self.finder
    }

    fn check(
        &self,
        matrix: &Matrix<T>,
        name: &str,
        op: &'static str,
    ) -> Result<(), MatcalcError> {
        debug!(op, rows = matrix.rows(), cols = matrix.cols(), "kernel call");
        if self.check_finite {
            Validator::validate_finite(matrix, name)?;
        }
        Ok(())
    }

    // ========================================================================
    // Elimination
    // ========================================================================

    /// Row echelon form and rank.
    pub fn row_echelon(&self, matrix: &Matrix<T>) -> Result<RowEchelonResult<T>, MatcalcError> {
        self.check(matrix, "A", "row_echelon")?;
        Ok(to_row_echelon_form_with(matrix, self.pivot_tolerance))
    }

    /// Rank.
    pub fn rank(&self, matrix: &Matrix<T>) -> Result<usize, MatcalcError> {
        Ok(self.row_echelon(matrix)?.rank)
    }

    /// Inverse, `Ok(None)` for singular or non-square input.
    pub fn inverse(&self, matrix: &Matrix<T>) -> Result<Option<Matrix<T>>, MatcalcError> {
        self.check(matrix, "A", "inverse")?;
        Ok(compute_inverse_gauss_with(matrix, self.pivot_tolerance))
    }

    /// Echelon form, rank and inverse in one record.
    pub fn rank_and_inverse(
        &self,
        matrix: &Matrix<T>,
    ) -> Result<RankAndInverseResult<T>, MatcalcError> {
        self.check(matrix, "A", "rank_and_inverse")?;
        Ok(compute_rank_and_inverse_with(matrix, self.pivot_tolerance))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Matrix product.
    pub fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatcalcError> {
        self.check(a, "A", "multiply")?;
        self.check(b, "B", "multiply")?;
        ops::multiply(a, b)
    }

    /// Element-wise sum.
    pub fn add(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatcalcError> {
        self.check(a, "A", "add")?;
        self.check(b, "B", "add")?;
        ops::add(a, b)
    }

    /// Element-wise difference.
    pub fn subtract(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatcalcError> {
        self.check(a, "A", "subtract")?;
        self.check(b, "B", "subtract")?;
        ops::subtract(a, b)
    }

    // ========================================================================
    // Structure
    // ========================================================================

    /// Triangular type using the configured tolerance.
    pub fn classify_triangular(&self, matrix: &Matrix<T>) -> Result<TriangularType, MatcalcError> {
        self.check(matrix, "A", "classify_triangular")?;
        Ok(structure::classify_triangular(
            matrix,
            self.triangular_tolerance,
        ))
    }

    /// Symmetric and skew-symmetric parts.
    pub fn decompose_symmetric_skew(
        &self,
        matrix: &Matrix<T>,
    ) -> Result<MatrixDecompositionResult<T>, MatcalcError> {
        self.check(matrix, "A", "decompose_symmetric_skew")?;
        structure::decompose_into_symmetric_and_skew(matrix)
    }

    /// Triangular types of `A`, `B`, `A⁻¹` and `A·B`.
    pub fn analyze_triangular(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<TriangularAnalysis<T>, MatcalcError> {
        self.check(a, "A", "analyze_triangular")?;
        self.check(b, "B", "analyze_triangular")?;
        Ok(structure::analyze_triangular(
            a,
            b,
            self.triangular_tolerance,
            self.pivot_tolerance,
        ))
    }

    // ========================================================================
    // Spectrum
    // ========================================================================

    /// Characteristic polynomial and real eigenvalues (2x2 or 3x3).
    pub fn characteristic_polynomial(
        &self,
        matrix: &Matrix<T>,
    ) -> Result<CharacteristicPolynomialResult<T>, MatcalcError> {
        self.check(matrix, "A", "characteristic_polynomial")?;
        compute_characteristic_polynomial_with(matrix, &self.finder)
    }
}
