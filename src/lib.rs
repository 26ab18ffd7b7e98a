//! # matcalc-rs — Elementary Linear Algebra Kernel
//!
//! A small, dependable numeric kernel for an educational linear algebra
//! calculator: Gaussian and Gauss–Jordan elimination, rank, inverse,
//! triangular structure, symmetric/skew decomposition, and characteristic
//! polynomials with real eigenvalues for 2x2 and 3x3 matrices.
//!
//! ## What is in the kernel?
//!
//! - **Row echelon form and rank**: left-to-right, top-to-bottom elimination
//!   with leading ones, eliminating below each pivot only.
//! - **Inverse**: full Gauss–Jordan elimination on `[A | I]`. A singular
//!   matrix is a normal outcome (`None`), not an error.
//! - **Structure**: upper/lower/diagonal classification with a tolerance,
//!   and `A = S + K` with `S` symmetric and `K` skew-symmetric.
//! - **Spectrum**: `det(λI - A)` from trace, `tr(A²)` and determinant; the
//!   quadratic formula for 2x2, sampling plus bisection for the 3x3 cubic.
//!
//! The domain is small, hand-entered matrices (up to about 8x8 for rank and
//! inverse, 2x2 and 3x3 for eigenvalues). Arithmetic is floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use matcalc_rs::prelude::*;
//!
//! let a = Matrix::from_rows(&[[2.0, 1.0, -1.0], [0.0, 3.0, 4.0], [0.0, 0.0, 5.0]])?;
//!
//! assert_eq!(rank(&a), 3);
//! assert_eq!(classify_triangular(&a, None), TriangularType::Upper);
//!
//! let inv = inverse(&a).expect("upper triangular with non-zero diagonal");
//! assert_eq!(classify_triangular(&inv, None), TriangularType::Upper);
//!
//! let spectrum = characteristic_polynomial(&Matrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]])?)?;
//! assert_eq!(spectrum.formatted_polynomial, "λ^2 - 4λ + 3");
//! assert_eq!(spectrum.eigenvalues, vec![1.0, 3.0]);
//! # Result::<(), MatcalcError>::Ok(())
//! ```
//!
//! ### Configured kernel
//!
//! ```rust
//! use matcalc_rs::prelude::*;
//!
//! let kernel = Kernel::new()
//!     .triangular_tolerance(1e-8)   // Off-triangle entries treated as zero
//!     .sample_steps(400)            // Finer sampling for cubic roots
//!     .bisection_iterations(60)     // More refinement per root
//!     .build()?;
//!
//! let a = Matrix::from_rows(&[[3.0, 1.0, 2.0], [0.0, 4.0, 1.0], [0.0, 0.0, -1.0]])?;
//! let result = kernel.characteristic_polynomial(&a)?;
//! println!("{}", result);
//! # Result::<(), MatcalcError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Size:       3x3
//!   p(λ) =      λ^3 - 6λ^2 + 5λ + 12
//!   Eigenvalues: -1, 3, 4
//! ```
//!
//! ### Result and Error Handling
//!
//! Operations with a shape precondition return `Result<_, MatcalcError>`:
//!
//! - **`decompose_symmetric_skew`** requires a square matrix.
//! - **`multiply`** requires `cols(A) == rows(B)`.
//! - **`characteristic_polynomial`** requires a square 2x2 or 3x3 matrix.
//!
//! Everything else is total. A singular matrix is reported through
//! `Option`/`has_inverse`, so branch on the value rather than the error:
//!
//! ```rust
//! use matcalc_rs::prelude::*;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
//! let result = rank_and_inverse(&a);
//!
//! assert_eq!(result.rank, 1);
//! assert!(result.is_square);
//! assert!(!result.has_inverse);
//!
//! match multiply(&a, &Matrix::from_rows(&[[1.0, 2.0, 3.0]])?) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => eprintln!("Multiplication failed: {}", e),
//! }
//! # Result::<(), MatcalcError>::Ok(())
//! ```
//!
//! ## Known limitations
//!
//! The cubic root finder samples the Cauchy bracket and bisects sign
//! changes. A repeated root that touches zero without crossing it is found
//! only if a sample lands close enough to it; multiplicities are never
//! reported. Complex eigenvalues are out of scope.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures.
//
// Contains the validated `Matrix` type and the error enum.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains elementary matrix arithmetic, polynomial evaluation and
// number/polynomial rendering.
mod math;

// Layer 3: Algorithms - the numeric kernel.
//
// Contains the shared elimination loop, echelon form, inversion,
// structural classification, root isolation and eigenvalues.
mod algorithms;

// Layer 4: Engine - validation and result rendering.
mod engine;

// High-level API: free functions and the `Kernel` builder.
mod api;

/// Built-in example matrices.
pub mod presets;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types and functions:
///
/// ```
/// use matcalc_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CharacteristicPolynomialResult, Kernel, KernelBuilder, MatcalcError, Matrix,
        MatrixDecompositionResult, RankAndInverseResult, RootFinder, RowEchelonResult,
        TriangularAnalysis, TriangularType, classify_triangular, characteristic_polynomial,
        decompose_symmetric_skew, inverse, multiply, rank, rank_and_inverse, row_echelon,
    };
    pub use crate::math::format::{format_number, format_polynomial};
    pub use crate::math::ops::{add, scale, subtract, transpose};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal numeric kernel.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation and rendering.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
