//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the numeric kernel:
//! - A shared Gaussian elimination loop
//! - Row echelon form and rank
//! - Gauss–Jordan inversion
//! - Triangular classification and symmetric/skew decomposition
//! - Characteristic polynomials and real eigenvalues (2x2, 3x3)
//! - Sampling-plus-bisection real root isolation
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Shared pivoting loop.
pub mod elimination;

/// Row echelon form and rank.
pub mod echelon;

/// Gauss–Jordan inversion.
pub mod inverse;

/// Triangularity and symmetric/skew decomposition.
pub mod structure;

/// Real root isolation.
pub mod roots;

/// Characteristic polynomial and eigenvalues.
pub mod eigen;
