//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the algorithms:
//! - Elementary matrix arithmetic (transpose, add, multiply, trace, ...)
//! - Polynomial evaluation and root bounds
//! - Rendering of numbers and polynomials
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Elementary matrix arithmetic.
pub mod ops;

/// Polynomial evaluation and Cauchy root bound.
pub mod polynomial;

/// Number and polynomial rendering.
pub mod format;
