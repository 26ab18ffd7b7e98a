//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures shared by every
//! other layer:
//! - The validated dense [`matrix::Matrix`] value type
//! - The crate error type
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Dense matrix value type.
pub mod matrix;
