//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer sits between the numeric algorithms and the public API:
//! - Validation of inputs and configuration
//! - Text rendering of result records
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and configuration validation.
pub mod validator;

/// `Display` implementations for result records.
pub mod output;
