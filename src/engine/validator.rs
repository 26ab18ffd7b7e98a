//! Input validation for kernel configuration and matrices.
//!
//! ## Purpose
//!
//! This module provides the validation functions run by the [`Kernel`]
//! builder and before each kernel operation: finite cells, tolerance
//! bounds, root finder limits and duplicate builder parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check operation-specific shape preconditions;
//!   those are raised by the operations themselves.
//! * This module does not correct invalid inputs.
//!
//! [`Kernel`]: crate::api::Kernel

use num_traits::Float;

use crate::primitives::errors::MatcalcError;
use crate::primitives::matrix::Matrix;

/// Upper bound on sampling steps for the root finder.
const MAX_SAMPLE_STEPS: usize = 100_000;

/// Upper bound on bisection rounds per root.
const MAX_BISECTION_ITERATIONS: usize = 200;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel configuration and input matrices.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Reject matrices containing NaN or infinite cells.
    pub fn validate_finite<T: Float>(matrix: &Matrix<T>, name: &str) -> Result<(), MatcalcError> {
        if let Some((row, col)) = matrix.first_non_finite() {
            return Err(MatcalcError::InvalidNumericValue(format!(
                "{}[{}][{}]={}",
                name,
                row,
                col,
                matrix[(row, col)].to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a non-negative, finite tolerance.
    pub fn validate_tolerance<T: Float>(
        value: T,
        parameter: &'static str,
    ) -> Result<(), MatcalcError> {
        if !value.is_finite() || value < T::zero() {
            return Err(MatcalcError::InvalidTolerance {
                parameter,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the number of sampling steps of the root finder.
    pub fn validate_sample_steps(steps: usize) -> Result<(), MatcalcError> {
        if !(2..=MAX_SAMPLE_STEPS).contains(&steps) {
            return Err(MatcalcError::InvalidSampleSteps(steps));
        }
        Ok(())
    }

    /// Validate the number of bisection rounds of the root finder.
    pub fn validate_bisection_iterations(iterations: usize) -> Result<(), MatcalcError> {
        if !(1..=MAX_BISECTION_ITERATIONS).contains(&iterations) {
            return Err(MatcalcError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), MatcalcError> {
        if let Some(parameter) = duplicate_param {
            return Err(MatcalcError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
