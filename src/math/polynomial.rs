//! Dense univariate polynomial helpers.
//!
//! Coefficients are stored highest degree first, matching the layout of
//! characteristic polynomial results.

use num_traits::Float;

/// Evaluate the polynomial at `x` using Horner's scheme.
#[inline]
pub fn evaluate<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

/// Divide every coefficient by the leading one.
///
/// Returns `None` when the leading coefficient is zero or the slice is empty.
pub fn normalize<T: Float>(coefficients: &[T]) -> Option<Vec<T>> {
    let &lead = coefficients.first()?;
    if lead.is_zero() {
        return None;
    }
    Some(coefficients.iter().map(|&c| c / lead).collect())
}

/// Cauchy bound `1 + max |c_i / c_0|` over the non-leading coefficients.
///
/// Every real (and complex) root lies in `[-radius, radius]`.
pub fn cauchy_radius<T: Float>(coefficients: &[T]) -> Option<T> {
    let monic = normalize(coefficients)?;
    let max_ratio = monic
        .iter()
        .skip(1)
        .fold(T::zero(), |acc, &c| acc.max(c.abs()));
    Some(T::one() + max_ratio)
}
