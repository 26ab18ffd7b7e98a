//! Real root isolation by sampling and bisection.
//!
//! ## Purpose
//!
//! This module finds the real roots of a polynomial (in practice the
//! characteristic cubic of a 3x3 matrix) without a closed-form solver.
//!
//! ## Design notes
//!
//! * **Bracket**: All roots lie in `[-radius, radius]` with the Cauchy
//!   bound `radius = 1 + max |c_i / c_0|`.
//! * **Sampling**: The bracket is split into `sample_steps` equal steps.
//!   A sample whose value is within `zero_tolerance` of zero is a root.
//! * **Refinement**: Each sign change between adjacent samples is bisected
//!   for `bisection_iterations` rounds, or until the midpoint value is
//!   within `zero_tolerance` of zero.
//! * **Merging**: Roots closer than `merge_tolerance` to an already kept
//!   root are dropped (first one wins); the rest are sorted ascending.
//!
//! ## Key concepts
//!
//! * **Heuristic**: A root of even multiplicity that touches zero between
//!   samples without crossing it produces no sign change and is missed
//!   unless a sample lands within `zero_tolerance` of it. Multiplicities
//!   are never reported.
//!
//! ## Invariants
//!
//! * Returned roots are strictly increasing and pairwise at least
//!   `merge_tolerance` apart.
//! * Work is bounded by `sample_steps + 1` samples plus
//!   `bisection_iterations` evaluations per sign change.

use core::cmp::Ordering::Equal;

use num_traits::Float;
use tracing::debug;

use crate::math::ops::constant;
use crate::math::polynomial::{cauchy_radius, evaluate, normalize};

/// Default number of sampling steps across the Cauchy bracket.
pub const DEFAULT_SAMPLE_STEPS: usize = 200;

/// Default number of bisection rounds per sign change.
pub const DEFAULT_BISECTION_ITERATIONS: usize = 40;

/// Default magnitude below which a polynomial value counts as zero.
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-6;

/// Default distance below which two roots are merged.
pub const DEFAULT_MERGE_TOLERANCE: f64 = 1e-4;

// ============================================================================
// Root Finder
// ============================================================================

/// Sampling-plus-bisection real root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFinder<T> {
    /// Number of equal steps across `[-radius, radius]`.
    pub sample_steps: usize,

    /// Maximum bisection rounds per bracketed root.
    pub bisection_iterations: usize,

    /// Values with magnitude below this are treated as zero.
    pub zero_tolerance: T,

    /// Roots closer than this are merged.
    pub merge_tolerance: T,
}

impl<T: Float> Default for RootFinder<T> {
    fn default() -> Self {
        Self {
            sample_steps: DEFAULT_SAMPLE_STEPS,
            bisection_iterations: DEFAULT_BISECTION_ITERATIONS,
            zero_tolerance: constant(DEFAULT_ZERO_TOLERANCE),
            merge_tolerance: constant(DEFAULT_MERGE_TOLERANCE),
        }
    }
}

impl<T: Float> RootFinder<T> {
    /// Real roots of the polynomial with the given coefficients (highest
    /// degree first), sorted ascending.
    ///
    /// Returns an empty vector when the leading coefficient is zero.
    pub fn find_real_roots(&self, coefficients: &[T]) -> Vec<T> {
        let Some(monic) = normalize(coefficients) else {
            return Vec::new();
        };
        let Some(radius) = cauchy_radius(&monic) else {
            return Vec::new();
        };

        let steps = self.sample_steps.max(1);
        let step = (radius + radius) / constant(steps as f64);

        let mut candidates = Vec::new();
        let mut previous: Option<(T, T)> = None;

        for i in 0..=steps {
            let x = -radius + step * constant(i as f64);
            let fx = evaluate(&monic, x);

            if fx.abs() < self.zero_tolerance {
                candidates.push(x);
            }
            if let Some((px, pfx)) = previous {
                if pfx * fx < T::zero() {
                    candidates.push(self.bisect(&monic, px, x));
                }
            }
            previous = Some((x, fx));
        }

        let roots = self.merge(candidates);
        debug!(
            degree = monic.len().saturating_sub(1),
            radius = radius.to_f64().unwrap_or(f64::NAN),
            roots = roots.len(),
            "isolated real roots"
        );
        roots
    }

    /// Bisect a sign change between `lo` and `hi`.
    fn bisect(&self, monic: &[T], lo: T, hi: T) -> T {
        let two = constant::<T>(2.0);
        let (mut lo, mut hi) = (lo, hi);
        let mut f_lo = evaluate(monic, lo);
        let mut mid = (lo + hi) / two;

        for _ in 0..self.bisection_iterations {
            mid = (lo + hi) / two;
            let f_mid = evaluate(monic, mid);
            if f_mid.abs() < self.zero_tolerance {
                break;
            }
            if f_lo * f_mid < T::zero() {
                hi = mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
        }

        mid
    }

    /// Drop candidates within `merge_tolerance` of a kept root, then sort.
    fn merge(&self, candidates: Vec<T>) -> Vec<T> {
        let mut kept: Vec<T> = Vec::with_capacity(candidates.len());
        for c in candidates {
            if kept.iter().all(|&k| (k - c).abs() >= self.merge_tolerance) {
                kept.push(c);
            }
        }
        kept.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
        kept
    }
}
