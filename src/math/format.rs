//! Human-readable rendering of numbers and polynomials.
//!
//! ## Purpose
//!
//! This module turns numeric results into the strings a calculator shows:
//! near-integers as integers, other values with a bounded number of
//! decimals, and polynomials with conventional coefficient and power elision.
//!
//! ## Design notes
//!
//! * **Presentation only**: Nothing in the numeric core depends on these
//!   strings; they are derived from already-computed values.
//! * **Exact vs approximate**: A value within `INTEGER_SNAP` of an integer
//!   is rendered without decimals, anything else is rounded to
//!   `MAX_DECIMALS` places with trailing zeros trimmed.
//!
//! ## Key concepts
//!
//! * Coefficient `1` is elided except on the constant term (`-1` keeps
//!   only its sign).
//! * Power 1 renders as the bare variable, power 0 as the coefficient alone.
//! * Zero terms are skipped; a polynomial with no terms renders `0`.

use num_traits::Float;

/// Distance to the nearest integer below which a value prints as an integer.
const INTEGER_SNAP: f64 = 1e-10;

/// Decimal places kept for non-integer values.
const MAX_DECIMALS: usize = 4;

/// Variable name used by the characteristic polynomial.
pub const LAMBDA: &str = "λ";

// ============================================================================
// Numbers
// ============================================================================

/// Render a single number.
pub fn format_number<T: Float>(value: T) -> String {
    let x = value.to_f64().unwrap_or(f64::NAN);
    if !x.is_finite() {
        return format!("{}", x);
    }

    let rounded = x.round();
    if (x - rounded).abs() < INTEGER_SNAP {
        // Avoid printing "-0"
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        return format!("{:.0}", rounded);
    }

    let text = format!("{:.*}", MAX_DECIMALS, x);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// Polynomials
// ============================================================================

/// Render a polynomial given its coefficients, highest degree first.
pub fn format_polynomial<T: Float>(coefficients: &[T], variable: &str) -> String {
    let Some(degree) = coefficients.len().checked_sub(1) else {
        return "0".to_string();
    };

    let mut out = String::new();
    for (i, &c) in coefficients.iter().enumerate() {
        let magnitude = format_number(c.abs());
        if magnitude == "0" {
            continue;
        }

        let power = degree - i;
        let body = match power {
            0 => magnitude,
            1 if magnitude == "1" => variable.to_string(),
            1 => format!("{}{}", magnitude, variable),
            p if magnitude == "1" => format!("{}^{}", variable, p),
            p => format!("{}{}^{}", magnitude, variable, p),
        };

        let negative = c < T::zero();
        if out.is_empty() {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }
        out.push_str(&body);
    }

    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}
