//! Tests for characteristic polynomials and eigenvalues of 2x2 and 3x3
//! matrices.

use approx::assert_relative_eq;

use matcalc_rs::prelude::*;

fn m(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows).unwrap()
}

fn assert_eigenvalues(got: &[f64], expected: &[f64]) {
    assert_eq!(got.len(), expected.len(), "eigenvalues: {:?}", got);
    for (&g, &e) in got.iter().zip(expected) {
        assert_relative_eq!(g, e, epsilon = 1e-6);
    }
}

// ============================================================================
// 2x2
// ============================================================================

#[test]
fn test_symmetric_2x2() {
    let result = characteristic_polynomial(&m(&[&[2.0, 1.0], &[1.0, 2.0]])).unwrap();

    assert_eq!(result.size, 2);
    assert_eq!(result.coefficients, vec![1.0, -4.0, 3.0]);
    assert_eq!(result.formatted_polynomial, "λ^2 - 4λ + 3");
    assert_eq!(result.eigenvalues, vec![1.0, 3.0]);
    assert!(result.has_real_eigenvalues);
}

#[test]
fn test_diagonal_2x2_sorted_ascending() {
    let result = characteristic_polynomial(&m(&[&[4.0, 0.0], &[0.0, -2.0]])).unwrap();

    assert_eq!(result.formatted_polynomial, "λ^2 - 2λ - 8");
    assert_eq!(result.eigenvalues, vec![-2.0, 4.0]);
}

#[test]
fn test_rotation_has_no_real_eigenvalues() {
    let result = characteristic_polynomial(&m(&[&[0.0, -1.0], &[1.0, 0.0]])).unwrap();

    assert_eq!(result.formatted_polynomial, "λ^2 + 1");
    assert!(result.eigenvalues.is_empty());
    assert!(!result.has_real_eigenvalues);
}

#[test]
fn test_repeated_2x2_root_is_listed_twice() {
    let result = characteristic_polynomial(&m(&[&[3.0, 1.0], &[0.0, 3.0]])).unwrap();

    assert_eq!(result.formatted_polynomial, "λ^2 - 6λ + 9");
    assert_eq!(result.eigenvalues, vec![3.0, 3.0]);
}

#[test]
fn test_close_2x2_roots_are_not_merged() {
    let result = characteristic_polynomial(&m(&[&[1.0, 1.0], &[0.0, 1.0 + 1e-6]])).unwrap();
    let e = &result.eigenvalues;

    assert_eq!(e.len(), 2);
    assert!(e[0] <= e[1]);
    assert_relative_eq!(e[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(e[1], 1.0 + 1e-6, epsilon = 1e-9);
}

#[test]
fn test_2x2_coefficients_are_trace_and_determinant() {
    let a = m(&[&[1.5, -2.0], &[0.5, 4.0]]);
    let result = characteristic_polynomial(&a).unwrap();

    // T = 5.5, D = 6 + 1 = 7
    assert_eq!(result.coefficients, vec![1.0, -5.5, 7.0]);
    assert_eq!(result.formatted_polynomial, "λ^2 - 5.5λ + 7");
    assert_eigenvalues(&result.eigenvalues, &[2.0, 3.5]);
}

// ============================================================================
// 3x3
// ============================================================================

#[test]
fn test_upper_triangular_3x3() {
    let a = m(&[&[3.0, 1.0, 2.0], &[0.0, 4.0, 1.0], &[0.0, 0.0, -1.0]]);
    let result = characteristic_polynomial(&a).unwrap();

    assert_eq!(result.size, 3);
    assert_eq!(result.coefficients, vec![1.0, -6.0, 5.0, 12.0]);
    assert_eq!(result.formatted_polynomial, "λ^3 - 6λ^2 + 5λ + 12");
    assert_eigenvalues(&result.eigenvalues, &[-1.0, 3.0, 4.0]);
    assert!(result.has_real_eigenvalues);
}

#[test]
fn test_eigenvalues_are_roots_and_sorted() {
    let cases = [
        m(&[&[2.0, -1.0, 0.0], &[-1.0, 2.0, -1.0], &[0.0, -1.0, 2.0]]),
        m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 10.0]]),
        m(&[&[0.0, -1.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 0.0, 2.0]]),
    ];
    for a in &cases {
        let result = characteristic_polynomial(a).unwrap();
        let c = &result.coefficients;

        for pair in result.eigenvalues.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for &x in &result.eigenvalues {
            let p = ((c[0] * x + c[1]) * x + c[2]) * x + c[3];
            assert!(p.abs() < 1e-5, "p({}) = {}", x, p);
        }
    }
}

#[test]
fn test_rotation_block_3x3_has_one_real_eigenvalue() {
    let a = m(&[&[0.0, -1.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 0.0, 2.0]]);
    let result = characteristic_polynomial(&a).unwrap();

    // (λ^2 + 1)(λ - 2)
    assert_eq!(result.coefficients, vec![1.0, -2.0, 1.0, -2.0]);
    assert_eigenvalues(&result.eigenvalues, &[2.0]);
}

#[test]
fn test_tridiagonal_3x3() {
    let a = m(&[&[2.0, -1.0, 0.0], &[-1.0, 2.0, -1.0], &[0.0, -1.0, 2.0]]);
    let result = characteristic_polynomial(&a).unwrap();

    let s = 2.0f64.sqrt();
    assert_eigenvalues(&result.eigenvalues, &[2.0 - s, 2.0, 2.0 + s]);
}

#[test]
fn test_tangent_double_root_is_missed() {
    // (λ - 2)^2 (λ - 3): the double root touches zero without a sign change
    let a = m(&[&[2.0, 0.0, 0.0], &[0.0, 2.0, 0.0], &[0.0, 0.0, 3.0]]);
    let result = characteristic_polynomial(&a).unwrap();

    assert_eq!(result.formatted_polynomial, "λ^3 - 7λ^2 + 16λ - 12");
    assert_eigenvalues(&result.eigenvalues, &[3.0]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unsupported_sizes() {
    assert_eq!(
        characteristic_polynomial(&m(&[&[5.0]])).unwrap_err(),
        MatcalcError::UnsupportedSize {
            size: 1,
            supported: "2, 3"
        }
    );
    assert_eq!(
        characteristic_polynomial(&Matrix::<f64>::identity(4)).unwrap_err(),
        MatcalcError::UnsupportedSize {
            size: 4,
            supported: "2, 3"
        }
    );
}

#[test]
fn test_non_square_rejected() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

    assert_eq!(
        characteristic_polynomial(&a).unwrap_err(),
        MatcalcError::NotSquare { rows: 2, cols: 3 }
    );
}
