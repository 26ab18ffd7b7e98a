use approx::assert_relative_eq;

use matcalc_rs::prelude::*;

fn m(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows).unwrap()
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_defaults() {
    let kernel = Kernel::<f64>::new().build().unwrap();

    assert_eq!(kernel.triangular_tolerance(), 1e-10);
    assert_eq!(kernel.pivot_tolerance(), 0.0);

    let finder = kernel.root_finder();
    assert_eq!(finder.sample_steps, 200);
    assert_eq!(finder.bisection_iterations, 40);
    assert_eq!(finder.zero_tolerance, 1e-6);
    assert_eq!(finder.merge_tolerance, 1e-4);
    assert_eq!(*finder, RootFinder::default());
}

#[test]
fn test_builder_custom_values() {
    let kernel = Kernel::<f64>::new()
        .triangular_tolerance(1e-6)
        .pivot_tolerance(1e-12)
        .sample_steps(500)
        .bisection_iterations(60)
        .zero_tolerance(1e-9)
        .merge_tolerance(1e-3)
        .build()
        .unwrap();

    assert_eq!(kernel.triangular_tolerance(), 1e-6);
    assert_eq!(kernel.pivot_tolerance(), 1e-12);
    assert_eq!(kernel.root_finder().sample_steps, 500);
    assert_eq!(kernel.root_finder().bisection_iterations, 60);
    assert_eq!(kernel.root_finder().zero_tolerance, 1e-9);
    assert_eq!(kernel.root_finder().merge_tolerance, 1e-3);
}

#[test]
fn test_builder_duplicate_parameter() {
    let err = Kernel::<f64>::new()
        .sample_steps(100)
        .sample_steps(300)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        MatcalcError::DuplicateParameter {
            parameter: "sample_steps"
        }
    );
}

#[test]
fn test_builder_rejects_invalid_values() {
    assert!(matches!(
        Kernel::<f64>::new().triangular_tolerance(-1.0).build(),
        Err(MatcalcError::InvalidTolerance {
            parameter: "triangular_tolerance",
            ..
        })
    ));
    assert!(matches!(
        Kernel::<f64>::new().pivot_tolerance(f64::NAN).build(),
        Err(MatcalcError::InvalidTolerance {
            parameter: "pivot_tolerance",
            ..
        })
    ));
    assert_eq!(
        Kernel::<f64>::new().sample_steps(1).build().unwrap_err(),
        MatcalcError::InvalidSampleSteps(1)
    );
    assert_eq!(
        Kernel::<f64>::new().bisection_iterations(0).build().unwrap_err(),
        MatcalcError::InvalidIterations(0)
    );
}

// ============================================================================
// Kernel Operation Tests
// ============================================================================

#[test]
fn test_kernel_matches_free_functions() {
    let kernel = Kernel::<f64>::new().build().unwrap();
    let a = m(&[&[2.0, 1.0, 1.0], &[1.0, 3.0, 2.0], &[1.0, 0.0, 0.0]]);

    assert_eq!(kernel.row_echelon(&a).unwrap(), row_echelon(&a));
    assert_eq!(kernel.rank(&a).unwrap(), rank(&a));
    assert_eq!(kernel.inverse(&a).unwrap(), inverse(&a));
    assert_eq!(kernel.rank_and_inverse(&a).unwrap(), rank_and_inverse(&a));
    assert_eq!(
        kernel.classify_triangular(&a).unwrap(),
        classify_triangular(&a, None)
    );
}

#[test]
fn test_kernel_rejects_non_finite_cells() {
    let kernel = Kernel::<f64>::new().build().unwrap();
    let a = m(&[&[1.0, f64::NAN], &[0.0, 1.0]]);

    let err = kernel.rank(&a).unwrap_err();
    assert!(matches!(err, MatcalcError::InvalidNumericValue(_)));
    assert!(err.to_string().contains("A[0][1]"));

    let b = m(&[&[1.0, 0.0], &[f64::INFINITY, 1.0]]);
    let err = kernel.multiply(&Matrix::identity(2), &b).unwrap_err();
    assert!(err.to_string().contains("B[1][0]"));
}

#[test]
fn test_kernel_finite_check_can_be_disabled() {
    let kernel = Kernel::<f64>::new().check_finite(false).build().unwrap();
    let a = m(&[&[1.0, f64::NAN], &[0.0, 1.0]]);

    assert!(kernel.row_echelon(&a).is_ok());
}

#[test]
fn test_kernel_pivot_tolerance_drops_tiny_pivots() {
    let a = m(&[&[1.0, 1.0], &[1.0, 1.0 + 1e-14]]);

    // Exact zero test: the tiny difference is a pivot
    assert_eq!(rank(&a), 2);

    let kernel = Kernel::<f64>::new().pivot_tolerance(1e-10).build().unwrap();
    assert_eq!(kernel.rank(&a).unwrap(), 1);
    assert_eq!(kernel.inverse(&a).unwrap(), None);

    let result = kernel.rank_and_inverse(&a).unwrap();
    assert_eq!(result.rank, 1);
    assert!(!result.has_inverse);
}

#[test]
fn test_kernel_triangular_tolerance() {
    let a = m(&[&[1.0, 2.0], &[1e-8, 3.0]]);

    assert_eq!(classify_triangular(&a, None), TriangularType::None);

    let kernel = Kernel::<f64>::new()
        .triangular_tolerance(1e-6)
        .build()
        .unwrap();
    assert_eq!(kernel.classify_triangular(&a).unwrap(), TriangularType::Upper);
}

#[test]
fn test_kernel_arithmetic() {
    let kernel = Kernel::<f64>::new().build().unwrap();
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);

    assert_eq!(kernel.add(&a, &b).unwrap(), m(&[&[6.0, 8.0], &[10.0, 12.0]]));
    assert_eq!(
        kernel.subtract(&b, &a).unwrap(),
        m(&[&[4.0, 4.0], &[4.0, 4.0]])
    );
    assert_eq!(
        kernel.multiply(&a, &b).unwrap(),
        m(&[&[19.0, 22.0], &[43.0, 50.0]])
    );

    let wide = m(&[&[1.0, 2.0, 3.0]]);
    assert!(matches!(
        kernel.add(&a, &wide),
        Err(MatcalcError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_kernel_analyze_triangular() {
    let kernel = Kernel::<f64>::new().build().unwrap();
    let a = m(&[&[2.0, 1.0, -1.0], &[0.0, 3.0, 4.0], &[0.0, 0.0, 5.0]]);
    let b = m(&[&[1.0, -2.0, 0.0], &[0.0, 4.0, 1.0], &[0.0, 0.0, 2.0]]);

    let analysis = kernel.analyze_triangular(&a, &b).unwrap();
    assert_eq!(analysis.size, 3);
    assert_eq!(analysis.a_type, TriangularType::Upper);
    assert_eq!(analysis.b_type, TriangularType::Upper);
    assert!(analysis.inverse_exists);
    assert_eq!(analysis.inverse_a_type, Some(TriangularType::Upper));
    assert_eq!(analysis.product_type, Some(TriangularType::Upper));
}

#[test]
fn test_kernel_characteristic_polynomial_with_finer_sampling() {
    let kernel = Kernel::<f64>::new()
        .sample_steps(1000)
        .bisection_iterations(80)
        .build()
        .unwrap();
    let a = m(&[&[3.0, 1.0, 2.0], &[0.0, 4.0, 1.0], &[0.0, 0.0, -1.0]]);

    let result = kernel.characteristic_polynomial(&a).unwrap();
    assert_eq!(result.eigenvalues.len(), 3);
    for (got, expected) in result.eigenvalues.iter().zip([-1.0, 3.0, 4.0]) {
        assert_relative_eq!(*got, expected, epsilon = 1e-6);
    }
}

#[test]
fn test_kernel_f32() {
    let a = Matrix::from_rows(&[[4.0f32, 7.0], [2.0, 6.0]]).unwrap();
    let kernel = Kernel::<f32>::new().build().unwrap();

    let inv = kernel.inverse(&a).unwrap().unwrap();
    assert_relative_eq!(inv[(0, 0)], 0.6, epsilon = 1e-5);
    assert_relative_eq!(inv[(0, 1)], -0.7, epsilon = 1e-5);
    assert_relative_eq!(inv[(1, 0)], -0.2, epsilon = 1e-5);
    assert_relative_eq!(inv[(1, 1)], 0.4, epsilon = 1e-5);
}

#[test]
fn test_result_display() {
    let a = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
    let text = rank_and_inverse(&a).to_string();

    assert!(text.contains("Rank:     1"));
    assert!(text.contains("Inverse:  no (singular)"));
    assert!(text.contains("Row Echelon Form:"));

    let spectrum = characteristic_polynomial(&m(&[&[0.0, -1.0], &[1.0, 0.0]])).unwrap();
    let text = spectrum.to_string();
    assert!(text.contains("λ^2 + 1"));
    assert!(text.contains("no real eigenvalues"));
}

#[test]
fn test_result_serialization() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let result = rank_and_inverse(&a);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["rank"], 2);
    assert_eq!(json["is_square"], true);
    assert_eq!(json["has_inverse"], true);
    assert_eq!(json["row_echelon_form"][0][0], 1.0);
    assert_eq!(json["inverse"].as_array().unwrap().len(), 2);

    let analysis = Kernel::<f64>::new()
        .build()
        .unwrap()
        .analyze_triangular(&a, &Matrix::identity(2))
        .unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["a_type"], "none");
    assert_eq!(json["b_type"], "both");
}
