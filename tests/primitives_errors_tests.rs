#![cfg(feature = "dev")]

use matcalc_rs::internals::primitives::errors::MatcalcError;

#[test]
fn test_matcalc_error_display() {
    // RaggedRows
    let err = MatcalcError::RaggedRows {
        row: 2,
        expected: 3,
        got: 1,
    };
    assert_eq!(
        format!("{}", err),
        "Ragged matrix: row 2 has 1 columns, expected 3"
    );

    // NotSquare
    let err = MatcalcError::NotSquare { rows: 2, cols: 3 };
    assert_eq!(
        format!("{}", err),
        "Matrix must be square and non-empty, got 2x3"
    );

    // IncompatibleMultiplication
    let err = MatcalcError::IncompatibleMultiplication {
        left: (2, 3),
        right: (2, 2),
    };
    assert_eq!(
        format!("{}", err),
        "Cannot multiply 2x3 by 2x2: columns of A must equal rows of B"
    );

    // DimensionMismatch
    let err = MatcalcError::DimensionMismatch {
        left: (2, 2),
        right: (3, 3),
    };
    assert_eq!(format!("{}", err), "Dimension mismatch: 2x2 vs 3x3");

    // UnsupportedSize
    let err = MatcalcError::UnsupportedSize {
        size: 4,
        supported: "2, 3",
    };
    assert_eq!(
        format!("{}", err),
        "Unsupported matrix size 4x4 (supported: 2, 3)"
    );

    // InvalidNumericValue
    let err = MatcalcError::InvalidNumericValue("A[0][1]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: A[0][1]=NaN");

    // InvalidTolerance
    let err = MatcalcError::InvalidTolerance {
        parameter: "zero_tolerance",
        value: -1.0,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid zero_tolerance: -1 (must be >= 0 and finite)"
    );

    // InvalidSampleSteps
    let err = MatcalcError::InvalidSampleSteps(1);
    assert_eq!(
        format!("{}", err),
        "Invalid sample_steps: 1 (must be in [2, 100000])"
    );

    // InvalidIterations
    let err = MatcalcError::InvalidIterations(0);
    assert_eq!(
        format!("{}", err),
        "Invalid bisection_iterations: 0 (must be in [1, 200])"
    );

    // DuplicateParameter
    let err = MatcalcError::DuplicateParameter {
        parameter: "sample_steps",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'sample_steps' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_matcalc_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(MatcalcError::NotSquare { rows: 0, cols: 0 });
    assert!(err.to_string().contains("0x0"));
}
