#![cfg(feature = "dev")]

use theilsen_rs::internals::primitives::errors::TheilSenError;

#[test]
fn test_theilsen_error_display() {
    // EmptyInput
    let err = TheilSenError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // MismatchedInputs
    let err = TheilSenError::MismatchedInputs {
        x_rows: 10,
        y_len: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Shape mismatch: x has 10 rows, y has 5 observations"
    );

    // TooFewPoints
    let err = TheilSenError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(format!("{}", err), "Too few points: got 1, need at least 2");

    // InvalidPredictors
    let err = TheilSenError::InvalidPredictors(0);
    assert_eq!(
        format!("{}", err),
        "Invalid predictor count: 0 (must be at least 1)"
    );

    // RaggedMatrix
    let err = TheilSenError::RaggedMatrix {
        len: 7,
        predictors: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Ragged matrix: 7 values cannot be split into rows of 2 predictors"
    );

    // DuplicateParameter
    let err = TheilSenError::DuplicateParameter {
        parameter: "predictors",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'predictors' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_theilsen_error_properties() {
    let err1 = TheilSenError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, TheilSenError::InvalidPredictors(0));
}

#[cfg(feature = "std")]
#[test]
fn test_theilsen_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<TheilSenError>();
}
