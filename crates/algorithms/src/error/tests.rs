use super::*;

#[test]
fn test_error_conversion() {
    // Parameter error
    let err = Error::Parameter {
        name: "m",
        reason: "no field polynomial",
    };
    match CoreError::from(err) {
        CoreError::UnsupportedParameter { context, message } => {
            assert_eq!(context, "m");
            assert_eq!(message, "no field polynomial");
        }
        other => panic!("Expected UnsupportedParameter error, got {:?}", other),
    }

    // Length error
    let err = Error::Length {
        context: "plaintext",
        expected: 8,
        actual: 7,
    };
    match CoreError::from(err) {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "plaintext");
            assert_eq!(expected, 8);
            assert_eq!(actual, 7);
        }
        other => panic!("Expected InvalidLength error, got {:?}", other),
    }

    // Key generation failures collapse into one variant
    assert!(matches!(
        CoreError::from(Error::RankDeficient { column: 3 }),
        CoreError::KeyGeneration { .. }
    ));
    assert!(matches!(
        CoreError::from(Error::RetryLimit {
            operation: "irreducible search",
            attempts: 10
        }),
        CoreError::KeyGeneration {
            context: "irreducible search",
            ..
        }
    ));

    assert_eq!(
        CoreError::from(Error::DecodingFailure {
            expected: 2,
            located: 0
        }),
        CoreError::DecodingFailure {
            context: "Goppa decoder",
            expected: 2,
            located: 0
        }
    );
    assert_eq!(
        CoreError::from(Error::domain("inverse of zero")),
        CoreError::Domain {
            context: "inverse of zero"
        }
    );
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "t", "should pass").is_ok());
    match validate::parameter(false, "t", "should fail").unwrap_err() {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "t");
            assert_eq!(reason, "should fail");
        }
        other => panic!("Expected Parameter error, got {:?}", other),
    }

    assert!(validate::length("vector", 16, 16).is_ok());
    assert_eq!(
        validate::length("vector", 15, 16),
        Err(Error::Length {
            context: "vector",
            expected: 16,
            actual: 15
        })
    );

    assert!(validate::index("bit", 15, 16).is_ok());
    assert!(matches!(
        validate::index("bit", 16, 16),
        Err(Error::InvalidInput { .. })
    ));
}

#[test]
fn test_display() {
    let err = Error::RetryLimit {
        operation: "scrambler search",
        attempts: 128,
    };
    assert_eq!(err.to_string(), "scrambler search gave up after 128 attempts");
}
