use super::*;

#[test]
fn test_display_formatting() {
    let err = Error::InvalidPointState {
        context: "normalize",
        details: "finite point with non-invertible z",
    };
    assert_eq!(
        err.to_string(),
        "Invalid point state in normalize: finite point with non-invertible z"
    );

    let err = Error::UnsupportedCoordinateSystem { tag: 7 };
    assert_eq!(err.to_string(), "Unsupported coordinate system tag 7");

    let err = Error::ZeroInversion {
        context: "simultaneous inversion",
    };
    assert_eq!(err.to_string(), "Inversion of zero in simultaneous inversion");

    let err = Error::InvalidArgument {
        name: "power",
        reason: "must be non-negative",
    };
    assert_eq!(err.to_string(), "Invalid argument 'power': must be non-negative");
}

#[test]
fn test_validation_functions() {
    assert!(validate::argument(true, "power", "should pass").is_ok());
    let err = validate::argument(false, "power", "should fail").unwrap_err();

    match err {
        Error::InvalidArgument { name, reason } => {
            assert_eq!(name, "power");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected InvalidArgument error"),
    }

    assert!(validate::point_state(true, "projective point", "should pass").is_ok());
    let err = validate::point_state(false, "projective point", "should fail").unwrap_err();

    match err {
        Error::InvalidPointState { context, details } => {
            assert_eq!(context, "projective point");
            assert_eq!(details, "should fail");
        }
        _ => panic!("Expected InvalidPointState error"),
    }
}
