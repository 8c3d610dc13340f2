use super::*;

#[test]
fn test_error_display() {
    // Parameter error
    let err = Error::param("BinaryField", "Field degree must be positive");
    assert_eq!(
        err.to_string(),
        "Invalid parameter 'BinaryField': Field degree must be positive"
    );

    // Degree error
    let err = Error::Degree {
        context: "FieldElement",
        degree: 12,
        limit: 8,
    };
    assert_eq!(
        err.to_string(),
        "Invalid degree for FieldElement: got 12, must be below 8"
    );
}

#[test]
fn test_validation_functions() {
    // Parameter validation
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();

    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    // Degree validation
    assert!(validate::degree("poly", 7, 8).is_ok());
    let err = validate::degree("poly", 8, 8).unwrap_err();

    match err {
        Error::Degree {
            context,
            degree,
            limit,
        } => {
            assert_eq!(context, "poly");
            assert_eq!(degree, 8);
            assert_eq!(limit, 8);
        }
        _ => panic!("Expected Degree error"),
    }
}
