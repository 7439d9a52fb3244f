// Error handling tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use langbridge::error::BridgeError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        BridgeError::InvalidDirection("xx_yy".to_string()),
        BridgeError::Forbidden(None),
        BridgeError::ModelInvocation("timeout".to_string()),
        BridgeError::InvalidRequest("missing field".to_string()),
        BridgeError::DuplicateDirection("en_ru".to_string()),
        BridgeError::Config("bad".to_string()),
        BridgeError::Internal("oops".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_invalid_direction_message() {
    let error = BridgeError::InvalidDirection("xx_yy".to_string());
    assert_eq!(error.to_string(), "Invalid translation direction");
    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_forbidden_message() {
    let error = BridgeError::Forbidden(Some("203.0.113.7".parse().unwrap()));
    assert_eq!(
        error.to_string(),
        "Forbidden: requests from this host are not allowed"
    );
    assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
}

#[test]
fn test_model_invocation_is_server_error() {
    let response = BridgeError::ModelInvocation("CUDA out of memory".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_invalid_request_is_unprocessable() {
    let error = BridgeError::InvalidRequest("expected value".to_string());
    assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error.to_string().contains("expected value"));
}

#[test]
fn test_duplicate_direction_names_code() {
    let error = BridgeError::DuplicateDirection("en_ru".to_string());
    assert!(error.to_string().contains("en_ru"));
    assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
