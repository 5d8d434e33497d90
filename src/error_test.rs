use super::*;

#[test]
fn rejected_displays_server_message_only() {
    let err = ApiError::Rejected { status: 400, message: "Invalid credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn network_error_keeps_cause() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
}

#[test]
fn timeout_message() {
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
}

#[test]
fn encode_too_large_mentions_limit() {
    let err = EncodeError::TooLarge { size: 10, limit: 4 };
    assert_eq!(err.to_string(), "image is too large (10 bytes, limit 4)");
}

#[test]
fn session_error_is_transparent_over_sources() {
    let err = SessionError::from(ValidationError::InvalidEmailFormat);
    assert_eq!(err.to_string(), "Invalid email format");

    let err = SessionError::from(ApiError::Rejected { status: 409, message: "Email already exists".to_owned() });
    assert_eq!(err.to_string(), "Email already exists");
}

#[test]
fn busy_names_the_request() {
    assert_eq!(SessionError::Busy(RequestKind::Login).to_string(), "login already in progress");
}
