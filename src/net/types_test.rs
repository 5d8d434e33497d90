use super::*;

fn user_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "66a1",
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "profilePic": "",
        "createdAt": "2024-07-25T10:11:12.000Z",
        "updatedAt": "2024-07-25T10:11:12.000Z"
    })
}

// =============================================================
// AuthUser
// =============================================================

#[test]
fn auth_user_deserializes_server_shape() {
    let user: AuthUser = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.id, "66a1");
    assert_eq!(user.full_name, "Ada Lovelace");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.profile_pic, None);
    assert_eq!(user.member_since(), "2024-07-25");
}

#[test]
fn auth_user_keeps_non_empty_profile_pic() {
    let mut json = user_json();
    json["profilePic"] = serde_json::json!("https://cdn.example.com/a.png");
    let user: AuthUser = serde_json::from_value(json).unwrap();
    assert_eq!(user.avatar_src(), "https://cdn.example.com/a.png");
}

#[test]
fn auth_user_missing_optional_fields() {
    let user: AuthUser = serde_json::from_value(serde_json::json!({
        "_id": "1",
        "fullName": "Ada",
        "email": "a@b.com"
    }))
    .unwrap();
    assert_eq!(user.member_since(), "N/A");
    assert_eq!(user.avatar_src(), DEFAULT_AVATAR);
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn signup_profile_serializes_camel_case() {
    let profile = SignupProfile {
        full_name: "Ada".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
    };
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json, serde_json::json!({ "fullName": "Ada", "email": "a@b.com", "password": "secret1" }));
}

#[test]
fn profile_update_omits_absent_fields() {
    let json = serde_json::to_value(ProfileUpdate::avatar("data:image/png;base64,AA==".to_owned())).unwrap();
    assert_eq!(json, serde_json::json!({ "profilePic": "data:image/png;base64,AA==" }));

    let json = serde_json::to_value(ProfileUpdate::details("Ada".to_owned(), "a@b.com".to_owned())).unwrap();
    assert_eq!(json, serde_json::json!({ "fullName": "Ada", "email": "a@b.com" }));
}

#[test]
fn profile_update_default_serializes_to_empty_object() {
    let json = serde_json::to_value(ProfileUpdate::default()).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
}
