use super::*;

fn draft(full_name: &str, email: &str, password: &str) -> SignupProfile {
    SignupProfile { full_name: full_name.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

// =============================================================
// Individual rules
// =============================================================

#[test]
fn empty_name_is_rejected() {
    assert_eq!(validate_signup(&draft("", "a@b.com", "secret1")), Err(ValidationError::FullNameRequired));
}

#[test]
fn whitespace_name_is_rejected() {
    assert_eq!(validate_signup(&draft("   \t", "a@b.com", "secret1")), Err(ValidationError::FullNameRequired));
}

#[test]
fn blank_email_is_required_not_malformed() {
    assert_eq!(validate_signup(&draft("Ada", "   ", "secret1")), Err(ValidationError::EmailRequired));
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(validate_signup(&draft("Ada", "not-an-email", "secret1")), Err(ValidationError::InvalidEmailFormat));
    assert_eq!(validate_signup(&draft("Ada", "a@b", "secret1")), Err(ValidationError::InvalidEmailFormat));
    assert_eq!(validate_signup(&draft("Ada", "@b.com", "secret1")), Err(ValidationError::InvalidEmailFormat));
}

#[test]
fn missing_password_is_rejected() {
    assert_eq!(validate_signup(&draft("Ada", "a@b.com", "")), Err(ValidationError::PasswordRequired));
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(validate_signup(&draft("Ada", "a@b.com", "short")), Err(ValidationError::PasswordTooShort));
}

#[test]
fn password_length_counts_characters() {
    assert_eq!(validate_signup(&draft("Ada", "a@b.com", "ééééé")), Err(ValidationError::PasswordTooShort));
    assert_eq!(validate_signup(&draft("Ada", "a@b.com", "éééééé")), Ok(()));
}

#[test]
fn valid_draft_passes() {
    assert_eq!(validate_signup(&draft("Ada", "a@b.com", "secret1")), Ok(()));
    assert_eq!(validate_signup(&draft(" Ada ", "ada.lovelace@example.co.uk", "123456")), Ok(()));
}

// =============================================================
// Ordering: only the first violated rule is reported
// =============================================================

#[test]
fn name_is_checked_before_everything_else() {
    assert_eq!(validate_signup(&draft("", "", "")), Err(ValidationError::FullNameRequired));
}

#[test]
fn email_presence_before_format_and_password() {
    assert_eq!(validate_signup(&draft("Ada", "", "")), Err(ValidationError::EmailRequired));
}

#[test]
fn email_format_before_password() {
    assert_eq!(validate_signup(&draft("Ada", "nope", "")), Err(ValidationError::InvalidEmailFormat));
}

#[test]
fn password_presence_before_length() {
    assert_eq!(validate_signup(&draft("Ada", "a@b.com", "")), Err(ValidationError::PasswordRequired));
}

// =============================================================
// Email pattern
// =============================================================

#[test]
fn fallback_agrees_with_pattern() {
    for email in ["a@b.com", "x y@z.io", "nope", "a@b", "@b.c", "a@.c", "a@b."] {
        assert_eq!(fallback_email_check(email), is_valid_email(email), "disagreement on {email:?}");
    }
}

#[test]
fn messages_match_toast_text() {
    assert_eq!(ValidationError::FullNameRequired.to_string(), "Full name is required");
    assert_eq!(ValidationError::PasswordTooShort.to_string(), "Password must be at least 6 characters");
}

// =============================================================
// Profile drafts
// =============================================================

#[test]
fn profile_draft_reuses_name_and_email_rules() {
    let ok = ProfileDraft { full_name: "Ada".to_owned(), email: "a@b.com".to_owned() };
    assert_eq!(validate_profile_draft(&ok), Ok(()));

    let bad = ProfileDraft { full_name: "Ada".to_owned(), email: "ada".to_owned() };
    assert_eq!(validate_profile_draft(&bad), Err(ValidationError::InvalidEmailFormat));

    let blank = ProfileDraft { full_name: " ".to_owned(), email: "ada".to_owned() };
    assert_eq!(validate_profile_draft(&blank), Err(ValidationError::FullNameRequired));
}
