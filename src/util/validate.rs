//! Client-side form validation.
//!
//! Rules run in a fixed order and stop at the first failure, so the user
//! only ever sees one message per submit.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::SignupProfile;
use crate::state::profile::ProfileDraft;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// "something@something.something" with no whitespace in any part.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(r"\S+@\S+\.\S+") {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("email pattern failed to compile: {e}");
        None
    }
});

/// The single rule a form violated. `Display` is the toast text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .map_or_else(|| fallback_email_check(email), |re| re.is_match(email))
}

/// Same shape check without the regex engine.
fn fallback_email_check(email: &str) -> bool {
    email.split_whitespace().any(|word| {
        word.split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.find('.').is_some_and(|dot| dot > 0 && dot + 1 < domain.len()))
    })
}

fn check_name_and_email(full_name: &str, email: &str) -> Result<(), ValidationError> {
    if full_name.trim().is_empty() {
        return Err(ValidationError::FullNameRequired);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}

/// Validate a signup draft: name, email presence, email format, password
/// presence, password length.
///
/// # Errors
///
/// Returns the first rule the draft violates.
pub fn validate_signup(profile: &SignupProfile) -> Result<(), ValidationError> {
    check_name_and_email(&profile.full_name, &profile.email)?;
    if profile.password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if profile.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate a profile edit draft before it is committed.
///
/// # Errors
///
/// Returns the first rule the draft violates.
pub fn validate_profile_draft(draft: &ProfileDraft) -> Result<(), ValidationError> {
    check_name_and_email(&draft.full_name, &draft.email)
}
