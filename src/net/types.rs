//! Wire DTOs for the auth REST endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. `Credentials` and
//! `SignupProfile` are built per submit and dropped afterwards; only
//! `AuthUser` is retained, inside `AuthState`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupProfile {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// The authenticated identity record returned by every auth endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Server-side user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    /// Hosted avatar URL; the server sends an empty string when unset.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub profile_pic: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AuthUser {
    /// Date portion of `created_at`, or `"N/A"` when unknown.
    #[must_use]
    pub fn member_since(&self) -> &str {
        self.created_at
            .as_deref()
            .and_then(|ts| ts.split('T').next())
            .filter(|date| !date.is_empty())
            .unwrap_or("N/A")
    }

    /// Avatar to render, falling back to the bundled placeholder.
    #[must_use]
    pub fn avatar_src(&self) -> &str {
        self.profile_pic.as_deref().unwrap_or(DEFAULT_AVATAR)
    }
}

/// Placeholder shown when a user has no profile picture.
pub const DEFAULT_AVATAR: &str = "/avatar.png";

/// Partial profile update. Absent fields are omitted from the JSON body and
/// left unchanged by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Update carrying only a new avatar.
    #[must_use]
    pub fn avatar(data_url: String) -> Self {
        Self { profile_pic: Some(data_url), ..Self::default() }
    }

    /// Update carrying name and email from the profile draft.
    #[must_use]
    pub fn details(full_name: String, email: String) -> Self {
        Self { profile_pic: None, full_name: Some(full_name), email: Some(email) }
    }
}

/// Error body returned with non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
