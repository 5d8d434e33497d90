//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, relying on the
//! browser to attach the session cookie.
//! Server-side (SSR) and native builds: stubs returning
//! `ApiError::Unavailable`, since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Rejected` carrying the server's
//! `message` field so the view can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{AuthUser, Credentials, ProfileUpdate, SignupProfile};
use crate::config::ClientConfig;
use crate::error::ApiError;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const CHECK_PATH: &str = "auth/check";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGIN_PATH: &str = "auth/login";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const SIGNUP_PATH: &str = "auth/signup";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGOUT_PATH: &str = "auth/logout";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const UPDATE_PROFILE_PATH: &str = "auth/update-profile";

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Build the rejection for a non-2xx response from its raw body text.
#[cfg(any(test, feature = "hydrate"))]
fn rejection(operation: &str, status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(message) }) if !message.trim().is_empty() => message,
        _ => format!("{operation} failed: {status}"),
    };
    ApiError::Rejected { status, message }
}

#[cfg(feature = "hydrate")]
async fn read_user(operation: &str, resp: gloo_net::http::Response) -> Result<AuthUser, ApiError> {
    let status = resp.status();
    if !is_success(status) {
        let body = resp.text().await.unwrap_or_default();
        return Err(rejection(operation, status, &body));
    }
    resp.json::<AuthUser>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Fetch the user bound to the current session cookie via `GET /auth/check`.
///
/// # Errors
///
/// Returns `Rejected` with status 401 when no session exists.
pub async fn check_auth(config: &ClientConfig) -> Result<AuthUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint(CHECK_PATH))
            .send()
            .await
            .map_err(network)?;
        read_user("check auth", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Log in via `POST /auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(config: &ClientConfig, credentials: &Credentials) -> Result<AuthUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(LOGIN_PATH))
            .json(credentials)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_user("login", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses the account.
pub async fn signup(config: &ClientConfig, profile: &SignupProfile) -> Result<AuthUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(SIGNUP_PATH))
            .json(profile)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_user("signup", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, profile);
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /auth/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a non-OK status.
pub async fn logout(config: &ClientConfig) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(LOGOUT_PATH))
            .send()
            .await
            .map_err(network)?;
        let status = resp.status();
        if !is_success(status) {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection("logout", status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Apply a partial profile update via `PUT /auth/update-profile`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the update.
pub async fn update_profile(config: &ClientConfig, update: &ProfileUpdate) -> Result<AuthUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&config.endpoint(UPDATE_PROFILE_PATH))
            .json(update)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_user("update profile", resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, update);
        Err(ApiError::Unavailable)
    }
}
