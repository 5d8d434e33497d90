//! Seam between the session client and the transport.
//!
//! `SessionClient` only talks to an `AuthBackend`, so tests can swap the HTTP
//! implementation for an in-memory fake.

use async_trait::async_trait;

use super::api;
use super::types::{AuthUser, Credentials, ProfileUpdate, SignupProfile};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Auth operations offered by the server.
///
/// Futures are `?Send`: everything runs on the single browser event loop.
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn check_auth(&self) -> Result<AuthUser, ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, ApiError>;
    async fn signup(&self, profile: &SignupProfile) -> Result<AuthUser, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<AuthUser, ApiError>;
}

/// `AuthBackend` over the REST endpoints in [`api`].
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl AuthBackend for HttpBackend {
    async fn check_auth(&self) -> Result<AuthUser, ApiError> {
        api::check_auth(&self.config).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, ApiError> {
        api::login(&self.config, credentials).await
    }

    async fn signup(&self, profile: &SignupProfile) -> Result<AuthUser, ApiError> {
        api::signup(&self.config, profile).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        api::logout(&self.config).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<AuthUser, ApiError> {
        api::update_profile(&self.config, update).await
    }
}
