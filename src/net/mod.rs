//! Networking modules for the auth REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `backend` wraps them behind the
//! `AuthBackend` trait the session client depends on, and `types` defines the
//! wire schema.

pub mod api;
pub mod backend;
pub mod types;
