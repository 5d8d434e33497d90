//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `profile`, `toast`) so individual
//! components can depend on small focused models. `session` holds the only
//! code that writes `AuthState`.

pub mod auth;
pub mod profile;
pub mod session;
pub mod toast;
