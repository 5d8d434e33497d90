//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, form signals, submit
//! flows) and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod profile;
pub mod signup;
