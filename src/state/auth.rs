//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context and read by route guards,
//! pages, and the session client. The session client is the only writer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use crate::net::types::AuthUser;

/// The kinds of auth request a view can issue. Each owns one in-flight flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
    CheckAuth,
    Login,
    Signup,
    Logout,
    UpdateProfile,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CheckAuth => "auth check",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Logout => "logout",
            Self::UpdateProfile => "profile update",
        })
    }
}

/// Current user plus one in-flight flag per request kind.
///
/// A flag is raised by [`AuthState::begin`] and lowered by
/// [`AuthState::settle`]; the session client always pairs the two, whatever
/// the outcome of the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub is_checking_auth: bool,
    pub is_logging_in: bool,
    pub is_signing_up: bool,
    pub is_logging_out: bool,
    pub is_updating_profile: bool,
}

impl AuthState {
    /// State at app start: no user yet and the initial check pending.
    #[must_use]
    pub fn checking() -> Self {
        Self { is_checking_auth: true, ..Self::default() }
    }

    #[must_use]
    pub fn in_flight(&self, kind: RequestKind) -> bool {
        match kind {
            RequestKind::CheckAuth => self.is_checking_auth,
            RequestKind::Login => self.is_logging_in,
            RequestKind::Signup => self.is_signing_up,
            RequestKind::Logout => self.is_logging_out,
            RequestKind::UpdateProfile => self.is_updating_profile,
        }
    }

    fn flag_mut(&mut self, kind: RequestKind) -> &mut bool {
        match kind {
            RequestKind::CheckAuth => &mut self.is_checking_auth,
            RequestKind::Login => &mut self.is_logging_in,
            RequestKind::Signup => &mut self.is_signing_up,
            RequestKind::Logout => &mut self.is_logging_out,
            RequestKind::UpdateProfile => &mut self.is_updating_profile,
        }
    }

    /// Raise the flag for `kind`. Returns `false` if it was already raised.
    ///
    /// `CheckAuth` starts raised (see [`AuthState::checking`]), so beginning
    /// it again while pending is allowed.
    pub fn begin(&mut self, kind: RequestKind) -> bool {
        let flag = self.flag_mut(kind);
        if *flag && kind != RequestKind::CheckAuth {
            return false;
        }
        *flag = true;
        true
    }

    /// Lower the flag for `kind`.
    pub fn settle(&mut self, kind: RequestKind) {
        *self.flag_mut(kind) = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
