//! Session client: the single writer of `AuthState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `login`, `signup`, `update_profile`, and friends on a
//! `SessionClient`. The client raises the matching in-flight flag, awaits the
//! backend raced against a timeout, then lowers the flag and applies the
//! result in one store update, so a flag never outlives its request.
//!
//! DESIGN
//! ======
//! The backend, the state store, and the UI side effects (toasts and
//! navigation) are all trait seams. The app wires them to HTTP, an
//! `RwSignal<AuthState>`, and Leptos signals; tests wire them to fakes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;

use futures::future::{self, Either, LocalBoxFuture};
use leptos::prelude::*;

use super::auth::{AuthState, RequestKind};
use super::toast::{Toast, ToastState};
use crate::config::ClientConfig;
use crate::error::{ApiError, SessionError};
use crate::net::backend::{AuthBackend, HttpBackend};
use crate::net::types::{AuthUser, Credentials, ProfileUpdate, SignupProfile};
use crate::util::timer::sleep;

/// Route shown after login or signup succeeds.
pub const HOME_ROUTE: &str = "/";
/// Route shown after logout.
pub const LOGIN_ROUTE: &str = "/login";

/// Read and mutate access to the shared `AuthState`.
pub trait SessionStore {
    fn snapshot(&self) -> AuthState;
    fn modify(&self, f: impl FnOnce(&mut AuthState));
}

impl SessionStore for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        self.update(f);
    }
}

impl SessionStore for Rc<RefCell<AuthState>> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.borrow_mut());
    }
}

/// UI side effects of session operations.
pub trait SessionHooks {
    /// Show a single-line notification.
    fn notify(&self, toast: Toast);
    /// Move to another route.
    fn navigate(&self, path: &str);
}

/// Hooks backed by Leptos signals: a toast list and a pending redirect that
/// a listener inside the router turns into navigation.
#[derive(Clone, Copy, Debug)]
pub struct SignalHooks {
    pub toasts: RwSignal<ToastState>,
    pub redirect: RwSignal<Option<String>>,
    pub toast_ms: u32,
}

impl SessionHooks for SignalHooks {
    fn notify(&self, toast: Toast) {
        let mut id = 0;
        self.toasts.update(|state| id = state.push(toast));
        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            let toast_ms = self.toast_ms;
            leptos::task::spawn_local(async move {
                sleep(toast_ms).await;
                toasts.update(|state| state.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    fn navigate(&self, path: &str) {
        self.redirect.set(Some(path.to_owned()));
    }
}

/// Session client as wired in the running app.
pub type AppSession = SessionClient<HttpBackend, RwSignal<AuthState>, SignalHooks>;

/// Build the app's session client from context.
///
/// Must be called inside a component below `App`.
pub fn use_session() -> AppSession {
    let config = expect_context::<ClientConfig>();
    SessionClient::new(
        HttpBackend::new(config.clone()),
        expect_context::<RwSignal<AuthState>>(),
        expect_context::<SignalHooks>(),
        &config,
    )
}

/// Await `request`, or fail with `ApiError::Timeout` if `timer` finishes first.
///
/// # Errors
///
/// Returns the request's own error, or `Timeout`.
pub async fn race_timeout<T>(
    request: impl Future<Output = Result<T, ApiError>>,
    timer: impl Future<Output = ()>,
) -> Result<T, ApiError> {
    let request = pin!(request);
    let timer = pin!(timer);
    match future::select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Builds the future that bounds a request, given the timeout in milliseconds.
pub type Timer = fn(u32) -> LocalBoxFuture<'static, ()>;

fn event_loop_timer(ms: u32) -> LocalBoxFuture<'static, ()> {
    Box::pin(sleep(ms))
}

#[derive(Clone)]
pub struct SessionClient<B, S, H> {
    backend: B,
    store: S,
    hooks: H,
    timeout_ms: u32,
    timer: Timer,
}

impl<B, S, H> SessionClient<B, S, H>
where
    B: AuthBackend,
    S: SessionStore,
    H: SessionHooks,
{
    pub fn new(backend: B, store: S, hooks: H, config: &ClientConfig) -> Self {
        Self { backend, store, hooks, timeout_ms: config.request_timeout_ms, timer: event_loop_timer }
    }

    /// Replace the timer that bounds each request.
    #[must_use]
    pub fn with_timer(mut self, timer: Timer) -> Self {
        self.timer = timer;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Show a toast through the client's hooks.
    pub fn notify(&self, toast: Toast) {
        self.hooks.notify(toast);
    }

    /// Run one request under its in-flight flag.
    ///
    /// The flag is lowered and `on_success` applied in the same store update.
    async fn run<T>(
        &self,
        kind: RequestKind,
        request: impl Future<Output = Result<T, ApiError>>,
        on_success: impl FnOnce(&mut AuthState, &T),
    ) -> Result<T, SessionError> {
        let mut started = false;
        self.store.modify(|state| started = state.begin(kind));
        if !started {
            log::debug!("{kind} ignored: already in flight");
            return Err(SessionError::Busy(kind));
        }
        log::debug!("{kind} started");

        let result = race_timeout(request, (self.timer)(self.timeout_ms)).await;

        self.store.modify(|state| {
            state.settle(kind);
            if let Ok(value) = &result {
                on_success(state, value);
            }
        });
        match &result {
            Ok(_) => log::debug!("{kind} settled"),
            Err(e) => log::warn!("{kind} failed: {e}"),
        }
        result.map_err(SessionError::from)
    }

    fn report(&self, result: &Result<AuthUser, SessionError>, success: &str) {
        match result {
            Ok(_) => self.hooks.notify(Toast::success(success)),
            Err(SessionError::Busy(_)) => {}
            Err(e) => self.hooks.notify(Toast::error(e.to_string())),
        }
    }

    /// Restore the session from the cookie at app start. Failure just means
    /// "not logged in" and is not reported to the user.
    ///
    /// # Errors
    ///
    /// Returns the backend error when there is no valid session.
    pub async fn check_auth(&self) -> Result<AuthUser, SessionError> {
        let result = self
            .run(RequestKind::CheckAuth, self.backend.check_auth(), |state, user: &AuthUser| {
                state.user = Some(user.clone());
            })
            .await;
        if result.is_err() {
            self.store.modify(|state| state.user = None);
        }
        result
    }

    /// Log in and move to the home route.
    ///
    /// # Errors
    ///
    /// `Busy` if a login is already running, otherwise the backend error.
    /// `AuthState::user` is untouched on failure.
    pub async fn login(&self, credentials: Credentials) -> Result<AuthUser, SessionError> {
        let result = self
            .run(RequestKind::Login, self.backend.login(&credentials), |state, user: &AuthUser| {
                state.user = Some(user.clone());
            })
            .await;
        self.report(&result, "Logged in successfully");
        if let Ok(user) = &result {
            log::info!("logged in as {}", user.id);
            self.hooks.navigate(HOME_ROUTE);
        }
        result
    }

    /// Create an account, log into it, and move to the home route.
    ///
    /// The profile is sent as given; views validate it first.
    ///
    /// # Errors
    ///
    /// `Busy` if a signup is already running, otherwise the backend error.
    pub async fn signup(&self, profile: SignupProfile) -> Result<AuthUser, SessionError> {
        let result = self
            .run(RequestKind::Signup, self.backend.signup(&profile), |state, user: &AuthUser| {
                state.user = Some(user.clone());
            })
            .await;
        self.report(&result, "Account created successfully");
        if let Ok(user) = &result {
            log::info!("signed up as {}", user.id);
            self.hooks.navigate(HOME_ROUTE);
        }
        result
    }

    /// Send a partial profile update. On success the stored user is replaced
    /// by the server's copy.
    ///
    /// # Errors
    ///
    /// `Busy` if an update is already running, otherwise the backend error.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<AuthUser, SessionError> {
        let result = self
            .run(RequestKind::UpdateProfile, self.backend.update_profile(&update), |state, user: &AuthUser| {
                state.user = Some(user.clone());
            })
            .await;
        self.report(&result, "Profile updated successfully");
        result
    }

    /// End the session and return to the login route.
    ///
    /// # Errors
    ///
    /// `Busy` if a logout is already running, otherwise the backend error.
    /// The user stays logged in locally when the server refuses.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let result = self
            .run(RequestKind::Logout, self.backend.logout(), |state, _: &()| state.user = None)
            .await;
        match &result {
            Ok(()) => {
                log::info!("logged out");
                self.hooks.notify(Toast::success("Logged out successfully"));
                self.hooks.navigate(LOGIN_ROUTE);
            }
            Err(SessionError::Busy(_)) => {}
            Err(e) => self.hooks.notify(Toast::error(e.to_string())),
        }
        result
    }
}
