//! In-memory fakes for driving session flows in unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::{self, LocalBoxFuture};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::net::backend::AuthBackend;
use crate::net::types::{AuthUser, Credentials, ProfileUpdate, SignupProfile};
use crate::state::auth::AuthState;
use crate::state::session::{SessionClient, SessionHooks};
use crate::state::toast::Toast;

#[derive(Clone, Debug)]
pub(crate) enum Outcome {
    Accept,
    Reject(ApiError),
    /// The request is issued but never answered.
    Stall,
}

/// Shared view of what the fake backend was asked to do.
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    pub(crate) calls: Rc<RefCell<Vec<&'static str>>>,
    /// Store snapshot taken while each request was in flight.
    pub(crate) seen: Rc<RefCell<Vec<AuthState>>>,
}

pub(crate) struct FakeBackend {
    store: Rc<RefCell<AuthState>>,
    recorder: Recorder,
    outcome: Outcome,
    account: RefCell<AuthUser>,
}

impl FakeBackend {
    async fn respond(&self, call: &'static str) -> Result<AuthUser, ApiError> {
        self.recorder.calls.borrow_mut().push(call);
        self.recorder.seen.borrow_mut().push(self.store.borrow().clone());
        match &self.outcome {
            Outcome::Accept => Ok(self.account.borrow().clone()),
            Outcome::Reject(err) => Err(err.clone()),
            Outcome::Stall => future::pending().await,
        }
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeBackend {
    async fn check_auth(&self) -> Result<AuthUser, ApiError> {
        self.respond("check_auth").await
    }

    async fn login(&self, _credentials: &Credentials) -> Result<AuthUser, ApiError> {
        self.respond("login").await
    }

    async fn signup(&self, profile: &SignupProfile) -> Result<AuthUser, ApiError> {
        let mut account = self.account.borrow_mut();
        account.full_name.clone_from(&profile.full_name);
        account.email.clone_from(&profile.email);
        drop(account);
        self.respond("signup").await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.respond("logout").await.map(|_| ())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<AuthUser, ApiError> {
        if matches!(self.outcome, Outcome::Accept) {
            let mut account = self.account.borrow_mut();
            if let Some(pic) = &update.profile_pic {
                account.profile_pic = Some(pic.clone());
            }
            if let Some(name) = &update.full_name {
                account.full_name.clone_from(name);
            }
            if let Some(email) = &update.email {
                account.email.clone_from(email);
            }
        }
        self.respond("update_profile").await
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeHooks {
    pub(crate) toasts: Rc<RefCell<Vec<Toast>>>,
    pub(crate) routes: Rc<RefCell<Vec<String>>>,
}

impl SessionHooks for FakeHooks {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }

    fn navigate(&self, path: &str) {
        self.routes.borrow_mut().push(path.to_owned());
    }
}

pub(crate) struct Harness {
    pub(crate) client: SessionClient<FakeBackend, Rc<RefCell<AuthState>>, FakeHooks>,
    pub(crate) store: Rc<RefCell<AuthState>>,
    pub(crate) recorder: Recorder,
    pub(crate) hooks: FakeHooks,
}

pub(crate) fn account() -> AuthUser {
    AuthUser {
        id: "u1".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        profile_pic: Some("https://cdn.example.com/ada.png".to_owned()),
        created_at: Some("2024-01-02T03:04:05Z".to_owned()),
    }
}

pub(crate) fn harness(outcome: Outcome, initial: AuthState) -> Harness {
    let store = Rc::new(RefCell::new(initial));
    let recorder = Recorder::default();
    let hooks = FakeHooks::default();
    let backend = FakeBackend {
        store: store.clone(),
        recorder: recorder.clone(),
        outcome,
        account: RefCell::new(account()),
    };
    let client = SessionClient::new(backend, store.clone(), hooks.clone(), &ClientConfig::default());
    Harness { client, store, recorder, hooks }
}

/// Timer that fires as soon as it is polled.
pub(crate) fn expired(_ms: u32) -> LocalBoxFuture<'static, ()> {
    Box::pin(future::ready(()))
}

/// Harness whose requests never answer and whose timeout fires at once.
pub(crate) fn timed_out_harness(initial: AuthState) -> Harness {
    let h = harness(Outcome::Stall, initial);
    Harness { client: h.client.with_timer(expired), ..h }
}

pub(crate) fn rejected(message: &str) -> Outcome {
    Outcome::Reject(ApiError::Rejected { status: 400, message: message.to_owned() })
}

pub(crate) fn logged_in() -> AuthState {
    AuthState { user: Some(account()), ..AuthState::default() }
}

pub(crate) fn credentials() -> Credentials {
    Credentials { email: "ada@example.com".to_owned(), password: "secret1".to_owned() }
}
