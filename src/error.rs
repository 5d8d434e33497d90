//! Error types shared by the network, encoding, and session layers.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Every variant is meant to end up as a single toast
//! line, so `Display` output is written for the user rather than for logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::auth::RequestKind;
use crate::util::validate::ValidationError;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
    /// Browser-only endpoint called from a native or SSR build.
    #[error("not available on server")]
    Unavailable,
}

/// Failure turning a user-selected file into an inline data URL.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("selected file is not an image ({mime})")]
    NotAnImage { mime: String },
    #[error("selected image is empty")]
    Empty,
    #[error("image is too large ({size} bytes, limit {limit})")]
    TooLarge { size: usize, limit: usize },
    #[error("could not read image: {0}")]
    Read(String),
}

/// Failure of a session operation as seen by a view.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{0} already in progress")]
    Busy(RequestKind),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
