//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled. Anything missing, unparseable, or
//! zero falls back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const DEFAULT_MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_TOAST_MS: u32 = 4_000;

/// Runtime knobs shared by the session client and views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every REST endpoint, without a trailing slash.
    pub api_base: String,
    /// Upper bound on any single auth request before it settles as a timeout.
    pub request_timeout_ms: u32,
    /// Largest avatar file accepted by the image encoder.
    pub max_avatar_bytes: usize,
    /// How long a toast stays on screen.
    pub toast_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            max_avatar_bytes: DEFAULT_MAX_AVATAR_BYTES,
            toast_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `CHAT_API_BASE`: default `/api`
    /// - `CHAT_REQUEST_TIMEOUT_MS`: default 15000
    /// - `CHAT_MAX_AVATAR_BYTES`: default 5 MiB
    /// - `CHAT_TOAST_MS`: default 4000
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CHAT_API_BASE"),
            option_env!("CHAT_REQUEST_TIMEOUT_MS"),
            option_env!("CHAT_MAX_AVATAR_BYTES"),
            option_env!("CHAT_TOAST_MS"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        timeout_ms: Option<&str>,
        max_avatar_bytes: Option<&str>,
        toast_ms: Option<&str>,
    ) -> Self {
        Self {
            api_base: normalize_api_base(api_base),
            request_timeout_ms: parse_or("CHAT_REQUEST_TIMEOUT_MS", timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS),
            max_avatar_bytes: parse_or("CHAT_MAX_AVATAR_BYTES", max_avatar_bytes, DEFAULT_MAX_AVATAR_BYTES),
            toast_ms: parse_or("CHAT_TOAST_MS", toast_ms, DEFAULT_TOAST_MS),
        }
    }

    /// Join an endpoint path onto the API base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_api_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Parse a non-zero number, falling back to `default`.
fn parse_or<T>(key: &str, raw: Option<&str>, default: T) -> T
where
    T: std::str::FromStr + Copy + Default + PartialEq,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => value,
        _ => {
            log::warn!("ignoring invalid {key}={raw:?}; using default");
            default
        }
    }
}
