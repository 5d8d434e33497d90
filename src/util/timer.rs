//! Timer future for request timeouts and toast expiry.
//!
//! Requires a browser event loop. Native and SSR builds get a future that
//! never completes, which disables timeouts there.

/// Resolve after `ms` milliseconds.
pub async fn sleep(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
        futures::future::pending::<()>().await;
    }
}
