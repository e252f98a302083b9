//! Async delays for UI timers.

/// Resolve after `ms` milliseconds. Native builds resolve immediately.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
