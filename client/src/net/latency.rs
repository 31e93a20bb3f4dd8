//! Simulated network delay for the in-browser mock auth service.

use std::time::Duration;

use auth::service::Latency;

/// Sleeps on a browser timer under `hydrate`; returns immediately elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLatency;

#[async_trait::async_trait(?Send)]
impl Latency for BrowserLatency {
    async fn pause(&self, delay: Duration) {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(delay).await;
        #[cfg(not(feature = "hydrate"))]
        let _ = delay;
    }
}
