//! Session provider: owns the session for the component tree beneath it.

use std::sync::Arc;

use auth::AuthService;
use auth::config::AuthConfig;
use leptos::prelude::*;

use crate::net::latency::BrowserLatency;
use crate::state::session::SessionContext;

/// Seeded mock auth service that sleeps on browser timers.
///
/// The browser has no environment, so there `from_env` yields the defaults.
#[must_use]
pub fn default_service() -> AuthService {
    AuthService::new(AuthConfig::from_env(), Arc::new(BrowserLatency))
}

/// Provide a [`SessionContext`] to `children` and run the one-time
/// session bootstrap in the browser.
///
/// `loading` stays `true` on the server so SSR markup and the first
/// hydrated render agree; the browser clears it once bootstrap resolves.
#[component]
pub fn SessionProvider(
    /// Auth service backing the session; defaults to [`default_service`].
    #[prop(optional)]
    service: Option<AuthService>,
    children: Children,
) -> impl IntoView {
    let ctx = SessionContext::new(service.unwrap_or_else(default_service));
    provide_context(ctx.clone());

    #[cfg(feature = "hydrate")]
    {
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            ctx.initialize().await;
            log::debug!("session bootstrap finished");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = ctx;

    children()
}
