//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no auth endpoints: the mock auth service runs inside the
//! client. This router only server-renders the Leptos app, serves the
//! built `/pkg` assets and the static `404.json`, and answers `/healthz`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// File name of the not-found page copy inside the site root.
pub const NOT_FOUND_DATA_FILE: &str = "404.json";

/// Routes that do not depend on Leptos: health and static site files.
fn static_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route_service("/404.json", ServeFile::new(site_root.join(NOT_FOUND_DATA_FILE)))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

/// Static routes + Leptos SSR for every other path.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[[workspace.metadata.leptos]]` entry).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    Ok(static_routes(&config.site_root)
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
