//! Static data fetches.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the fetch is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` instead of errors; a failed fetch means "render the
//! fallback text", never a broken page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::NotFoundContent;

/// Path of the static not-found document served next to the app.
pub const NOT_FOUND_DATA_PATH: &str = "/404.json";

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(path: &str, status: u16) -> String {
    format!("fetch {path} failed: {status}")
}

/// Fetch the not-found page copy from [`NOT_FOUND_DATA_PATH`].
pub async fn fetch_not_found_content() -> Option<NotFoundContent> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(NOT_FOUND_DATA_PATH).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("fetch {NOT_FOUND_DATA_PATH} failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::warn!("{}", fetch_failed_message(NOT_FOUND_DATA_PATH, resp.status()));
            return None;
        }
        resp.json::<NotFoundContent>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
