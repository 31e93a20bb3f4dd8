//! Not-found page driven by the static `404.json`.
//!
//! Renders the fallback copy immediately and swaps in the fetched document
//! once it arrives; a failed fetch simply leaves the fallback in place.

use leptos::prelude::*;

use crate::net::types::{NotFoundContent, NotFoundView};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let content = RwSignal::new(NotFoundContent::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(loaded) = crate::net::api::fetch_not_found_content().await {
            content.set(loaded);
        }
    });

    let page = Memo::new(move |_| content.with(NotFoundContent::resolve));
    let field = move |pick: fn(&NotFoundView) -> String| move || page.with(pick);

    view! {
        <div class="not-found-page">
            <p class="not-found-page__code">{field(|v| v.code.clone())}</p>
            <h1 class="not-found-page__title">{field(|v| v.title.clone())}</h1>
            <p class="not-found-page__subtitle">{field(|v| v.subtitle.clone())}</p>
            <p class="not-found-page__description">{field(|v| v.description.clone())}</p>
            <a class="auth-button" href=field(|v| v.button_href.clone())>
                {field(|v| v.button_label.clone())}
            </a>
        </div>
    }
}
