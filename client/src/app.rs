//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_flow::AuthFlow;
use crate::components::session_provider::SessionProvider;
use crate::components::session_toast::SessionToast;
use crate::pages::not_found::NotFoundPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The whole tree sits under one [`SessionProvider`]; the auth screens are
/// switched in place by [`AuthFlow`] rather than by URL, so only `/` and the
/// 404 fallback are real routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/session-demo.css"/>
        <Title text="Session Demo"/>

        <SessionProvider>
            <SessionToast/>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=AuthFlow/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
