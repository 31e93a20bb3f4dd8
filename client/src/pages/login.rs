//! Login page: email + password against the mock auth service.

#[cfg(feature = "hydrate")]
use auth::service::AuthResponse;
use auth::store::{DEMO_EMAIL, DEMO_PASSWORD};
use leptos::prelude::*;

use crate::state::session::SessionContext;
use crate::util::forms::validate_login;

#[cfg(feature = "hydrate")]
const LOGIN_SUCCESS_MESSAGE: &str = "Signed in";

#[component]
pub fn LoginPage(
    on_success: Callback<()>,
    on_switch: Callback<()>,
    /// One-shot message from the previous screen (e.g. after registering).
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let field_error = RwSignal::new(None::<&'static str>);
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                field_error.set(Some(msg));
                return;
            }
        };
        field_error.set(None);
        banner.set(None);
        notice.set(None);
        busy.set(true);
        let remember_me = remember.get();

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let result = session.login_with(credentials, remember_me).await;
                let response = AuthResponse::from_result(&result, LOGIN_SUCCESS_MESSAGE);
                busy.set(false);
                if response.success {
                    on_success.run(());
                } else {
                    banner.set(Some(response.message));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, credentials, remember_me);
            busy.set(false);
        }
    };

    let fill_demo = move |_| {
        email.set(DEMO_EMAIL.to_owned());
        password.set(DEMO_PASSWORD.to_owned());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <p class="auth-card__subtitle">"Welcome back"</p>
                <Show when=move || notice.get().is_some()>
                    <p class="auth-message auth-message--notice">
                        {move || notice.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || banner.get().is_some()>
                    <p class="auth-message auth-message--error" role="alert">
                        {move || banner.get().unwrap_or_default()}
                    </p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="auth-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <Show when=move || field_error.get().is_some()>
                        <p class="auth-field-error">{move || field_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__hint">
                    "Demo account: " {DEMO_EMAIL} " / " {DEMO_PASSWORD} " "
                    <button class="auth-link" type="button" on:click=fill_demo>
                        "Use demo"
                    </button>
                </p>
                <p class="auth-card__switch">
                    "No account? "
                    <button class="auth-link" type="button" on:click=move |_| on_switch.run(())>
                        "Create one"
                    </button>
                </p>
            </div>
        </div>
    }
}
