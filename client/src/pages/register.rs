//! Registration page.

#[cfg(feature = "hydrate")]
use auth::service::AuthResponse;
use leptos::prelude::*;

use crate::state::session::SessionContext;
use crate::util::forms::validate_registration;

#[cfg(feature = "hydrate")]
const REGISTER_SUCCESS_MESSAGE: &str = "Account created";

#[component]
pub fn RegisterPage(on_success: Callback<()>, on_switch: Callback<()>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<&'static str>);
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let candidate = match validate_registration(&username.get(), &email.get(), &password.get(), &confirm.get()) {
            Ok(candidate) => candidate,
            Err(msg) => {
                field_error.set(Some(msg));
                return;
            }
        };
        field_error.set(None);
        banner.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let result = session.register(candidate).await;
                if let Ok(user) = &result {
                    log::info!("registered user {}", user.id);
                }
                let response = AuthResponse::from_result(&result, REGISTER_SUCCESS_MESSAGE);
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
            let _ = (&session, candidate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <Show when=move || banner.get().is_some()>
                    <p class="auth-message auth-message--error" role="alert">
                        {move || banner.get().unwrap_or_default()}
                    </p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (6+ characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <Show when=move || field_error.get().is_some()>
                        <p class="auth-field-error">{move || field_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? "
                    <button class="auth-link" type="button" on:click=move |_| on_switch.run(())>
                        "Sign in"
                    </button>
                </p>
            </div>
        </div>
    }
}
