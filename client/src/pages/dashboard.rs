//! Dashboard page for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads everything from the session context: the user card, role and
//! permission checks, and the minutes left on the token (refreshed on a
//! timer in the browser). Offers a rename form backed by `update_user`,
//! an explicit token check, and logout.
//!
//! Each refresh also re-checks the token: an expired token ends the session,
//! and the auth flow's `session:logout` listener returns to the login screen.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use auth::user::{Role, UserUpdate};
use leptos::prelude::*;

use crate::state::session::SessionContext;
use crate::util::forms::validate_username;

/// How often the remaining-session readout refreshes in the browser.
#[cfg(feature = "hydrate")]
const DURATION_REFRESH_SECS: u64 = 30;

/// One refresh tick: bump the readout and check the token.
///
/// Returns `false` once the session has ended, which stops the refresh loop.
#[cfg(any(test, feature = "hydrate"))]
fn refresh_session(session: &SessionContext, tick: RwSignal<u64>) -> bool {
    tick.update(|t| *t += 1);
    session.verify_token()
}

#[component]
pub fn DashboardPage(on_logout: Callback<()>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let new_name = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);
    let tick = RwSignal::new(0_u64);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let poll_session = session.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(DURATION_REFRESH_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !refresh_session(&poll_session, tick) {
                    log::info!("session expired on dashboard");
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let user = {
        let session = session.clone();
        Memo::new(move |_| session.user())
    };
    let minutes_left = {
        let session = session.clone();
        move || {
            tick.track();
            session.session_duration_minutes()
        }
    };
    let role_label = {
        let session = session.clone();
        move || if session.has_role(Role::Admin) { "Administrator" } else { "Member" }
    };
    let can_write = {
        let session = session.clone();
        move || session.has_permission("write")
    };

    let rename_session = session.clone();
    let on_rename = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_username(&new_name.get()) {
            Ok(name) => {
                if rename_session.update_user(UserUpdate::username(name)) {
                    new_name.set(String::new());
                    status.set(Some("Username updated.".to_owned()));
                }
            }
            Err(msg) => status.set(Some(msg.to_owned())),
        }
    };

    let verify_session = session.clone();
    let on_verify = move |_| {
        if verify_session.verify_token() {
            status.set(Some("Session is valid.".to_owned()));
        } else {
            on_logout.run(());
        }
    };

    let logout_session = session;
    let on_logout_click = move |_| {
        logout_session.logout();
        on_logout.run(());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <span class="dashboard-page__title">"Dashboard"</span>
                <span class="dashboard-page__spacer"></span>
                <button class="auth-button auth-button--secondary" on:click=on_logout_click>
                    "Sign Out"
                </button>
            </header>
            <section class="user-card">
                <h2>{move || user.get().map(|u| format!("Hello, {}", u.username)).unwrap_or_default()}</h2>
                <dl class="user-card__fields">
                    <dt>"Email"</dt>
                    <dd>{move || user.get().map(|u| u.email).unwrap_or_default()}</dd>
                    <dt>"User ID"</dt>
                    <dd>{move || user.get().map(|u| u.id.to_string()).unwrap_or_default()}</dd>
                    <dt>"Role"</dt>
                    <dd>{role_label}</dd>
                    <dt>"Permissions"</dt>
                    <dd>{move || user.get().map(|u| u.permissions.join(", ")).unwrap_or_default()}</dd>
                    <dt>"Session"</dt>
                    <dd>{move || format!("{} minutes remaining", minutes_left())}</dd>
                </dl>
                <button class="auth-button auth-button--secondary" on:click=on_verify>
                    "Verify Session"
                </button>
            </section>
            <Show when=can_write>
                <section class="user-card">
                    <h3>"Change username"</h3>
                    <form class="auth-form" on:submit=on_rename.clone()>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="New username"
                            prop:value=move || new_name.get()
                            on:input=move |ev| new_name.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit">"Save"</button>
                    </form>
                </section>
            </Show>
            <Show when=move || status.get().is_some()>
                <p class="auth-message">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
