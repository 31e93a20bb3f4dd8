//! Auth flow: renders the login, register, or dashboard screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The current screen is a [`Screen`] signal driven only through
//! [`Screen::next`]. Screens report outcomes through callbacks; a
//! `session:logout` listener and a post-bootstrap effect keep the screen in
//! line with the session when it changes underneath (expiry, restore).

use auth::events::SessionEvent;
use leptos::prelude::*;

use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::route::{RouteAction, Screen};
use crate::state::session::SessionContext;

/// One-shot notice shown on the login screen after registration.
pub const REGISTERED_NOTICE: &str = "Account created. Please sign in.";

#[component]
pub fn AuthFlow() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let screen = RwSignal::new(Screen::default());
    let notice = RwSignal::new(None::<String>);

    let go = move |action: RouteAction| {
        let current = screen.get_untracked();
        let next = current.next(action);
        if next != current {
            screen.set(next);
        }
    };

    let subscription = session.subscribe(move |event| {
        if matches!(event, SessionEvent::Logout) {
            go(RouteAction::Logout);
        }
    });
    let listener_owner = session.clone();
    on_cleanup(move || {
        if let Some(id) = subscription {
            listener_owner.unsubscribe(id);
        }
    });

    let watched = session.clone();
    Effect::new(move || {
        if watched.loading() {
            return;
        }
        let authenticated = watched.is_authenticated();
        let current = screen.get_untracked();
        let next = current.reconcile(authenticated);
        if next != current {
            screen.set(next);
        }
    });

    let on_login_success = Callback::new(move |()| go(RouteAction::Succeed));
    let on_to_register = Callback::new(move |()| {
        notice.set(None);
        go(RouteAction::SwitchToRegister);
    });
    let on_registered = Callback::new(move |()| {
        notice.set(Some(REGISTERED_NOTICE.to_owned()));
        go(RouteAction::Succeed);
    });
    let on_to_login = Callback::new(move |()| go(RouteAction::SwitchToLogin));
    let on_logout = Callback::new(move |()| go(RouteAction::Logout));

    let ready = session;
    view! {
        <Show
            when=move || !ready.loading()
            fallback=|| {
                view! {
                    <div class="auth-page">
                        <p class="auth-page__status">"Checking session..."</p>
                    </div>
                }
            }
        >
            {move || match screen.get() {
                Screen::Login => {
                    view! { <LoginPage on_success=on_login_success on_switch=on_to_register notice=notice/> }
                        .into_any()
                }
                Screen::Register => {
                    view! { <RegisterPage on_success=on_registered on_switch=on_to_login/> }.into_any()
                }
                Screen::Dashboard => view! { <DashboardPage on_logout=on_logout/> }.into_any(),
            }}
        </Show>
    }
}
