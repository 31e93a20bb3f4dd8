//! Transient toast announcing session events.

#[cfg(test)]
#[path = "session_toast_test.rs"]
mod session_toast_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use auth::events::SessionEvent;
use leptos::prelude::*;

use crate::state::session::SessionContext;

/// How long a toast stays on screen.
pub const TOAST_VISIBLE_MS: u64 = 3_000;

/// Text shown for a session event.
pub fn toast_message(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Login(user) => format!("Welcome, {}!", user.username),
        SessionEvent::Logout => "You have been signed out.".to_owned(),
        SessionEvent::Update(user) => format!("Profile updated for {}.", user.username),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Toast {
    seq: u64,
    text: String,
}

/// Subscribes to session events for its lifetime and shows the latest one.
#[component]
pub fn SessionToast() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let toast = RwSignal::new(None::<Toast>);
    let counter = Arc::new(AtomicU64::new(0));

    let subscription = session.subscribe(move |event| {
        let seq = counter.fetch_add(1, Ordering::Relaxed) + 1;
        toast.set(Some(Toast { seq, text: toast_message(event) }));

        // Only clear the toast this timer was armed for.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_VISIBLE_MS)).await;
            toast.update(|current| {
                if current.as_ref().is_some_and(|t| t.seq == seq) {
                    *current = None;
                }
            });
        });
    });
    on_cleanup(move || {
        if let Some(id) = subscription {
            session.unsubscribe(id);
        }
    });

    view! {
        <Show when=move || toast.get().is_some()>
            <div class="toast" role="status">
                {move || toast.get().map(|t| t.text).unwrap_or_default()}
            </div>
        </Show>
    }
}
