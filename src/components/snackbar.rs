//! Transient notice banner that dismisses itself.

use leptos::prelude::*;

/// How long a notice stays visible, in milliseconds.
#[cfg(feature = "hydrate")]
const NOTICE_MS: u32 = 3000;

/// Transient notice banner bound to a shared message signal.
///
/// Whenever the message becomes non-empty the banner shows for three
/// seconds, then clears itself unless a newer message replaced it first.
#[component]
pub fn Snackbar(message: RwSignal<String>) -> impl IntoView {
    Effect::new(move || {
        let current = message.get();
        if current.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
            if message.get_untracked() == current {
                message.set(String::new());
            }
        });
    });

    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="snackbar" role="status">
                {move || message.get()}
            </div>
        </Show>
    }
}
