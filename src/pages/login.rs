//! Login page: email + password form feeding the session manager.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::snackbar::Snackbar;
use crate::state::session::Session;

/// Trim and require both credential fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page — authenticates and adopts the returned user into the session.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    notice.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match crate::net::api::login(&email_value, &password_value).await {
                    Ok(payload) => session
                        .try_update(|s| s.login_with(payload))
                        .unwrap_or_else(|| Err("session unavailable".to_owned())),
                    Err(e) => Err(e),
                };
                match outcome {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        notice.set("Login failed: invalid credentials".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FitLog"</h1>
                <p class="login-card__subtitle">"Log in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
                <p class="login-card__alt">
                    "No account? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
            <Snackbar message=notice/>
        </div>
    }
}
