//! Signup page: account creation, email verification, then a chained login.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::snackbar::Snackbar;
use crate::state::session::Session;

/// Which step of the signup flow is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SignupPhase {
    /// Collecting email + password.
    #[default]
    Form,
    /// Account created; collecting the emailed verification code.
    Verify,
}

/// Trim and require both account fields.
fn validate_signup_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trim and require a verification code.
fn validate_code_input(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.is_empty() {
        return Err("Enter the verification code from your email.");
    }
    Ok(code.to_owned())
}

/// Signup page — creates a pending account, verifies the email code, and
/// chains a login so the user lands signed in.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let phase = RwSignal::new(SignupPhase::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_signup_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    notice.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&email_value, &password_value).await {
                Ok(()) => {
                    phase.set(SignupPhase::Verify);
                    notice.set("Account created. Check your email for a verification code.".to_owned());
                }
                Err(e) => notice.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let code_value = match validate_code_input(&code.get()) {
            Ok(value) => value,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_email(&email_value, &code_value).await {
                Ok(_) => {
                    // Verified; chain a login so the user lands signed in.
                    let outcome =
                        match crate::net::api::login(&email_value, &password_value).await {
                            Ok(payload) => session
                                .try_update(|s| s.login_with(payload))
                                .unwrap_or_else(|| Err("session unavailable".to_owned())),
                            Err(e) => Err(e),
                        };
                    match outcome {
                        Ok(_) => {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/");
                            }
                        }
                        Err(e) => {
                            log::warn!("post-signup login failed: {e}");
                            notice.set(
                                "Signup succeeded, but login failed. Please try logging in."
                                    .to_owned(),
                            );
                            busy.set(false);
                        }
                    }
                }
                Err(e) => {
                    notice.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, code_value, session);
        }
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Create your account"</h1>
                <Show
                    when=move || phase.get() == SignupPhase::Verify
                    fallback=move || {
                        view! {
                            <form class="signup-form" on:submit=on_signup>
                                <input
                                    class="signup-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    class="signup-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button class="signup-button" type="submit" disabled=move || busy.get()>
                                    "Sign Up"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="signup-form" on:submit=on_verify>
                        <input
                            class="signup-input signup-input--code"
                            type="text"
                            placeholder="Verification code"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                        <button class="signup-button" type="submit" disabled=move || busy.get()>
                            "Verify Email"
                        </button>
                    </form>
                </Show>
                <p class="signup-card__alt">
                    "Already have an account? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
            <Snackbar message=notice/>
        </div>
    }
}
