//! REST API helpers for authentication and the admin user roster.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with cookie
//! credentials included so the backend's HttpOnly session cookie flows.
//! Server-side (SSR): stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! degrade UI behavior without crashing hydration. Where the backend sends a
//! `{"error": ...}` body, that reason is surfaced; otherwise the HTTP status
//! is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginPayload, RosterUser};

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_failed_message(status: u16) -> String {
    format!("signup failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_email_failed_message(status: u16) -> String {
    format!("verify email failed: {status}")
}

/// Pull the backend's `{"error": ...}` reason out of a failure body.
#[cfg(any(test, feature = "hydrate"))]
fn backend_error_reason(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

/// Authenticate via `POST /users/login`.
///
/// Resolves with the raw login payload; the session layer decides whether a
/// user is actually present and mutates state accordingly.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn login(email: &str, password: &str) -> Result<LoginPayload, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&crate::net::endpoint("/users/login"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let reason = resp.text().await.ok().and_then(|b| backend_error_reason(&b));
            return Err(reason.unwrap_or_else(|| login_failed_message(status)));
        }
        resp.json::<LoginPayload>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Invalidate the server-side session via `POST /users/logout`.
///
/// The transport outcome is intentionally absorbed: callers clear local
/// session state no matter what this request does.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&crate::net::endpoint("/users/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("logout request failed; clearing local session anyway: {e}");
        }
    }
}

/// Create a pending account via `POST /users/signup`.
///
/// Does not touch session state; callers chain email verification and login.
///
/// # Errors
///
/// Returns the backend's reason (e.g. "Email already in use.") or the HTTP
/// status when the request is rejected.
pub async fn signup(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&crate::net::endpoint("/users/signup"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let reason = resp.text().await.ok().and_then(|b| backend_error_reason(&b));
            return Err(reason.unwrap_or_else(|| signup_failed_message(status)));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Complete signup via `POST /users/verify-email`.
///
/// Resolves with the server's confirmation message. Does not touch session
/// state; callers chain a login on success.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be parsed.
pub async fn verify_email(email: &str, code: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post(&crate::net::endpoint("/users/verify-email"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let reason = resp.text().await.ok().and_then(|b| backend_error_reason(&b));
            return Err(reason.unwrap_or_else(|| verify_email_failed_message(status)));
        }
        let body: super::types::ApiMessage = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}

/// Fetch the user roster from `GET /users`.
///
/// Admin-only on the backend; returns `None` when the caller is not
/// authorized, on transport failure, or on the server.
pub async fn fetch_users() -> Option<Vec<RosterUser>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&crate::net::endpoint("/users"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<RosterUser>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
