//! Client-side session state with TTL-bounded persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application root constructs one [`Session`] at startup (restoring any
//! durable record from localStorage) and provides it to pages and components
//! through Leptos context. Route guards and identity-aware rendering answer
//! through the query methods; login/logout flows mutate through the
//! transition methods so durable storage stays in sync with memory.
//!
//! EXPIRY
//! ======
//! A session is valid while `expires_at > now`. [`SessionRecord::is_expired`]
//! is the single expiry authority. Queries come in two forms: pure,
//! clock-explicit `*_at` methods that never mutate, and wall-clock wrappers
//! that first sweep an expired record out of both memory and localStorage.
//! Restoration discards expired or unparsable records, so a stale snapshot
//! can never be re-adopted after a reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{LoginPayload, User, UserRole};
use crate::util::{clock, persistence};

/// localStorage key holding the durable session record.
pub const STORAGE_KEY: &str = "fitlog_user_session";

/// Session lifetime: 3 hours 30 minutes, in milliseconds.
pub const SESSION_TTL_MS: f64 = 3.5 * 60.0 * 60.0 * 1000.0;

/// Durable session record persisted across page reloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// The authenticated user as of the last login.
    pub user: User,
    /// Absolute expiry timestamp in milliseconds since the Unix epoch.
    pub expires_at: f64,
}

impl SessionRecord {
    /// True once the record's validity window has passed.
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.expires_at <= now_ms
    }
}

/// Outcome of a construction-time restoration attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No durable record was present.
    Absent,
    /// A valid record was adopted as the live session.
    Restored,
    /// A record was present but already expired; it must be discarded.
    Expired,
}

/// The client-held session: which user is authenticated, and until when.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    record: Option<SessionRecord>,
}

impl Session {
    /// Build a session from a parsed durable record, discarding it when the
    /// validity window has already passed.
    pub fn restore_from(parsed: Option<SessionRecord>, now_ms: f64) -> (Self, RestoreOutcome) {
        match parsed {
            None => (Self::default(), RestoreOutcome::Absent),
            Some(record) if record.is_expired(now_ms) => (Self::default(), RestoreOutcome::Expired),
            Some(record) => (
                Self {
                    record: Some(record),
                },
                RestoreOutcome::Restored,
            ),
        }
    }

    /// Replace the session with `user`, valid for [`SESSION_TTL_MS`] from
    /// `now_ms`. Returns the record the caller should persist.
    pub fn set_user_at(&mut self, user: User, now_ms: f64) -> SessionRecord {
        let record = SessionRecord {
            user,
            expires_at: now_ms + SESSION_TTL_MS,
        };
        self.record = Some(record.clone());
        record
    }

    /// Drop the in-memory session. Idempotent.
    pub fn clear(&mut self) {
        self.record = None;
    }

    /// Explicit expiry transition: drop the record once its window passed.
    /// Returns true when a record was dropped.
    pub fn expire_if_due(&mut self, now_ms: f64) -> bool {
        if self.record.as_ref().is_some_and(|r| r.is_expired(now_ms)) {
            self.record = None;
            return true;
        }
        false
    }

    /// Current user, if the session is valid at `now_ms`. Pure.
    pub fn user_at(&self, now_ms: f64) -> Option<User> {
        self.record
            .as_ref()
            .filter(|r| !r.is_expired(now_ms))
            .map(|r| r.user.clone())
    }

    /// True iff a non-expired user is held at `now_ms`. Pure.
    pub fn is_logged_in_at(&self, now_ms: f64) -> bool {
        self.record.as_ref().is_some_and(|r| !r.is_expired(now_ms))
    }

    /// True iff logged in at `now_ms` with the admin role. Pure.
    pub fn is_admin_at(&self, now_ms: f64) -> bool {
        self.user_at(now_ms)
            .is_some_and(|u| u.role == UserRole::Admin)
    }

    /// Adopt a login payload: success-with-user replaces the session; a
    /// missing user is an authentication failure and leaves state untouched.
    ///
    /// A user the backend sent without `updatedAt` is normalized with
    /// `fallback_updated_at` before being stored.
    ///
    /// # Errors
    ///
    /// Returns an error string when the payload carries no user.
    pub fn adopt_login_payload(
        &mut self,
        payload: LoginPayload,
        now_ms: f64,
        fallback_updated_at: &str,
    ) -> Result<User, String> {
        let Some(login_user) = payload.user else {
            return Err("login failed: no user in response".to_owned());
        };
        let user = login_user.into_user(fallback_updated_at);
        self.set_user_at(user.clone(), now_ms);
        Ok(user)
    }

    // ---- wall-clock wrappers keeping durable storage in sync ----

    /// Restore the session from localStorage at startup.
    ///
    /// A record that is expired or fails to parse is treated as "no session"
    /// and removed so it cannot be re-adopted on the next load.
    pub fn restore() -> Self {
        let raw = persistence::load_raw(STORAGE_KEY);
        let had_raw = raw.is_some();
        let parsed = raw.as_deref().and_then(parse_record);
        let malformed = had_raw && parsed.is_none();
        let (session, outcome) = Self::restore_from(parsed, clock::now_ms());
        if malformed || outcome == RestoreOutcome::Expired {
            persistence::remove(STORAGE_KEY);
        }
        session
    }

    /// Replace the session with `user` and persist the durable record.
    pub fn set_user(&mut self, user: User) {
        let record = self.set_user_at(user, clock::now_ms());
        persistence::save_json(STORAGE_KEY, &record);
    }

    /// Drop the session from memory and durable storage. Idempotent.
    pub fn clear_user(&mut self) {
        self.clear();
        persistence::remove(STORAGE_KEY);
    }

    /// Adopt a login payload using the wall clock, persisting on success.
    ///
    /// # Errors
    ///
    /// Propagates [`Session::adopt_login_payload`] failures unchanged.
    pub fn login_with(&mut self, payload: LoginPayload) -> Result<User, String> {
        let fallback = clock::now_iso();
        let adopted = self.adopt_login_payload(payload, clock::now_ms(), &fallback)?;
        if let Some(record) = &self.record {
            persistence::save_json(STORAGE_KEY, record);
        }
        Ok(adopted)
    }

    /// Current user, sweeping an expired session out of storage first.
    pub fn user(&mut self) -> Option<User> {
        self.sweep_expired();
        self.user_at(clock::now_ms())
    }

    /// True iff a non-expired user is held, sweeping expiry first.
    pub fn is_logged_in(&mut self) -> bool {
        self.sweep_expired();
        self.is_logged_in_at(clock::now_ms())
    }

    /// True iff logged in with the admin role, sweeping expiry first.
    pub fn is_admin(&mut self) -> bool {
        self.sweep_expired();
        self.is_admin_at(clock::now_ms())
    }

    fn sweep_expired(&mut self) {
        if self.expire_if_due(clock::now_ms()) {
            persistence::remove(STORAGE_KEY);
        }
    }
}

/// Parse a raw localStorage value into a record. Malformed content is `None`.
fn parse_record(raw: &str) -> Option<SessionRecord> {
    serde_json::from_str(raw).ok()
}
