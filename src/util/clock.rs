//! Wall-clock access isolated from state logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session and page logic take explicit `now` parameters so they stay pure
//! and natively testable; only the thin wrappers here touch the browser
//! clock. Outside a browser the wrappers return epoch-zero values, which the
//! SSR render path never observes.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Current time as an ISO-8601 string (e.g. `2025-01-01T00:00:00.000Z`).
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}

/// Today's date in `YYYY-MM-DD` form.
pub fn today_ymd() -> String {
    let iso = now_iso();
    ymd_of_iso(&iso).to_owned()
}

/// The `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
///
/// Inputs shorter than a full date pass through unchanged.
pub fn ymd_of_iso(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}
