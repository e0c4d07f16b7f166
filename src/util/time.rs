//! Browser clock access.

/// Current time as an ISO-8601 string (e.g. `2026-08-29T12:00:00.000Z`).
///
/// Server-side no messages are ever recorded, so the stub returns an
/// empty string instead of pulling in a native clock dependency.
#[must_use]
pub fn now_iso8601() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
