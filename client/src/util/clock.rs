//! Wall-clock access for locally stamped records.

/// Current time as an ISO 8601 string in the browser; empty during SSR.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
