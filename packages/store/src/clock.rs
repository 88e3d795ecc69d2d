//! Wall-clock time in epoch milliseconds.

/// Current time as milliseconds since the Unix epoch.
///
/// Uses `js_sys::Date::now()` on WASM, where `std::time::SystemTime` panics,
/// and `SystemTime` everywhere else.
pub fn now_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}
