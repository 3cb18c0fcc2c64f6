//! Clock
//!
//! Wall-clock source for new milestone ids.

/// Milliseconds since the Unix epoch
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
