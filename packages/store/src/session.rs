//! # Admin session guard
//!
//! Decides, once per page load, whether the admin-only controls of the members
//! page are shown. The decision reads two values from a [`KeyValueStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`ADMIN_KEY_STORAGE_KEY`] (`"adminKey"`) | the admin token |
//! | [`EXPIRES_AT_STORAGE_KEY`] (`"expiresAt"`) | expiry as epoch milliseconds, string encoded |
//!
//! and compares them against a reference token baked in at build time through the
//! `LAB_ADMIN_KEY` environment variable ([`REFERENCE_ADMIN_KEY`]).
//!
//! The session is admin if and only if:
//!
//! 1. both stored values are present and non-empty,
//! 2. a non-empty reference token was compiled in,
//! 3. the stored token equals the reference exactly,
//! 4. the current time is strictly before the stored expiry.
//!
//! Any other combination silently yields a non-admin session. Nothing is written
//! back and nothing is renewed.
//!
//! This is a visibility switch only. The reference token ships inside the client
//! bundle, so it provides no access control of its own.

use crate::kv::KeyValueStore;

/// Storage key holding the admin token.
pub const ADMIN_KEY_STORAGE_KEY: &str = "adminKey";

/// Storage key holding the session expiry (epoch milliseconds).
pub const EXPIRES_AT_STORAGE_KEY: &str = "expiresAt";

/// Reference admin token, fixed at compile time.
pub const REFERENCE_ADMIN_KEY: Option<&str> = option_env!("LAB_ADMIN_KEY");

/// Result of evaluating the stored admin credentials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminSession {
    pub is_admin: bool,
}

impl AdminSession {
    /// A session with the admin controls hidden.
    pub fn visitor() -> Self {
        Self::default()
    }

    /// Evaluate the stored credentials against the compiled-in reference token
    /// and the current wall clock.
    pub fn load(store: impl KeyValueStore) -> Self {
        Self::evaluate(store, REFERENCE_ADMIN_KEY, crate::clock::now_millis())
    }

    /// Evaluate the stored credentials against an explicit reference token and
    /// time (epoch milliseconds).
    pub fn evaluate(store: impl KeyValueStore, reference: Option<&str>, now_ms: i64) -> Self {
        let is_admin = Self::check(&store, reference, now_ms);
        tracing::debug!(is_admin, "evaluated admin session");
        Self { is_admin }
    }

    fn check(store: &impl KeyValueStore, reference: Option<&str>, now_ms: i64) -> bool {
        let Some(stored) = store.get(ADMIN_KEY_STORAGE_KEY).filter(|s| !s.is_empty()) else {
            return false;
        };
        let Some(reference) = reference.filter(|r| !r.is_empty()) else {
            return false;
        };
        if stored != reference {
            return false;
        }
        let Some(expires) = store.get(EXPIRES_AT_STORAGE_KEY).filter(|s| !s.is_empty()) else {
            return false;
        };
        match parse_leading_int(&expires) {
            Some(expires_at) => now_ms < expires_at,
            None => false,
        }
    }
}

/// Parse the leading integer of `s`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, parsing stops at
/// the first non-digit, and trailing text is ignored (`"1700000000000ms"` reads
/// as `1700000000000`). A digit run too long for `i64` saturates to
/// `i64::MAX` (`i64::MIN` when negative). Returns `None` when no digit is found.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    // All digits, so the only possible parse error is overflow
    let value = match rest[..digits_len].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    const NOW: i64 = 1_700_000_000_000;
    const SECRET: &str = "lab-secret";

    fn store_with(key: Option<&str>, expires: Option<&str>) -> MemoryStore {
        let store = MemoryStore::new();
        if let Some(key) = key {
            store.insert(ADMIN_KEY_STORAGE_KEY, key);
        }
        if let Some(expires) = expires {
            store.insert(EXPIRES_AT_STORAGE_KEY, expires);
        }
        store
    }

    #[test]
    fn test_matching_key_and_future_expiry_is_admin() {
        let store = store_with(Some(SECRET), Some("1700000060000"));
        assert!(AdminSession::evaluate(&store, Some(SECRET), NOW).is_admin);
    }

    #[test]
    fn test_expired_session_is_visitor() {
        let store = store_with(Some(SECRET), Some("1699999999999"));
        assert!(!AdminSession::evaluate(&store, Some(SECRET), NOW).is_admin);
    }

    #[test]
    fn test_expiry_equal_to_now_is_visitor() {
        let store = store_with(Some(SECRET), Some(&NOW.to_string()));
        assert!(!AdminSession::evaluate(&store, Some(SECRET), NOW).is_admin);
    }

    #[test]
    fn test_mismatched_key_is_visitor() {
        let store = store_with(Some("lab-secret "), Some("1700000060000"));
        assert!(!AdminSession::evaluate(&store, Some(SECRET), NOW).is_admin);
    }

    #[test]
    fn test_missing_values_are_visitor() {
        let no_key = store_with(None, Some("1700000060000"));
        assert!(!AdminSession::evaluate(&no_key, Some(SECRET), NOW).is_admin);

        let no_expiry = store_with(Some(SECRET), None);
        assert!(!AdminSession::evaluate(&no_expiry, Some(SECRET), NOW).is_admin);

        let empty_key = store_with(Some(""), Some("1700000060000"));
        assert!(!AdminSession::evaluate(&empty_key, Some(""), NOW).is_admin);
    }

    #[test]
    fn test_missing_reference_is_visitor() {
        let store = store_with(Some(SECRET), Some("1700000060000"));
        assert!(!AdminSession::evaluate(&store, None, NOW).is_admin);
        assert!(!AdminSession::evaluate(&store, Some(""), NOW).is_admin);
    }

    #[test]
    fn test_unparseable_expiry_is_visitor() {
        let store = store_with(Some(SECRET), Some("tomorrow"));
        assert!(!AdminSession::evaluate(&store, Some(SECRET), NOW).is_admin);
    }

    #[test]
    fn test_expiry_with_trailing_text_still_counts() {
        let store = store_with(Some(SECRET), Some("1700000060000ms"));
        assert!(AdminSession::evaluate(&store, Some(SECRET), NOW).is_admin);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  42abc"), Some(42));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_far_future_expiry_is_admin() {
        let store = store_with(Some(SECRET), Some("99999999999999999999"));
        assert!(AdminSession::evaluate(&store, Some(SECRET), NOW).is_admin);
    }

    #[test]
    fn test_far_past_expiry_is_visitor() {
        let store = store_with(Some(SECRET), Some("-99999999999999999999"));
        assert!(!AdminSession::evaluate(&store, Some(SECRET), NOW).is_admin);
    }

    #[test]
    fn test_visitor_default() {
        assert_eq!(AdminSession::visitor(), AdminSession { is_admin: false });
    }
}
