//! Common validation utilities.

use once_cell::sync::Lazy;
use regex::Regex;

/// Permissive RFC-5322-ish email shape: local part, one `@`, dotted domain.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Usernames: 3-100 chars, letters/digits/underscore/dot/dash.
static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]{3,100}$").expect("valid username regex"));

/// Check whether a string looks like a deliverable email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check whether a string is an acceptable username
pub fn is_valid_username(value: &str) -> bool {
    USERNAME_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_email_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
    }

    #[test]
    fn username_length_and_charset_bounds() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("a.b-c_3"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username(&"x".repeat(101)));
    }
}
