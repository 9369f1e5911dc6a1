use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Loose shape check for an email address: something, `@`, a dotted domain.
/// Invalid input is simply `false`.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_address() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["a@b", "a@@b.co", "a b@c.co", "", "@b.co", "a@.co "] {
            assert!(!validate_email(email), "{:?} should be rejected", email);
        }
    }
}
