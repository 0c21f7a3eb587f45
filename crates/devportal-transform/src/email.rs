//! Newsletter sign-up email validation.

use std::sync::LazyLock;

use regex::Regex;

/// Inline error shown under the sign-up field.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

/// Whether `email` looks like a deliverable address. Case-insensitive.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(&email.to_lowercase())
}

/// The inline validation message for the current field value, if any.
pub fn email_error_message(email: &str) -> Option<&'static str> {
    (!is_valid_email(email)).then_some(INVALID_EMAIL_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("First.Last@Sub.Example.ORG"));
        assert!(is_valid_email("dev+flow@example.io"));
        assert!(is_valid_email("\"quoted name\"@example.com"));
        assert!(is_valid_email("ops@[192.168.0.1]"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(".a@b.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn error_message_only_for_invalid() {
        assert_eq!(email_error_message("a@b.com"), None);
        assert_eq!(email_error_message("nope"), Some(INVALID_EMAIL_MESSAGE));
    }
}
