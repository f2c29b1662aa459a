//! Client-side form validation for the auth pages.
//!
//! Validation failures never reach the network layer; the first failing
//! check becomes the inline error message.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Loose email shape check, matching what the form inputs enforce.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Validate the login form; returns the first failing message.
pub fn validate_login(email: &str, password: &str) -> Option<String> {
    if email.trim().is_empty() || password.is_empty() {
        return Some("Please fill in all fields.".to_string());
    }
    if !is_valid_email(email) {
        return Some("Please enter a valid email address.".to_string());
    }
    None
}

/// Validate the signup form; returns the first failing message.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Option<String> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Some("Please fill in all fields.".to_string());
    }
    if !is_valid_email(email) {
        return Some("Please enter a valid email address.".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long."
        ));
    }
    if password != confirm_password {
        return Some("Passwords do not match.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("user@bank.ps", true)]
    #[test_case("user@bankofpalestine.com", true)]
    #[test_case("user@bank", false; "missing tld")]
    #[test_case("user bank.ps", false; "missing at sign")]
    #[test_case("", false; "empty")]
    #[test_case("user@@bank.ps", false; "doubled at sign")]
    fn test_email_shape(value: &str, expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }

    #[test]
    fn test_login_requires_all_fields() {
        assert!(validate_login("", "secret").is_some());
        assert!(validate_login("user@bank.ps", "").is_some());
        assert!(validate_login("user@bank.ps", "secret").is_none());
    }

    #[test]
    fn test_signup_enforces_password_length() {
        let error = validate_signup("Lina", "lina@bank.ps", "short", "short");
        assert!(error.unwrap().contains("at least 8"));
    }

    #[test]
    fn test_signup_rejects_mismatched_passwords() {
        let error = validate_signup("Lina", "lina@bank.ps", "password123", "password124");
        assert_eq!(error.as_deref(), Some("Passwords do not match."));
    }

    #[test]
    fn test_valid_signup_passes() {
        assert!(validate_signup("Lina", "lina@bank.ps", "password123", "password123").is_none());
    }
}
