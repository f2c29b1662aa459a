//! Authentication context: token persistence and the expiry gate.
//!
//! The bearer token has exactly one write path (login stores it, logout and
//! expiry handling clear it); every other part of the client reads it
//! through [`stored_token`].

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use gloo_storage::{LocalStorage, Storage};
use shared::models::TokenClaims;

const TOKEN_KEY: &str = "token";

/// Read the persisted bearer token, if any.
pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

/// Persist a freshly issued bearer token.
pub fn persist_token(token: &str) {
    let _ = LocalStorage::set(TOKEN_KEY, token);
}

/// Drop the persisted token.
pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

/// Whether the given token should be treated as expired.
///
/// A missing token, an undecodable token, and a token without an expiry
/// claim all count as expired; decode failures never propagate.
pub fn is_token_expired(token: Option<&str>) -> bool {
    match token {
        None => true,
        Some(token) => expired_at(token, Utc::now().timestamp()),
    }
}

/// Expiry check against an explicit clock, in seconds since the epoch.
pub fn expired_at(token: &str, now: i64) -> bool {
    match decode_claims(token) {
        Some(TokenClaims { exp: Some(exp), .. }) => exp < now,
        _ => true,
    }
}

fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.c2lnbmF0dXJl",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_future_expiry_is_not_expired() {
        let token = token_with_payload(r#"{"exp": 2000}"#);
        assert!(!expired_at(&token, 1000));
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let token = token_with_payload(r#"{"exp": 500}"#);
        assert!(expired_at(&token, 1000));
    }

    #[test]
    fn test_expiry_boundary_is_not_expired() {
        // exp == now fails the strict `exp < now` comparison
        let token = token_with_payload(r#"{"exp": 1000}"#);
        assert!(!expired_at(&token, 1000));
    }

    #[test]
    fn test_missing_expiry_claim_is_expired() {
        let token = token_with_payload(r#"{"sub": "42"}"#);
        assert!(expired_at(&token, 1000));
    }

    #[test]
    fn test_malformed_token_is_expired() {
        assert!(expired_at("definitely-not-a-jwt", 1000));
        assert!(expired_at("a.%%%%.c", 1000));
        assert!(expired_at("", 1000));
    }

    #[test]
    fn test_undecodable_payload_is_expired() {
        let token = format!("header.{}.sig", URL_SAFE_NO_PAD.encode("not json"));
        assert!(expired_at(&token, 1000));
    }

    #[test]
    fn test_missing_token_is_expired() {
        assert!(is_token_expired(None));
    }

    #[test]
    fn test_repeated_checks_are_stable() {
        let token = token_with_payload(r#"{"exp": 2000}"#);
        let first = expired_at(&token, 1000);
        let second = expired_at(&token, 1000);
        assert_eq!(first, second);
    }
}
