use serde::{Deserialize, Serialize};

/// Form-encoded credentials for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account identifier; the login form submits the email address here.
    pub username: String,

    /// Plain-text password, sent over the form body.
    pub password: String,
}

/// Bearer token issued by the backend on a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// The opaque bearer token.
    pub access_token: String,

    /// Token scheme, normally `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
}

/// JSON payload for `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// Full display name.
    pub name: String,

    /// Email address used as the account identifier.
    pub email: String,

    /// Plain-text password.
    pub password: String,
}

/// Confirmation returned by `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupResponse {
    /// Human-readable confirmation message.
    #[serde(default)]
    pub message: String,
}

/// The subset of JWT claims the client inspects.
///
/// The token is otherwise treated as opaque; only the expiry is decoded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Expiry timestamp in seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,

    /// Subject the token was issued for.
    #[serde(default)]
    pub sub: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_without_expiry() {
        let claims: TokenClaims = serde_json::from_str("{}").unwrap();
        assert_eq!(claims.exp, None);
        assert_eq!(claims.sub, None);
    }

    #[test]
    fn test_claims_ignore_unknown_fields() {
        let claims: TokenClaims =
            serde_json::from_str(r#"{"exp": 1700000000, "sub": "42", "iat": 1699990000}"#).unwrap();
        assert_eq!(claims.exp, Some(1_700_000_000));
        assert_eq!(claims.sub.as_deref(), Some("42"));
    }

    #[test]
    fn test_token_response_without_type() {
        let response: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.token_type, None);
    }
}
