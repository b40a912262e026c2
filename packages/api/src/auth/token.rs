//! Token extraction from login/registration responses.
//!
//! Backends disagree on where the token goes. Accepted shapes, in order:
//! `{"token": ..}`, `{"accessToken": ..}`, `{"data": {"token": ..}}` or a JSON
//! string. Anything that is not JSON carries no token.

use serde_json::Value;

pub fn extract_token(body: &Value) -> Option<String> {
    let candidate = match body {
        Value::String(s) => Some(s.as_str()),
        Value::Object(_) => body
            .get("token")
            .and_then(Value::as_str)
            .or_else(|| body.get("accessToken").and_then(Value::as_str))
            .or_else(|| body.pointer("/data/token").and_then(Value::as_str)),
        _ => None,
    };
    candidate
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Parse a raw response body.
pub fn parse_token_body(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| extract_token(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shapes() {
        assert_eq!(parse_token_body(r#"{"token":"T1"}"#).as_deref(), Some("T1"));
        assert_eq!(parse_token_body(r#"{"accessToken":"T2"}"#).as_deref(), Some("T2"));
        assert_eq!(parse_token_body(r#"{"data":{"token":"T3"}}"#).as_deref(), Some("T3"));
        assert_eq!(parse_token_body(r#""T4""#).as_deref(), Some("T4"));
    }

    #[test]
    fn test_no_token() {
        assert!(parse_token_body("").is_none());
        assert!(parse_token_body(r#"{"message":"Registered"}"#).is_none());
        assert!(parse_token_body(r#"{"token":""}"#).is_none());
        assert!(parse_token_body("<html><body>hi</body></html>").is_none());
        assert!(parse_token_body("User registered").is_none());
        assert!(parse_token_body("Registered").is_none());
        assert!(parse_token_body("eyJhbGciOi.x.y").is_none());
    }
}
