//! Caller-identity extraction from bearer tokens.
//!
//! Reads the `Authorization` header, decodes the payload segment of the
//! three-part token, and pulls the `preferred_username` claim. The result
//! feeds a log statement only; it is never stored on the exchange or
//! forwarded downstream, and the token is never validated cryptographically.
//! Because this is observability enrichment rather than access control, every
//! decode failure degrades to an empty display name instead of failing the
//! request — stricter validation belongs to the authorization layer, not
//! here.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use http::HeaderMap;

use crate::headers;

const BEARER_PREFIX: &str = "Bearer ";
const USERNAME_CLAIM: &str = "preferred_username";

/// Why a token's payload could not be decoded. Logged at debug, never
/// propagated past [`extract_display_name`].
#[derive(Debug, thiserror::Error)]
enum TokenError {
    #[error("token does not have three dot-delimited segments")]
    SegmentCount,

    #[error("payload segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Display name of the caller, or an empty string when the request carries no
/// token, the token is malformed, or the claim is missing.
///
/// The scheme prefix is matched as the case-sensitive literal `Bearer `; a
/// token supplied without it is decoded as-is.
#[must_use]
pub fn extract_display_name(request_headers: &HeaderMap) -> String {
    let Some(raw) = headers::auth_token(request_headers) else {
        return String::new();
    };

    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);
    match decode_username(token) {
        Ok(name) => name,
        Err(e) => {
            tracing::debug!(error = %e, "could not extract identity from token");
            String::new()
        }
    }
}

fn decode_username(token: &str) -> Result<String, TokenError> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(TokenError::SegmentCount),
    };

    let body = String::from_utf8(URL_SAFE_NO_PAD.decode(payload)?)?;
    let claims: serde_json::Value = serde_json::from_str(&body)?;
    let claims = claims.as_object().ok_or(TokenError::NotAnObject)?;

    Ok(claims
        .get(USERNAME_CLAIM)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_owned())
}
