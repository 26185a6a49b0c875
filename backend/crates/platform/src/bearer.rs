//! Bearer token extraction from the `Authorization` header

use http::HeaderMap;
use http::header::AUTHORIZATION;

const SCHEME: &str = "bearer";

/// Extract the token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively. Returns `None` when the header
/// is missing, not valid ASCII, uses another scheme, or carries no token.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
