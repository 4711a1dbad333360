//! Session cookie handling.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

use super::SessionId;
use crate::config::SessionConfig;

/// Finds the session id in the request's `Cookie` headers.
///
/// Returns `None` when the cookie is missing or its value is not a session id.
pub fn read_session_id(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| SessionId::parse(value))
}

/// Builds the `Set-Cookie` value that keeps `identifier` alive for the session TTL.
pub fn session_cookie(identifier: &SessionId, config: &SessionConfig) -> String {
    let mut cookie = format!(
        "{}={identifier}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name,
        config.time_to_live.as_secs()
    );
    if config.secure_cookie {
        cookie.push_str("; Secure");
    }
    cookie
}
