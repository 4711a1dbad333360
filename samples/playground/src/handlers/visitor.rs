use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};

use crate::errors::ApiError;
use crate::session::cookie::{read_session_id, session_cookie};
use crate::session::{SessionData, SessionId, SessionStore};
use crate::state::AppState;

/// The session a request belongs to, with the cookie that keeps it alive.
pub(super) struct Visitor {
    pub identifier: SessionId,
    /// Data of the live session named by the cookie; `None` for a new session.
    pub session: Option<SessionData>,
    cookie: HeaderValue,
}

impl Visitor {
    /// Resolves the request's session.
    ///
    /// Only identifiers with a live record in the store are adopted. A missing,
    /// malformed, unknown or expired cookie gets a freshly generated identifier,
    /// so a client can never choose its own session id.
    pub async fn resolve<Store>(
        state: &AppState<Store>,
        headers: &HeaderMap,
    ) -> Result<Self, ApiError>
    where
        Store: SessionStore,
    {
        let presented = read_session_id(headers, &state.session.cookie_name);
        let live = match presented {
            Some(identifier) => state
                .store
                .load(&identifier)
                .await?
                .map(|data| (identifier, data)),
            None => None,
        };

        let (identifier, session) = match live {
            Some((identifier, data)) => (identifier, Some(data)),
            None => {
                let identifier = SessionId::generate();
                tracing::debug!(
                    session = %identifier,
                    replaced = presented.is_some(),
                    "Starting new session"
                );
                (identifier, None)
            }
        };

        let cookie = HeaderValue::from_str(&session_cookie(&identifier, &state.session))
            .map_err(|error| ApiError::internal(format!("invalid session cookie: {error}")))?;

        Ok(Self {
            identifier,
            session,
            cookie,
        })
    }

    /// Attaches the refreshed session cookie to `response`.
    pub fn respond(self, response: impl IntoResponse) -> Response {
        ([(SET_COOKIE, self.cookie)], response).into_response()
    }
}
