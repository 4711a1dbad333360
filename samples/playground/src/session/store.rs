use std::future::Future;

use thiserror::Error;

use super::{SessionData, SessionId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session capacity of {capacity} reached")]
    CapacityExhausted { capacity: usize },
}

/// Storage port for session data.
///
/// Implementations must serialize `modify` calls so that one request's
/// load, mutation and save of a session cannot interleave with another's.
pub trait SessionStore: Send + Sync + 'static {
    /// Returns a copy of the session's data, or `None` for an unknown or expired session.
    fn load(
        &self,
        identifier: &SessionId,
    ) -> impl Future<Output = Result<Option<SessionData>, SessionError>> + Send;

    /// Runs `modification` against the session's data, creating an empty session first
    /// when none exists, and stores the result.
    fn modify<F, R>(
        &self,
        identifier: &SessionId,
        modification: F,
    ) -> impl Future<Output = Result<R, SessionError>> + Send
    where
        F: FnOnce(&mut SessionData) -> R + Send,
        R: Send;

    /// Discards the session. Returns whether a live session was removed.
    fn remove(&self, identifier: &SessionId) -> impl Future<Output = bool> + Send;

    /// Number of live sessions.
    fn session_count(&self) -> impl Future<Output = usize> + Send;
}
