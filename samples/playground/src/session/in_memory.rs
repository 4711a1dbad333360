//! Process-local session storage.
//!
//! Sessions expire after a configurable idle time and the number of live
//! sessions is capped. All writes go through one lock, which serializes
//! concurrent requests of the same session.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use super::{SessionData, SessionError, SessionId, SessionStore};
use crate::config::SessionConfig;

#[derive(Debug)]
struct SessionRecord {
    data: SessionData,
    last_access: Instant,
}

impl SessionRecord {
    fn is_expired(&self, now: Instant, time_to_live: Duration) -> bool {
        now.duration_since(self.last_access) >= time_to_live
    }
}

#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionRecord>>,
    time_to_live: Duration,
    capacity: usize,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new(time_to_live: Duration, capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            time_to_live,
            capacity,
        }
    }

    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.time_to_live, config.capacity)
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(
        &self,
        identifier: &SessionId,
    ) -> impl Future<Output = Result<Option<SessionData>, SessionError>> + Send {
        let identifier = *identifier;
        async move {
            let now = Instant::now();
            {
                let sessions = self.sessions.read().await;
                match sessions.get(&identifier) {
                    None => return Ok(None),
                    Some(record) if !record.is_expired(now, self.time_to_live) => {
                        return Ok(Some(record.data.clone()));
                    }
                    Some(_) => {}
                }
            }

            let mut sessions = self.sessions.write().await;
            // Another request may have refreshed the record while the lock was released.
            if let Some(record) = sessions.get(&identifier) {
                if !record.is_expired(Instant::now(), self.time_to_live) {
                    return Ok(Some(record.data.clone()));
                }
                sessions.remove(&identifier);
                tracing::debug!(session = %identifier, "Session expired");
            }
            Ok(None)
        }
    }

    fn modify<F, R>(
        &self,
        identifier: &SessionId,
        modification: F,
    ) -> impl Future<Output = Result<R, SessionError>> + Send
    where
        F: FnOnce(&mut SessionData) -> R + Send,
        R: Send,
    {
        let identifier = *identifier;
        async move {
            let mut sessions = self.sessions.write().await;
            let now = Instant::now();

            if sessions
                .get(&identifier)
                .is_some_and(|record| record.is_expired(now, self.time_to_live))
            {
                tracing::debug!(session = %identifier, "Session expired");
                sessions.remove(&identifier);
            }

            if !sessions.contains_key(&identifier) && sessions.len() >= self.capacity {
                let before = sessions.len();
                sessions.retain(|_, record| !record.is_expired(now, self.time_to_live));
                tracing::debug!(purged = before - sessions.len(), "Purged expired sessions");

                if sessions.len() >= self.capacity {
                    tracing::warn!(capacity = self.capacity, "Session capacity exhausted");
                    return Err(SessionError::CapacityExhausted {
                        capacity: self.capacity,
                    });
                }
            }

            let record = sessions.entry(identifier).or_insert_with(|| SessionRecord {
                data: SessionData::default(),
                last_access: now,
            });
            record.last_access = now;
            Ok(modification(&mut record.data))
        }
    }

    fn remove(&self, identifier: &SessionId) -> impl Future<Output = bool> + Send {
        let identifier = *identifier;
        async move {
            let mut sessions = self.sessions.write().await;
            let now = Instant::now();
            sessions
                .remove(&identifier)
                .is_some_and(|record| !record.is_expired(now, self.time_to_live))
        }
    }

    fn session_count(&self) -> impl Future<Output = usize> + Send {
        async move {
            let sessions = self.sessions.read().await;
            let now = Instant::now();
            sessions
                .values()
                .filter(|record| !record.is_expired(now, self.time_to_live))
                .count()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
