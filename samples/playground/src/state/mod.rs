use std::sync::Arc;

use crate::config::SessionConfig;
use crate::session::SessionStore;

// =============================================================================
// AppState
// =============================================================================

/// Shared handler state: the session store and the cookie settings.
pub struct AppState<Store>
where
    Store: SessionStore,
{
    pub store: Arc<Store>,

    pub session: Arc<SessionConfig>,
}

impl<Store> AppState<Store>
where
    Store: SessionStore,
{
    #[must_use]
    pub fn new(store: Store, session: SessionConfig) -> Self {
        Self {
            store: Arc::new(store),
            session: Arc::new(session),
        }
    }
}

impl<Store> Clone for AppState<Store>
where
    Store: SessionStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            session: Arc::clone(&self.session),
        }
    }
}
