//! Routing for the playground.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::session::SessionStore;
use crate::state::AppState;

/// Builds the router with every page, the health endpoint and request tracing.
///
/// # Examples
///
/// ```ignore
/// use linkline_playground::config::SessionConfig;
/// use linkline_playground::routes::create_router;
/// use linkline_playground::session::InMemorySessionStore;
/// use linkline_playground::state::AppState;
///
/// let config = SessionConfig::default();
/// let state = AppState::new(InMemorySessionStore::from_config(&config), config);
/// let router = create_router(state);
/// ```
pub fn create_router<Store>(state: AppState<Store>) -> Router
where
    Store: SessionStore,
{
    Router::new()
        .route("/", get(handlers::index::<Store>))
        .route(
            "/queue",
            get(handlers::queue_page::<Store>).post(handlers::queue_submit::<Store>),
        )
        .route(
            "/deque",
            get(handlers::deque_page::<Store>).post(handlers::deque_submit::<Store>),
        )
        .route("/profiles", get(handlers::profiles::<Store>))
        .route("/health", get(handlers::health_check::<Store>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
