use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::session::SessionStore;
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub sessions: usize,
}

pub async fn health_check<Store>(State(state): State<AppState<Store>>) -> Json<HealthResponse>
where
    Store: SessionStore,
{
    Json(HealthResponse {
        status: "ok",
        version: VERSION,
        sessions: state.store.session_count().await,
    })
}
