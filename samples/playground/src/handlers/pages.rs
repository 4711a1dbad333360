use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, Response};

use super::visitor::Visitor;
use crate::errors::ApiError;
use crate::profiles::GROUP_MEMBERS;
use crate::render::{index_page, profiles_page};
use crate::session::SessionStore;
use crate::state::AppState;

pub async fn index<Store>(
    State(state): State<AppState<Store>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    Store: SessionStore,
{
    let visitor = Visitor::resolve(&state, &headers).await?;
    Ok(visitor.respond(Html(index_page())))
}

pub async fn profiles<Store>(
    State(state): State<AppState<Store>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    Store: SessionStore,
{
    let visitor = Visitor::resolve(&state, &headers).await?;
    Ok(visitor.respond(Html(profiles_page(GROUP_MEMBERS))))
}
