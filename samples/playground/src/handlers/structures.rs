//! Queue and deque pages.
//!
//! `GET` renders the stored sequence and takes the pending notice. `POST`
//! performs at most one operation against the stored sequence, stores the
//! result with its notice, and redirects back to the page.

use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, Redirect, Response};

use super::visitor::Visitor;
use crate::errors::ApiError;
use crate::operations::{Action, DequeAction, OperationForm, QueueAction, perform};
use crate::render::structure_page;
use crate::session::{SessionStore, Structure};
use crate::state::AppState;

// =============================================================================
// Queue
// =============================================================================

pub async fn queue_page<Store>(
    State(state): State<AppState<Store>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    Store: SessionStore,
{
    show(&state, &headers, Structure::Queue).await
}

pub async fn queue_submit<Store>(
    State(state): State<AppState<Store>>,
    headers: HeaderMap,
    Form(form): Form<OperationForm>,
) -> Result<Response, ApiError>
where
    Store: SessionStore,
{
    submit::<Store, QueueAction>(&state, &headers, &form, Structure::Queue).await
}

// =============================================================================
// Deque
// =============================================================================

pub async fn deque_page<Store>(
    State(state): State<AppState<Store>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    Store: SessionStore,
{
    show(&state, &headers, Structure::Deque).await
}

pub async fn deque_submit<Store>(
    State(state): State<AppState<Store>>,
    headers: HeaderMap,
    Form(form): Form<OperationForm>,
) -> Result<Response, ApiError>
where
    Store: SessionStore,
{
    submit::<Store, DequeAction>(&state, &headers, &form, Structure::Deque).await
}

// =============================================================================
// Shared Flow
// =============================================================================

async fn show<Store>(
    state: &AppState<Store>,
    headers: &HeaderMap,
    structure: Structure,
) -> Result<Response, ApiError>
where
    Store: SessionStore,
{
    let mut visitor = Visitor::resolve(state, headers).await?;
    let mut session = visitor.session.take().unwrap_or_default();

    // Items and notice are read under one modification so a concurrent
    // submission cannot pair a fresh notice with stale items. Plain views
    // stay read-only and never create sessions.
    let (items, message) = if session.message(structure).is_some() {
        state
            .store
            .modify(&visitor.identifier, |data| {
                (data.items(structure).to_vec(), data.take_message(structure))
            })
            .await?
    } else {
        (session.take_items(structure), None)
    };

    let page = structure_page(structure, &items, message.as_deref());
    Ok(visitor.respond(Html(page)))
}

async fn submit<Store, A>(
    state: &AppState<Store>,
    headers: &HeaderMap,
    form: &OperationForm,
    structure: Structure,
) -> Result<Response, ApiError>
where
    Store: SessionStore,
    A: Action + Send,
{
    let visitor = Visitor::resolve(state, headers).await?;
    let action = A::parse(form);
    let action_name = action.as_ref().map_or("none", Action::name);

    let length = state
        .store
        .modify(&visitor.identifier, move |data| {
            let outcome = perform(data.take_items(structure), action);
            let length = outcome.items.len();
            data.replace_items(structure, outcome.items);
            data.set_message(structure, outcome.message);
            length
        })
        .await?;

    tracing::info!(
        session = %visitor.identifier,
        %structure,
        action = action_name,
        length,
        "Operation applied"
    );

    Ok(visitor.respond(Redirect::to(structure.path())))
}
