//! Ticket routes. The collection lives at `/tickets/`; the slash-less form redirects there.

use crate::handlers::{create_ticket, get_ticket, list_tickets, root, update_ticket_status};
use crate::state::AppState;
use axum::{
    extract::RawQuery,
    response::Redirect,
    routing::{get, put},
    Router,
};

const COLLECTION_PATH: &str = "/tickets/";

/// 307 keeps the method and body, so a POST to `/tickets` is replayed against `/tickets/`.
async fn redirect_to_collection(RawQuery(query): RawQuery) -> Redirect {
    match query {
        Some(q) if !q.is_empty() => Redirect::temporary(&format!("{}?{}", COLLECTION_PATH, q)),
        _ => Redirect::temporary(COLLECTION_PATH),
    }
}

pub fn ticket_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(COLLECTION_PATH, get(list_tickets).post(create_ticket))
        .route(
            "/tickets",
            get(redirect_to_collection).post(redirect_to_collection),
        )
        .route("/tickets/:ticket_id", get(get_ticket))
        .route("/tickets/:ticket_id/status", put(update_ticket_status))
        .with_state(state)
}
