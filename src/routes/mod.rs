//! Router assembly.

mod common;
mod ticket;

pub use common::common_routes;
pub use ticket::ticket_routes;

use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Upper bound on request bodies.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application: ticket, common and OpenAPI routes behind CORS, tracing and a body limit.
/// Cross-origin access is unrestricted.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(ticket_routes(state.clone()))
        .merge(common_routes(state))
        .merge(openapi_routes())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
