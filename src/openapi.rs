//! OpenAPI document for the ticket API, served at `GET /openapi.json`.

use crate::error::ErrorBody;
use crate::handlers;
use crate::model::{NewTicket, StatusUpdate, Ticket};
use crate::response::{MessageBody, TicketList, TicketMessage, TicketOne};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "ticket-tracker"),
    paths(
        handlers::root::root,
        handlers::ticket::create_ticket,
        handlers::ticket::list_tickets,
        handlers::ticket::get_ticket,
        handlers::ticket::update_ticket_status,
    ),
    components(schemas(
        Ticket,
        NewTicket,
        StatusUpdate,
        MessageBody,
        TicketMessage,
        TicketOne,
        TicketList,
        ErrorBody,
    )),
    tags((name = "tickets", description = "Ticket create, list, read and status update"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
