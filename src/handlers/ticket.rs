//! Ticket handlers: create, list, read, status update.
//! Payloads are validated before the store (and so the database) is touched.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::model::{ListParams, NewTicket, StatusUpdate};
use crate::response::{self, TicketList, TicketMessage, TicketOne};
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    post,
    path = "/tickets/",
    request_body = NewTicket,
    responses(
        (status = 200, description = "Ticket created", body = TicketMessage),
        (status = 422, description = "Malformed body", body = ErrorBody),
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<NewTicket>,
) -> Result<Json<TicketMessage>, AppError> {
    body.validate()?;
    let ticket = state.store.create(&body).await?;
    Ok(Json(response::created(ticket)))
}

#[utoipa::path(
    get,
    path = "/tickets/",
    params(ListParams),
    responses((status = 200, description = "Page of tickets in creation order", body = TicketList)),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<TicketList>, AppError> {
    params.validate()?;
    let tickets = state.store.list(params.skip, params.limit).await?;
    Ok(Json(TicketList { tickets }))
}

#[utoipa::path(
    get,
    path = "/tickets/{ticket_id}",
    params(("ticket_id" = i64, Path, description = "Ticket id")),
    responses(
        (status = 200, body = TicketOne),
        (status = 404, description = "Ticket not found", body = ErrorBody),
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    ValidPath(ticket_id): ValidPath<i64>,
) -> Result<Json<TicketOne>, AppError> {
    let ticket = state
        .store
        .get(ticket_id)
        .await?
        .ok_or_else(AppError::ticket_not_found)?;
    Ok(Json(TicketOne { ticket }))
}

#[utoipa::path(
    put,
    path = "/tickets/{ticket_id}/status",
    params(("ticket_id" = i64, Path, description = "Ticket id")),
    request_body = StatusUpdate,
    responses(
        (status = 200, description = "Status replaced", body = TicketMessage),
        (status = 404, description = "Ticket not found", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody),
    ),
    tag = "tickets"
)]
pub async fn update_ticket_status(
    State(state): State<AppState>,
    ValidPath(ticket_id): ValidPath<i64>,
    ValidJson(body): ValidJson<StatusUpdate>,
) -> Result<Json<TicketMessage>, AppError> {
    body.validate()?;
    let ticket = state
        .store
        .update_status(ticket_id, &body.status)
        .await?
        .ok_or_else(AppError::ticket_not_found)?;
    Ok(Json(response::status_updated(ticket)))
}
