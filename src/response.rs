//! Response envelopes. Field names are part of the public contract.

use crate::model::Ticket;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const CREATED_MESSAGE: &str = "Ticket created successfully";
pub const STATUS_UPDATED_MESSAGE: &str = "Ticket status updated";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

/// Ticket plus a human-readable message; returned by create and status update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketMessage {
    pub message: String,
    pub ticket: Ticket,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketOne {
    pub ticket: Ticket,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketList {
    pub tickets: Vec<Ticket>,
}

pub fn created(ticket: Ticket) -> TicketMessage {
    TicketMessage {
        message: CREATED_MESSAGE.into(),
        ticket,
    }
}

pub fn status_updated(ticket: Ticket) -> TicketMessage {
    TicketMessage {
        message: STATUS_UPDATED_MESSAGE.into(),
        ticket,
    }
}
