//! Ticket persistence behind a trait so handlers never see the backing store.

mod memory;
mod postgres;

pub use memory::MemoryTicketStore;
pub use postgres::PgTicketStore;

use crate::error::AppError;
use crate::model::{NewTicket, Ticket};
use async_trait::async_trait;

#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Insert a ticket with the default status and return it with its new id.
    async fn create(&self, new: &NewTicket) -> Result<Ticket, AppError>;

    /// Tickets in insertion order, skipping `skip` rows and returning at most `limit`.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Ticket>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Ticket>, AppError>;

    /// Replace the status of one ticket. `None` when no such ticket exists; nothing is written then.
    async fn update_status(&self, id: i64, status: &str) -> Result<Option<Ticket>, AppError>;

    /// Cheap reachability check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
