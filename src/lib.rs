//! Ticket tracker: create, list, read and status-update tickets over HTTP, persisted in PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Settings;
pub use db::{Database, Session};
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use model::{NewTicket, StatusUpdate, Ticket};
pub use routes::app;
pub use state::AppState;
pub use store::{MemoryTicketStore, PgTicketStore, TicketStore};
