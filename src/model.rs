//! Ticket record and request payloads.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const TABLE_NAME: &str = "ticket";
pub const DEFAULT_STATUS: &str = "todo";
pub const TITLE_MAX_LEN: usize = 100;
pub const STATUS_MAX_LEN: usize = 20;
pub const DEFAULT_LIMIT: i64 = 10;

/// One row of the `ticket` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Ticket {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
}

/// Body of `POST /tickets/`. Any client-supplied status is ignored.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
}

impl NewTicket {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_empty("title", &self.title)?;
        require_max_chars("title", &self.title, TITLE_MAX_LEN)?;
        require_non_empty("description", &self.description)
    }
}

/// Body of `PUT /tickets/{ticket_id}/status`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct StatusUpdate {
    pub status: String,
}

impl StatusUpdate {
    /// The value set is open, the empty string included; only column width is checked.
    pub fn validate(&self) -> Result<(), AppError> {
        require_max_chars("status", &self.status, STATUS_MAX_LEN)
    }
}

/// Offset/limit paging for `GET /tickets/`.
#[derive(Clone, Copy, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of leading rows to skip.
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of rows returned.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.skip < 0 {
            return Err(AppError::Validation("skip must be at least 0".into()));
        }
        if self.limit < 0 {
            return Err(AppError::Validation("limit must be at least 0".into()));
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_max_chars(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
