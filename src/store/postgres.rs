use super::TicketStore;
use crate::db::Database;
use crate::error::AppError;
use crate::model::{NewTicket, Ticket, DEFAULT_STATUS};
use async_trait::async_trait;

const RETURNING: &str = "id, title, description, COALESCE(status, 'todo') AS status";

/// `TicketStore` over PostgreSQL. Each call runs on its own session.
#[derive(Clone, Debug)]
pub struct PgTicketStore {
    db: Database,
}

impl PgTicketStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketStore for PgTicketStore {
    async fn create(&self, new: &NewTicket) -> Result<Ticket, AppError> {
        let sql = format!(
            "INSERT INTO ticket (title, description, status) VALUES ($1, $2, $3) RETURNING {}",
            RETURNING
        );
        tracing::debug!(sql = %sql, "query");
        let mut session = self.db.acquire_session().await?;
        let mut tx = session.begin().await?;
        let ticket = sqlx::query_as::<_, Ticket>(&sql)
            .bind(&new.title)
            .bind(&new.description)
            .bind(DEFAULT_STATUS)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id = ticket.id, "ticket created");
        Ok(ticket)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Ticket>, AppError> {
        let sql = format!("SELECT {} FROM ticket ORDER BY id OFFSET $1 LIMIT $2", RETURNING);
        tracing::debug!(sql = %sql, skip, limit, "query");
        let mut session = self.db.acquire_session().await?;
        let rows = sqlx::query_as::<_, Ticket>(&sql)
            .bind(skip)
            .bind(limit)
            .fetch_all(&mut *session)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Ticket>, AppError> {
        let sql = format!("SELECT {} FROM ticket WHERE id = $1", RETURNING);
        tracing::debug!(sql = %sql, id, "query");
        let mut session = self.db.acquire_session().await?;
        let row = sqlx::query_as::<_, Ticket>(&sql)
            .bind(id)
            .fetch_optional(&mut *session)
            .await?;
        Ok(row)
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<Option<Ticket>, AppError> {
        let sql = format!("UPDATE ticket SET status = $1 WHERE id = $2 RETURNING {}", RETURNING);
        tracing::debug!(sql = %sql, id, "query");
        let mut session = self.db.acquire_session().await?;
        let mut tx = session.begin().await?;
        let row = sqlx::query_as::<_, Ticket>(&sql)
            .bind(status)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        if let Some(ticket) = &row {
            tracing::info!(id = ticket.id, status = %ticket.status, "ticket status updated");
        }
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut session = self.db.acquire_session().await?;
        sqlx::query("SELECT 1").execute(&mut *session).await?;
        Ok(())
    }
}
