//! Idempotent schema ensure for the `ticket` table. No migration of existing tables.

use crate::db::Database;
use crate::error::AppError;
use crate::model::{DEFAULT_STATUS, STATUS_MAX_LEN, TABLE_NAME, TITLE_MAX_LEN};

pub fn ticket_table_ddl() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            title VARCHAR({}) NOT NULL,
            description TEXT NOT NULL,
            status VARCHAR({}) DEFAULT '{}'
        )
        "#,
        TABLE_NAME, TITLE_MAX_LEN, STATUS_MAX_LEN, DEFAULT_STATUS
    )
}

/// Create the `ticket` table if absent.
pub async fn ensure_schema(db: &Database) -> Result<(), AppError> {
    let ddl = ticket_table_ddl();
    tracing::debug!(sql = %ddl, "ensure schema");
    sqlx::query(&ddl).execute(db.pool()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_matches_column_limits() {
        let ddl = ticket_table_ddl();
        assert!(ddl.contains("CREATE TABLE IF NOT EXISTS ticket"));
        assert!(ddl.contains("title VARCHAR(100) NOT NULL"));
        assert!(ddl.contains("description TEXT NOT NULL"));
        assert!(ddl.contains("status VARCHAR(20) DEFAULT 'todo'"));
    }
}
