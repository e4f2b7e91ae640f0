//! Connection pool and request-scoped sessions.

use crate::error::AppError;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{Connection, PgPool, Postgres, Transaction};
use std::ops::{Deref, DerefMut};

pub const MAX_CONNECTIONS: u32 = 5;

/// Shared pool handle. Cheap to clone; every clone draws from the same pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open the pool and verify the server is reachable.
    pub async fn connect(database_uri: &str) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_uri)
            .await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check a connection out of the pool for the duration of one request.
    pub async fn acquire_session(&self) -> Result<Session, AppError> {
        let conn = self.pool.acquire().await?;
        tracing::trace!("session acquired");
        Ok(Session { conn })
    }
}

/// A pooled connection scoped to one request. Returned to the pool on drop,
/// whichever way the request ends.
pub struct Session {
    conn: PoolConnection<Postgres>,
}

impl Session {
    /// Start a transaction on this session. Rolled back on drop unless committed.
    pub async fn begin(&mut self) -> Result<Transaction<'_, Postgres>, AppError> {
        Ok(Connection::begin(&mut *self.conn).await?)
    }
}

impl Deref for Session {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        &self.conn
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::trace!("session released");
    }
}
