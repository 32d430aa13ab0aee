//! Database connection management

use sqlx::{PgPool, Postgres, Row, Transaction, postgres::PgRow};

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a database transaction.
    ///
    /// The returned transaction rolls back when dropped without an explicit
    /// commit, so every early-return path releases its connection cleanly.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired from the pool.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Decode a non-negative `BIGINT` column as `u64`.
pub(crate) fn try_get_u64(row: &PgRow, column: &str) -> sqlx::Result<u64> {
    let value: i64 = row.try_get(column)?;

    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

/// Encode a `u64` as a `BIGINT` bind value.
pub(crate) fn to_bigint(value: u64, column: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}
