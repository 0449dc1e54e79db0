//! Local store for fetched quotations.
//!
//! `QuotationStore` is the seam the request handler depends on; `SqliteStore` is the
//! production implementation backed by an `sqlx` SQLite pool. The table is created at
//! connect time if absent, and rows are only ever appended.
//!
//! Every insert runs in its own transaction under the caller's `Deadline`. When the
//! deadline elapses before the commit, the transaction is dropped and rolled back, so a
//! timed-out insert never lands in the table.
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use quotation_common::{Deadline, Quotation, QuotationError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::model::record::QuotationRecord;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS quotation (\
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    bid TEXT, \
    created_at DATETIME)";

const INSERT_QUOTATION: &str = "INSERT INTO quotation (bid, created_at) VALUES (?, ?)";

/// Append-only persistence of quotations.
#[async_trait]
pub trait QuotationStore: Send + Sync {
    /// Insert `quotation` with the current time, bounded by `deadline`.
    ///
    /// Returns the new row id.
    async fn insert(&self, quotation: &Quotation, deadline: Deadline) -> Result<i64>;
}

/// SQLite-backed quotation store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `url` and ensure the schema exists.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(persistence_error)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(persistence_error)?;
        info!("Opened quotation database {}", url);
        Self::with_pool(pool).await
    }

    /// Private in-memory database, mainly for tests.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the pool is pinned
    /// to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(persistence_error)?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .map_err(persistence_error)?;
        Ok(Self { pool })
    }

    /// Number of stored quotations.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotation")
            .fetch_one(&self.pool)
            .await
            .map_err(persistence_error)?;
        Ok(count)
    }

    /// Most recently inserted quotation, if any.
    pub async fn latest(&self) -> Result<Option<QuotationRecord>> {
        let record = sqlx::query_as::<_, QuotationRecord>(
            "SELECT id, bid, created_at FROM quotation ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(persistence_error)?;
        Ok(record)
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl QuotationStore for SqliteStore {
    async fn insert(&self, quotation: &Quotation, deadline: Deadline) -> Result<i64> {
        deadline
            .run(async {
                // On expiry `tx` is dropped uncommitted and rolled back.
                let mut tx = self.pool.begin().await.map_err(persistence_error)?;
                let done = sqlx::query(INSERT_QUOTATION)
                    .bind(&quotation.bid)
                    .bind(Utc::now())
                    .execute(&mut *tx)
                    .await
                    .map_err(persistence_error)?;
                tx.commit().await.map_err(persistence_error)?;
                debug!("Inserted quotation row {}", done.last_insert_rowid());
                Ok::<_, QuotationError>(done.last_insert_rowid())
            })
            .await
    }
}

fn persistence_error(err: sqlx::Error) -> QuotationError {
    QuotationError::Persistence(err.to_string())
}
