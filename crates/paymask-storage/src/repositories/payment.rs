#![allow(async_fn_in_trait)]

use crate::error::StorageResult;
use crate::models::PaymentRecord;
use chrono::Utc;
use paymask_core::PaymentFields;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

/// Store for submitted payments
///
/// Implementations assign the request identifier returned to the
/// submitter. The trait uses native async methods (Edition 2024).
pub trait PaymentStore: Send + Sync {
    /// Persist a wire record and return its new request identifier
    async fn insert(&self, fields: &PaymentFields) -> StorageResult<String>;

    /// Find a payment by request identifier
    async fn find(&self, id: &str) -> StorageResult<Option<PaymentRecord>>;

    /// Number of stored payments
    async fn count(&self) -> StorageResult<i64>;
}

/// SQLite implementation of PaymentStore
#[derive(Debug, Clone)]
pub struct SqlitePaymentStore {
    pool: SqlitePool,
}

impl SqlitePaymentStore {
    /// Create a new SQLite payment store
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PaymentStore for SqlitePaymentStore {
    async fn insert(&self, fields: &PaymentFields) -> StorageResult<String> {
        let record = PaymentRecord::new(Uuid::new_v4().to_string(), fields, Utc::now());

        sqlx::query(
            r#"
            INSERT INTO payments (
                id, card_number, expiration_date, cvv, amount, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.card_number)
        .bind(&record.expiration_date)
        .bind(&record.cvv)
        .bind(&record.amount)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        debug!("Stored payment {}", record.id);
        Ok(record.id)
    }

    async fn find(&self, id: &str) -> StorageResult<Option<PaymentRecord>> {
        let record = sqlx::query_as::<_, PaymentRecord>(
            r#"
            SELECT id, card_number, expiration_date, cvv, amount, created_at
            FROM payments
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn count(&self) -> StorageResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payments")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}
