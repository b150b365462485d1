use std::collections::HashMap;

use chrono::Utc;
use paymask_core::PaymentFields;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::PaymentStore;
use crate::error::StorageResult;
use crate::models::PaymentRecord;

/// Payment store kept in process memory
///
/// Used by the command-line demo when no database path is given, and as a
/// lightweight store in tests.
#[derive(Debug, Default)]
pub struct InMemoryPaymentStore {
    payments: RwLock<HashMap<String, PaymentRecord>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentStore for InMemoryPaymentStore {
    async fn insert(&self, fields: &PaymentFields) -> StorageResult<String> {
        let record = PaymentRecord::new(Uuid::new_v4().to_string(), fields, Utc::now());
        let id = record.id.clone();
        self.payments.write().await.insert(id.clone(), record);
        Ok(id)
    }

    async fn find(&self, id: &str) -> StorageResult<Option<PaymentRecord>> {
        Ok(self.payments.read().await.get(id).cloned())
    }

    async fn count(&self) -> StorageResult<i64> {
        Ok(self.payments.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> PaymentFields {
        PaymentFields {
            card_number: "1234123412341234".to_string(),
            expiration_date: "01/2099".to_string(),
            cvv: "123".to_string(),
            amount: "50".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryPaymentStore::new();

        let id = store.insert(&fields()).await.unwrap();
        let record = store.find(&id).await.unwrap().unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.fields(), fields());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = InMemoryPaymentStore::new();

        let first = store.insert(&fields()).await.unwrap();
        let second = store.insert(&fields()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_unknown_id() {
        let store = InMemoryPaymentStore::new();
        assert!(store.find("missing").await.unwrap().is_none());
    }
}
