//! In-process payment service.

use paymask_core::{PaymentReceipt, SubmissionPayload};
use paymask_storage::PaymentStore;
use tracing::debug;

use crate::error::Result;
use crate::traits::PaymentGateway;

/// Gateway that records payments directly in a [`PaymentStore`].
///
/// Stands in for the remote payment endpoint: the payload is converted to
/// its wire record, stored, and acknowledged with the generated request id
/// and the numeric amount. Any store failure is reported as
/// `SubmissionError::Unavailable`.
#[derive(Debug)]
pub struct LocalGateway<S> {
    store: S,
}

impl<S: PaymentStore> LocalGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: PaymentStore> PaymentGateway for LocalGateway<S> {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<PaymentReceipt> {
        let wire = payload.to_wire();
        let request_id = self.store.insert(&wire).await?;
        debug!(%request_id, "Payment recorded");

        Ok(PaymentReceipt {
            request_id,
            amount: payload.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paymask_storage::InMemoryPaymentStore;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            card_number: "1234123412341234".to_string(),
            expiration_date: "01/2099".to_string(),
            cvv: "123".to_string(),
            amount: 50.5,
        }
    }

    #[tokio::test]
    async fn test_local_gateway_stores_wire_record() {
        let gateway = LocalGateway::new(InMemoryPaymentStore::new());

        let receipt = gateway.submit(&payload()).await.unwrap();
        assert_eq!(receipt.amount, 50.5);

        let record = gateway.store().find(&receipt.request_id).await.unwrap().unwrap();
        assert_eq!(record.card_number, "1234123412341234");
        assert_eq!(record.amount, "50.5");
        assert_eq!(gateway.store().count().await.unwrap(), 1);
    }
}
