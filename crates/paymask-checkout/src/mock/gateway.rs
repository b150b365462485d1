//! Mock payment gateway.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use paymask_core::{PaymentReceipt, SubmissionPayload};
use tokio::sync::mpsc;

use crate::error::{Result, SubmissionError};
use crate::traits::PaymentGateway;

/// Mock payment gateway for testing and development.
///
/// Every payload it receives is forwarded to a [`MockGatewayHandle`], so a
/// test can observe exactly what would have been sent over the wire. The
/// gateway accepts submissions until it is told to fail.
///
/// # Examples
///
/// ```
/// use paymask_checkout::mock::MockGateway;
/// use paymask_checkout::traits::PaymentGateway;
/// use paymask_core::SubmissionPayload;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (gateway, mut handle) = MockGateway::new();
///
/// let payload = SubmissionPayload {
///     card_number: "1234123412341234".to_string(),
///     expiration_date: "01/2099".to_string(),
///     cvv: "123".to_string(),
///     amount: 50.0,
/// };
///
/// let receipt = gateway.submit(&payload).await.unwrap();
/// assert_eq!(receipt.request_id, "mock-1");
/// assert_eq!(handle.try_recv(), Some(payload));
/// # }
/// ```
#[derive(Debug)]
pub struct MockGateway {
    /// Channel sender for observed submissions
    submissions_tx: mpsc::UnboundedSender<SubmissionPayload>,

    /// Scripted failure, if any
    failure: Mutex<Option<SubmissionError>>,

    /// Counter for generated request ids
    next_id: AtomicU64,
}

impl MockGateway {
    /// Create a new mock gateway that accepts every submission.
    ///
    /// Returns a tuple of (MockGateway, MockGatewayHandle) where the handle
    /// receives every submitted payload.
    pub fn new() -> (Self, MockGatewayHandle) {
        let (submissions_tx, submissions_rx) = mpsc::unbounded_channel();

        let gateway = Self {
            submissions_tx,
            failure: Mutex::new(None),
            next_id: AtomicU64::new(1),
        };

        (gateway, MockGatewayHandle { submissions_rx })
    }

    /// Create a mock gateway that fails every submission with the given error.
    pub fn failing(error: SubmissionError) -> (Self, MockGatewayHandle) {
        let (gateway, handle) = Self::new();
        gateway.fail_with(error);
        (gateway, handle)
    }

    /// Fail subsequent submissions with the given error.
    pub fn fail_with(&self, error: SubmissionError) {
        *self.lock_failure() = Some(error);
    }

    /// Accept subsequent submissions.
    pub fn accept(&self) {
        *self.lock_failure() = None;
    }

    fn lock_failure(&self) -> std::sync::MutexGuard<'_, Option<SubmissionError>> {
        self.failure.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PaymentGateway for MockGateway {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<PaymentReceipt> {
        // The handle may have been dropped; the submission still counts.
        let _ = self.submissions_tx.send(payload.clone());

        if let Some(error) = self.lock_failure().clone() {
            return Err(error);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Ok(PaymentReceipt {
            request_id: format!("mock-{id}"),
            amount: payload.amount,
        })
    }
}

/// Handle for observing a mock gateway.
#[derive(Debug)]
pub struct MockGatewayHandle {
    submissions_rx: mpsc::UnboundedReceiver<SubmissionPayload>,
}

impl MockGatewayHandle {
    /// Wait for the next submitted payload.
    ///
    /// Returns `None` once the gateway has been dropped and every payload
    /// has been received.
    pub async fn recv(&mut self) -> Option<SubmissionPayload> {
        self.submissions_rx.recv().await
    }

    /// Take the next submitted payload if one is queued.
    pub fn try_recv(&mut self) -> Option<SubmissionPayload> {
        self.submissions_rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(amount: f64) -> SubmissionPayload {
        SubmissionPayload {
            card_number: "1234123412341234".to_string(),
            expiration_date: "01/2099".to_string(),
            cvv: "123".to_string(),
            amount,
        }
    }

    #[tokio::test]
    async fn test_mock_gateway_generates_sequential_ids() {
        let (gateway, _handle) = MockGateway::new();

        let first = gateway.submit(&payload(1.0)).await.unwrap();
        let second = gateway.submit(&payload(2.0)).await.unwrap();

        assert_eq!(first.request_id, "mock-1");
        assert_eq!(second.request_id, "mock-2");
        assert_eq!(second.amount, 2.0);
    }

    #[tokio::test]
    async fn test_mock_gateway_failure_and_recovery() {
        let (gateway, mut handle) =
            MockGateway::failing(SubmissionError::rejected("status 500"));

        let err = gateway.submit(&payload(1.0)).await.unwrap_err();
        assert_eq!(err, SubmissionError::rejected("status 500"));

        gateway.accept();
        assert!(gateway.submit(&payload(1.0)).await.is_ok());

        assert_eq!(handle.recv().await, Some(payload(1.0)));
        assert_eq!(handle.recv().await, Some(payload(1.0)));
        assert_eq!(handle.try_recv(), None);
    }

    #[tokio::test]
    async fn test_handle_sees_end_of_stream() {
        let (gateway, mut handle) = MockGateway::new();
        gateway.submit(&payload(3.0)).await.unwrap();
        drop(gateway);

        assert_eq!(handle.recv().await, Some(payload(3.0)));
        assert_eq!(handle.recv().await, None);
    }
}
