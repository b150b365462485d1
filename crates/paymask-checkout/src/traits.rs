//! Collaborator trait definitions.
//!
//! These traits establish the contract between the checkout and the outside
//! world: the payment service that accepts a submission and the notification
//! surface that tells the user how it went. They allow substitution between
//! mock implementations and real services.
//!
//! All traits use native `async fn` methods (Rust 1.90 + Edition 2024 RPITIT).

#![allow(async_fn_in_trait)]

use paymask_core::{PaymentReceipt, SubmissionPayload};

use crate::error::Result;
use crate::types::Notification;

/// A service that accepts payment submissions.
///
/// Any non-success answer is reported as a [`SubmissionError`](crate::SubmissionError);
/// callers do not retry.
///
/// # Examples
///
/// ```no_run
/// use paymask_checkout::traits::PaymentGateway;
/// use paymask_core::SubmissionPayload;
///
/// async fn pay<G: PaymentGateway>(gateway: &G, payload: &SubmissionPayload) {
///     match gateway.submit(payload).await {
///         Ok(receipt) => println!("request {}", receipt.request_id),
///         Err(err) => println!("failed: {err}"),
///     }
/// }
/// ```
pub trait PaymentGateway: Send + Sync {
    /// Submit a canonical payload and wait for the service's answer.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Rejected` if the service refused the
    /// payment or `SubmissionError::Unavailable` if it could not be reached.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<PaymentReceipt>;
}

/// A surface that shows submission outcomes to the user.
pub trait Notifier: Send + Sync {
    /// Show a notification.
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}
