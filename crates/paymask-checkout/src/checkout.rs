//! Submission of a completed form.
//!
//! [`Checkout`] ties a [`FormSession`] to a payment gateway and a notifier.
//! A submission goes through these steps:
//!
//! 1. The session must be valid; otherwise nothing is sent and nobody is
//!    notified (the submit control is disabled in that state).
//! 2. The committed values are canonicalized into a payload.
//! 3. The payload is handed to the gateway.
//! 4. The outcome is shown exactly once through the notifier.
//!
//! The session is borrowed immutably, so a failed submission leaves the form
//! as it was and the user can retry.
//!
//! # Examples
//!
//! ```
//! use paymask_checkout::mock::{MockGateway, RecordingNotifier};
//! use paymask_checkout::Checkout;
//! use paymask_core::Field;
//! use paymask_form::FormSession;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (gateway, _handle) = MockGateway::new();
//! let checkout = Checkout::new(gateway, RecordingNotifier::new());
//!
//! let mut session = FormSession::new();
//! session.input(Field::CardNumber, "1234123412341234");
//! session.input(Field::ExpirationDate, "01/2099");
//! session.input(Field::Cvv, "123");
//! session.input(Field::Amount, "50");
//!
//! let receipt = checkout.submit(&session).await.unwrap();
//! assert_eq!(receipt.amount, 50.0);
//! assert_eq!(checkout.notifier().last().unwrap().title, "Success!");
//! # }
//! ```

use paymask_core::PaymentReceipt;
use paymask_form::FormSession;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::traits::{Notifier, PaymentGateway};
use crate::types::Notification;

/// Submits form sessions through a gateway and reports the outcome.
#[derive(Debug)]
pub struct Checkout<G, N> {
    gateway: G,
    notifier: N,
}

impl<G: PaymentGateway, N: Notifier> Checkout<G, N> {
    /// Create a checkout over the given collaborators.
    pub fn new(gateway: G, notifier: N) -> Self {
        Self { gateway, notifier }
    }

    /// Get the payment gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Get the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Submit the session's committed values.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::InvalidForm` without contacting the gateway
    /// or notifying if the form is not valid. Gateway failures are returned
    /// after the failure notification has been shown.
    pub async fn submit(&self, session: &FormSession) -> Result<PaymentReceipt> {
        let payload = match session.payload() {
            Ok(payload) => payload,
            Err(err) => {
                debug!(error = %err, "Submission blocked");
                return Err(err.into());
            }
        };

        match self.gateway.submit(&payload).await {
            Ok(receipt) => {
                info!(request_id = %receipt.request_id, amount = receipt.amount, "Payment accepted");
                self.notifier.notify(Notification::success());
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "Payment failed");
                self.notifier.notify(Notification::failure(err.to_string()));
                Err(err)
            }
        }
    }
}
