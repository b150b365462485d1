//! Payment submission for the payment form.
//!
//! This crate connects a completed [`FormSession`](paymask_form::FormSession)
//! to the outside world through two collaborator traits:
//!
//! - [`PaymentGateway`]: accepts a canonical submission payload and answers
//!   with a receipt or a failure
//! - [`Notifier`]: shows the outcome to the user
//!
//! [`Checkout`] drives one submission: it refuses invalid forms, hands the
//! canonical payload to the gateway and reports the outcome exactly once.
//!
//! # Implementations
//!
//! - [`LocalGateway`]: records payments in a
//!   [`PaymentStore`](paymask_storage::PaymentStore) and acknowledges them
//!   with the stored request id
//! - [`mock::MockGateway`] and [`mock::RecordingNotifier`]: programmable
//!   doubles for tests and development
//!
//! # Design
//!
//! - **Async-first**: the gateway uses native `async fn` in traits
//!   (Rust 1.90 + Edition 2024 RPITIT).
//! - **Thread-safe**: all collaborators require `Send + Sync`.
//! - **Uniform failure**: every failure reaches the user as one "Ooops"
//!   notification carrying the error text; nothing is retried.

pub mod checkout;
pub mod error;
pub mod gateway;
pub mod mock;
pub mod traits;
pub mod types;

pub use checkout::Checkout;
pub use error::{Result, SubmissionError};
pub use gateway::LocalGateway;
pub use traits::{Notifier, PaymentGateway};
pub use types::Notification;
