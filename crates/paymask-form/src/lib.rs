//! Form-level logic for the payment form.
//!
//! This crate turns the per-field maskers into a complete form: the
//! validator and its messages, the validity aggregate that gates the submit
//! control, the session container that revalidates after every committed
//! keystroke, and the canonicalization applied at submit time.

pub mod canonical;
pub mod config;
pub mod messages;
pub mod session;
pub mod validator;

pub use canonical::canonicalize;
pub use config::FormConfig;
pub use messages::{SubmissionMessages, ValidationMessages};
pub use session::{FormSession, FormSnapshot, SubscriptionId};
pub use validator::{FormValidator, ValidationResult, is_form_valid};
