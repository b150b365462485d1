//! Error types for payment submission.
//!
//! Every failure is reported once to the user through the notifier; the
//! variants only distinguish where the failure happened for logging.

/// Result type alias for submission operations.
pub type Result<T> = std::result::Result<T, SubmissionError>;

/// Errors that can occur while submitting a payment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The form was not valid when submission was requested.
    #[error("Form is not valid: {message}")]
    InvalidForm { message: String },

    /// The payment service answered with a failure.
    #[error("Something went wrong: {message}")]
    Rejected { message: String },

    /// The payment service could not be reached or could not store the payment.
    #[error("Payment service unavailable: {message}")]
    Unavailable { message: String },
}

impl SubmissionError {
    /// Create a new invalid form error.
    pub fn invalid_form(message: impl Into<String>) -> Self {
        Self::InvalidForm {
            message: message.into(),
        }
    }

    /// Create a new rejected error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create a new unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Check whether the failure happened before reaching the payment service.
    pub fn is_invalid_form(&self) -> bool {
        matches!(self, Self::InvalidForm { .. })
    }
}

impl From<paymask_core::Error> for SubmissionError {
    fn from(err: paymask_core::Error) -> Self {
        match err {
            paymask_core::Error::FormInvalid(fields) => Self::invalid_form(fields),
            other => Self::invalid_form(other.to_string()),
        }
    }
}

impl From<paymask_storage::StorageError> for SubmissionError {
    fn from(err: paymask_storage::StorageError) -> Self {
        Self::unavailable(err.to_string())
    }
}
