//! Types exchanged between the checkout and its collaborators.

use paymask_form::SubmissionMessages;
use serde::{Deserialize, Serialize};

/// A user-facing message about the outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Whether the submission succeeded.
    pub success: bool,

    pub title: String,

    pub message: String,
}

impl Notification {
    /// Notification shown after a successful payment.
    ///
    /// # Examples
    ///
    /// ```
    /// use paymask_checkout::Notification;
    ///
    /// let notification = Notification::success();
    /// assert_eq!(notification.title, "Success!");
    /// assert_eq!(notification.message, "Payment was successful");
    /// ```
    pub fn success() -> Self {
        Self {
            success: true,
            title: SubmissionMessages::SUCCESS_TITLE.to_string(),
            message: SubmissionMessages::SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Notification shown after a failed payment, carrying the error text.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            title: SubmissionMessages::FAILURE_TITLE.to_string(),
            message: message.into(),
        }
    }
}
