//! Inline validation messages for the payment form.
//!
//! # Usage
//!
//! ```
//! use paymask_form::messages::ValidationMessages;
//!
//! let message = ValidationMessages::CVV_TOO_SHORT;
//! assert_eq!(message, "Too short CVV");
//! ```

/// Field-level messages shown next to an invalid field.
///
/// These messages never block typing; they only keep the submit control
/// disabled until the field becomes valid.
pub struct ValidationMessages;

impl ValidationMessages {
    /// Card number has fewer than 16 digits.
    pub const CARD_NUMBER_TOO_SHORT: &'static str = "Too short card number";

    /// Expiration date is not a complete `MM/YYYY` value.
    pub const WRONG_FORMAT: &'static str = "Wrong format";

    /// Month is outside 1-12, or is already past in the current year.
    pub const WRONG_MONTH: &'static str = "Wrong month";

    /// Year is before the current year.
    pub const WRONG_YEAR: &'static str = "Wrong year";

    /// CVV has fewer than 3 digits.
    pub const CVV_TOO_SHORT: &'static str = "Too short CVV";

    /// Amount is empty.
    pub const AMOUNT_REQUIRED: &'static str = "Enter the value, please";
}

/// Notification texts used after a submission attempt.
pub struct SubmissionMessages;

impl SubmissionMessages {
    /// Title of the success notification.
    pub const SUCCESS_TITLE: &'static str = "Success!";

    /// Body of the success notification.
    pub const SUCCESS_MESSAGE: &'static str = "Payment was successful";

    /// Title of the failure notification. The body is the error text.
    pub const FAILURE_TITLE: &'static str = "Ooops";
}
