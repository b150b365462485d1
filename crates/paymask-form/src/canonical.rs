//! Submit-time canonicalization.
//!
//! Removes display formatting from the committed values so the submission
//! collaborator receives raw data: grouping spaces are stripped from the
//! card number and the amount becomes a number.

use paymask_core::constants::CARD_GROUP_SEPARATOR;
use paymask_core::{Error, PaymentFields, Result, SubmissionPayload};
use paymask_input::amount::parse_amount;

/// Convert committed form values into a submission payload.
///
/// The expiration date and CVV pass through unchanged.
///
/// # Errors
///
/// Returns `Error::InvalidAmount` if the amount does not parse as a number.
///
/// # Examples
///
/// ```
/// use paymask_core::PaymentFields;
/// use paymask_form::canonicalize;
///
/// let fields = PaymentFields {
///     card_number: "1234 1234 1234 1234".to_string(),
///     expiration_date: "01/2099".to_string(),
///     cvv: "123".to_string(),
///     amount: "50".to_string(),
/// };
///
/// let payload = canonicalize(&fields).unwrap();
/// assert_eq!(payload.card_number, "1234123412341234");
/// assert_eq!(payload.amount, 50.0);
/// ```
pub fn canonicalize(fields: &PaymentFields) -> Result<SubmissionPayload> {
    let amount = parse_amount(&fields.amount)
        .ok_or_else(|| Error::InvalidAmount(format!("'{}' is not a number", fields.amount)))?;

    Ok(SubmissionPayload {
        card_number: fields
            .card_number
            .chars()
            .filter(|c| *c != CARD_GROUP_SEPARATOR)
            .collect(),
        expiration_date: fields.expiration_date.clone(),
        cvv: fields.cvv.clone(),
        amount,
    })
}
