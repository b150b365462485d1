use crate::{Result, error::Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four payment form fields.
///
/// The serialized names match the field names used by the form and the
/// submission record (`cardNumber`, `expirationDate`, `cvv`, `amount`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CardNumber,
    ExpirationDate,
    Cvv,
    Amount,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::CardNumber,
        Field::ExpirationDate,
        Field::Cvv,
        Field::Amount,
    ];

    /// Get the form-facing name of the field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CardNumber => "cardNumber",
            Field::ExpirationDate => "expirationDate",
            Field::Cvv => "cvv",
            Field::Amount => "amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Committed, display-formatted values of the payment form.
///
/// Each value is either empty or a string previously accepted by that
/// field's masker. Updates go through [`PaymentFields::with_field`], which
/// returns a new snapshot instead of mutating in place.
///
/// The same shape is used as the wire record handed to the payment store,
/// where `amount` holds the string form of the submitted number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFields {
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub amount: String,
}

impl PaymentFields {
    /// Create an empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the committed value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::ExpirationDate => &self.expiration_date,
            Field::Cvv => &self.cvv,
            Field::Amount => &self.amount,
        }
    }

    /// Return a new snapshot with one field replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use paymask_core::{Field, PaymentFields};
    ///
    /// let empty = PaymentFields::new();
    /// let next = empty.with_field(Field::Cvv, "12");
    ///
    /// assert_eq!(empty.cvv, "");
    /// assert_eq!(next.cvv, "12");
    /// ```
    #[must_use]
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::CardNumber => next.card_number = value,
            Field::ExpirationDate => next.expiration_date = value,
            Field::Cvv => next.cvv = value,
            Field::Amount => next.amount = value,
        }
        next
    }

    /// Check whether every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Canonical values handed to the submission collaborator.
///
/// Display formatting is removed: the card number holds digits only and
/// the amount is numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub amount: f64,
}

impl SubmissionPayload {
    /// Convert into the wire record, where `amount` travels as a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use paymask_core::SubmissionPayload;
    ///
    /// let payload = SubmissionPayload {
    ///     card_number: "1234123412341234".to_string(),
    ///     expiration_date: "01/2099".to_string(),
    ///     cvv: "123".to_string(),
    ///     amount: 50.0,
    /// };
    ///
    /// assert_eq!(payload.to_wire().amount, "50");
    /// ```
    #[must_use]
    pub fn to_wire(&self) -> PaymentFields {
        PaymentFields {
            card_number: self.card_number.clone(),
            expiration_date: self.expiration_date.clone(),
            cvv: self.cvv.clone(),
            amount: format_number(self.amount),
        }
    }
}

/// Acknowledgment returned by the submission collaborator on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// Opaque identifier assigned by the payment store.
    pub request_id: String,

    /// Amount as recorded by the store.
    pub amount: f64,
}

/// Format a number the way it is shown back to the user.
///
/// Produces the shortest representation that parses back to the same
/// value: no exponent, no trailing zero fraction, no negative zero.
///
/// # Examples
///
/// ```
/// use paymask_core::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(50.25), "50.25");
/// assert_eq!(format_number(1e12), "1000000000000");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cardNumber", Field::CardNumber)]
    #[case("expirationDate", Field::ExpirationDate)]
    #[case("cvv", Field::Cvv)]
    #[case("AMOUNT", Field::Amount)]
    fn test_field_from_str(#[case] input: &str, #[case] expected: Field) {
        let field: Field = input.parse().unwrap();
        assert_eq!(field, expected);
    }

    #[test]
    fn test_field_from_str_unknown() {
        let result: Result<Field> = "pin".parse();
        assert!(matches!(result, Err(Error::UnknownField(_))));
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let original = PaymentFields::new().with_field(Field::CardNumber, "1234");
        let updated = original.with_field(Field::Amount, "50");

        assert_eq!(original.amount, "");
        assert_eq!(updated.card_number, "1234");
        assert_eq!(updated.amount, "50");
        assert!(PaymentFields::new().is_empty());
        assert!(!updated.is_empty());
    }

    #[test]
    fn test_payment_fields_serialize_camel_case() {
        let fields = PaymentFields::new()
            .with_field(Field::CardNumber, "1234123412341234")
            .with_field(Field::ExpirationDate, "01/2099");
        let json = serde_json::to_value(&fields).unwrap();

        assert_eq!(json["cardNumber"], "1234123412341234");
        assert_eq!(json["expirationDate"], "01/2099");
        assert_eq!(json["cvv"], "");
    }

    #[test]
    fn test_receipt_deserializes_request_id() {
        let receipt: PaymentReceipt =
            serde_json::from_str(r#"{"requestId":"abc","amount":50}"#).unwrap();
        assert_eq!(receipt.request_id, "abc");
        assert_eq!(receipt.amount, 50.0);
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(-0.0, "0")]
    #[case(50.0, "50")]
    #[case(0.5, "0.5")]
    #[case(7.01, "7.01")]
    #[case(999_999_999_999.99, "999999999999.99")]
    fn test_format_number(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }
}
