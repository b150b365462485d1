use chrono::{DateTime, Utc};
use paymask_core::PaymentFields;
use serde::{Deserialize, Serialize};

/// A stored payment submission.
///
/// Holds the wire record exactly as received: the card number without
/// grouping spaces and the amount as its re-stringified number.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use paymask_core::PaymentFields;
/// use paymask_storage::models::PaymentRecord;
///
/// let fields = PaymentFields {
///     card_number: "1234123412341234".to_string(),
///     expiration_date: "01/2099".to_string(),
///     cvv: "123".to_string(),
///     amount: "50".to_string(),
/// };
///
/// let record = PaymentRecord::new("req-1", &fields, Utc::now());
/// assert_eq!(record.fields(), fields);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// Request identifier returned to the submitter
    pub id: String,

    pub card_number: String,

    /// `MM/YYYY`
    pub expiration_date: String,

    pub cvv: String,

    /// Amount as sent on the wire
    pub amount: String,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl PaymentRecord {
    /// Build a record from a wire payload
    pub fn new(id: impl Into<String>, fields: &PaymentFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            card_number: fields.card_number.clone(),
            expiration_date: fields.expiration_date.clone(),
            cvv: fields.cvv.clone(),
            amount: fields.amount.clone(),
            created_at,
        }
    }

    /// The wire payload this record was created from
    pub fn fields(&self) -> PaymentFields {
        PaymentFields {
            card_number: self.card_number.clone(),
            expiration_date: self.expiration_date.clone(),
            cvv: self.cvv.clone(),
            amount: self.amount.clone(),
        }
    }
}
