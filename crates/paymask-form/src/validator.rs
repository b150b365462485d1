//! Form validation and the validity aggregate.
//!
//! The validator is a set of pure predicates over the committed field
//! values. It is independent of the maskers: it makes no assumption that a
//! value was produced by one, so it can be run against restored or
//! externally supplied state.
//!
//! # Validation Order
//!
//! For the expiration date, the first applicable check wins:
//!
//! 1. **Format**: length 7, digits on both sides of `/` → `Wrong format`
//! 2. **Month range**: month in 1-12 → `Wrong month`
//! 3. **Past month**: current year and month already over → `Wrong month`
//! 4. **Past year**: year before the current year → `Wrong year`
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use paymask_core::{Field, PaymentFields};
//! use paymask_form::{FormValidator, is_form_valid};
//!
//! let validator = FormValidator::new()
//!     .with_reference_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
//!
//! let fields = PaymentFields {
//!     card_number: "1234 1234 1234 1234".to_string(),
//!     expiration_date: "01/2099".to_string(),
//!     cvv: "123".to_string(),
//!     amount: String::new(),
//! };
//!
//! let result = validator.validate(&fields);
//! assert!(!is_form_valid(&result));
//! assert_eq!(result.error(Field::Amount), Some("Enter the value, please"));
//! ```

use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};
use paymask_core::constants::{
    CARD_DIGITS, CARD_GROUP_SEPARATOR, CVV_LENGTH, EXPIRATION_DATE_LENGTH,
    EXPIRATION_DATE_SEPARATOR,
};
use paymask_core::{Field, PaymentFields};
use serde::Serialize;

use crate::messages::ValidationMessages;

/// Per-field validation messages. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationResult {
    /// Get the error message for a field, if any.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Iterate over invalid fields and their messages, in form order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Reduce a validation result to the submit-enabled signal.
///
/// Returns `true` iff no field has an error message.
pub fn is_form_valid(result: &ValidationResult) -> bool {
    result.is_empty()
}

/// Validator for the four payment fields.
///
/// Expiration dates are checked against a reference date: the local date
/// at validation time unless one is set with
/// [`with_reference_date`](FormValidator::with_reference_date).
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator {
    reference_date: Option<NaiveDate>,
}

impl FormValidator {
    /// Create a validator that uses the local clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the date that expiration dates are compared against.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Get the date expiration dates are currently compared against.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Validate every field.
    pub fn validate(&self, fields: &PaymentFields) -> ValidationResult {
        let today = self.today();
        let errors = Field::ALL
            .into_iter()
            .filter_map(|field| {
                validate_with_date(field, fields.get(field), today).map(|message| (field, message))
            })
            .collect();
        ValidationResult { errors }
    }

    /// Validate a single field value.
    pub fn validate_field(&self, field: Field, value: &str) -> Option<&'static str> {
        validate_with_date(field, value, self.today())
    }
}

fn validate_with_date(field: Field, value: &str, today: NaiveDate) -> Option<&'static str> {
    match field {
        Field::CardNumber => validate_card_number(value),
        Field::ExpirationDate => validate_expiration_date(value, today),
        Field::Cvv => validate_cvv(value),
        Field::Amount => validate_amount(value),
    }
}

fn validate_card_number(value: &str) -> Option<&'static str> {
    let digits = value.chars().filter(|c| *c != CARD_GROUP_SEPARATOR).count();
    (digits < CARD_DIGITS).then_some(ValidationMessages::CARD_NUMBER_TOO_SHORT)
}

fn validate_expiration_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    if value.chars().count() != EXPIRATION_DATE_LENGTH {
        return Some(ValidationMessages::WRONG_FORMAT);
    }

    let Some((month, year)) = parse_month_year(value) else {
        return Some(ValidationMessages::WRONG_FORMAT);
    };

    if !(1..=12).contains(&month) {
        return Some(ValidationMessages::WRONG_MONTH);
    }
    if year == today.year() && month < today.month() {
        return Some(ValidationMessages::WRONG_MONTH);
    }
    if year < today.year() {
        return Some(ValidationMessages::WRONG_YEAR);
    }

    None
}

fn parse_month_year(value: &str) -> Option<(u32, i32)> {
    let (month, year) = value.split_once(EXPIRATION_DATE_SEPARATOR)?;
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(month) || !all_digits(year) {
        return None;
    }
    Some((month.parse().ok()?, year.parse().ok()?))
}

fn validate_cvv(value: &str) -> Option<&'static str> {
    (value.chars().count() < CVV_LENGTH).then_some(ValidationMessages::CVV_TOO_SHORT)
}

fn validate_amount(value: &str) -> Option<&'static str> {
    value.is_empty().then_some(ValidationMessages::AMOUNT_REQUIRED)
}
