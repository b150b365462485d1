//! Format constants for the four payment fields.
//!
//! Every length used by the maskers and the form validator is defined here
//! so that the keystroke rules and the submit-time checks agree on what a
//! complete value looks like.
//!
//! # Display Formats
//!
//! | Field | Committed form | Example |
//! |-------|----------------|---------|
//! | Card number | 16 digits in groups of 4 | `1234 5678 9012 3456` |
//! | Expiration date | `MM/YYYY` | `01/2099` |
//! | CVV | 3 digits | `123` |
//! | Amount | decimal, at most 2 fractional digits | `50.25` |
//!
//! # Usage
//!
//! ```
//! use paymask_core::constants::*;
//!
//! assert_eq!(CARD_DIGITS + CARD_GROUP_COUNT - 1, CARD_FORMATTED_LENGTH);
//! assert_eq!(EXPIRATION_DATE_LENGTH, "MM/YYYY".len());
//! ```

// ============================================================================
// Card Number
// ============================================================================

/// Number of digits in a complete card number.
pub const CARD_DIGITS: usize = 16;

/// Digits per display group.
pub const CARD_GROUP_SIZE: usize = 4;

/// Number of display groups in a complete card number.
pub const CARD_GROUP_COUNT: usize = CARD_DIGITS / CARD_GROUP_SIZE;

/// Separator inserted between card number groups.
pub const CARD_GROUP_SEPARATOR: char = ' ';

/// Length of the fully grouped card number (`DDDD DDDD DDDD DDDD`).
pub const CARD_FORMATTED_LENGTH: usize = CARD_DIGITS + CARD_GROUP_COUNT - 1;

/// Proposed length that collapses a grouped card number back to raw digits.
///
/// A grouped value that loses one character (a deletion or an edit inside
/// the grouped form) arrives with 18 characters.
pub const CARD_COLLAPSE_LENGTH: usize = CARD_FORMATTED_LENGTH - 1;

// ============================================================================
// Expiration Date
// ============================================================================

/// Separator between month and year.
pub const EXPIRATION_DATE_SEPARATOR: char = '/';

/// Number of month digits before the separator.
pub const EXPIRATION_MONTH_LENGTH: usize = 2;

/// Number of year digits after the separator.
pub const EXPIRATION_YEAR_LENGTH: usize = 4;

/// Length of a complete `MM/YYYY` value.
pub const EXPIRATION_DATE_LENGTH: usize = EXPIRATION_MONTH_LENGTH + 1 + EXPIRATION_YEAR_LENGTH;

/// Length of the month plus the auto-inserted separator (`MM/`).
pub const EXPIRATION_MONTH_WITH_SEPARATOR: usize = EXPIRATION_MONTH_LENGTH + 1;

// ============================================================================
// CVV
// ============================================================================

/// Number of digits in a CVV.
pub const CVV_LENGTH: usize = 3;

// ============================================================================
// Amount
// ============================================================================

/// Decimal separator accepted in amounts.
pub const AMOUNT_DECIMAL_POINT: char = '.';

/// Maximum number of digits after the decimal point.
pub const AMOUNT_MAX_FRACTION_DIGITS: usize = 2;

/// Largest amount accepted by the amount masker (10^12).
pub const AMOUNT_MAX_VALUE: f64 = 1_000_000_000_000.0;
