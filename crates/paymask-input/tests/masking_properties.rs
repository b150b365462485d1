//! Property-based tests for the field maskers.
//!
//! Keystroke sequences are generated at random and fed one character at a
//! time, the way a user types, and the committed value is checked after
//! every step.

use paymask_core::Field;
use paymask_core::constants::{CARD_DIGITS, CARD_FORMATTED_LENGTH, CVV_LENGTH, EXPIRATION_DATE_LENGTH};
use paymask_input::{AmountMasker, MaskOutcome, Masker, masker_for};
use proptest::prelude::*;

/// Feed keystrokes one at a time, returning every committed value.
fn type_keys(field: Field, keys: &str) -> Vec<String> {
    let masker = masker_for(field);
    let mut value = String::new();
    let mut history = Vec::new();
    for key in keys.chars() {
        let proposed = format!("{value}{key}");
        value = masker.apply(&proposed, &value);
        history.push(value.clone());
    }
    history
}

/// Feed keystrokes where `<` stands for the deletion key.
fn edit_keys(field: Field, keys: &str) -> String {
    let masker = masker_for(field);
    let mut value = String::new();
    for key in keys.chars() {
        value = if key == '<' {
            masker.delete_backward(&value).resolve(&value)
        } else {
            masker.apply(&format!("{value}{key}"), &value)
        };
    }
    value
}

/// Strategy for keystrokes a user may send into a numeric field.
fn numeric_keys() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9 /]{0,30}").expect("Failed to create keystroke regex strategy")
}

/// Strategy for letters and punctuation the classifier refuses.
fn refused_char() -> impl Strategy<Value = char> {
    prop::char::ranges(vec!['a'..='z', 'A'..='Z', '!'..='-'].into())
}

proptest! {
    /// Property: appending a refused character never changes a committed value.
    #[test]
    fn prop_letters_leave_value_unchanged(keys in "[0-9]{0,20}", letter in refused_char()) {
        for field in [Field::CardNumber, Field::ExpirationDate, Field::Cvv] {
            let value = type_keys(field, &keys).pop().unwrap_or_default();
            let proposed = format!("{value}{letter}");
            prop_assert_eq!(masker_for(field).apply(&proposed, &value), value);
        }

        let amount = type_keys(Field::Amount, &keys).pop().unwrap_or_default();
        let proposed = format!("{amount}{letter}");
        prop_assert_eq!(AmountMasker.apply(&proposed, &amount), amount);
    }

    /// Property: a card number is raw and shorter than 16, or fully grouped.
    #[test]
    fn prop_card_number_shape(keys in "[0-9]{0,30}") {
        for value in type_keys(Field::CardNumber, &keys) {
            let len = value.chars().count();
            if value.contains(' ') {
                prop_assert_eq!(len, CARD_FORMATTED_LENGTH);
                prop_assert_eq!(value.chars().filter(char::is_ascii_digit).count(), CARD_DIGITS);
            } else {
                prop_assert!(len < CARD_DIGITS);
            }
        }
    }

    /// Property: length limits hold for any keystroke mix.
    #[test]
    fn prop_length_limits(keys in numeric_keys()) {
        for value in type_keys(Field::CardNumber, &keys) {
            prop_assert!(value.chars().count() <= CARD_FORMATTED_LENGTH);
        }
        for value in type_keys(Field::ExpirationDate, &keys) {
            prop_assert!(value.chars().count() <= EXPIRATION_DATE_LENGTH);
        }
        for value in type_keys(Field::Cvv, &keys) {
            prop_assert!(value.chars().count() <= CVV_LENGTH);
        }
    }

    /// Property: a committed amount is accepted unchanged when proposed again.
    #[test]
    fn prop_amount_commit_is_stable(keys in "[0-9.]{0,16}") {
        for value in type_keys(Field::Amount, &keys) {
            prop_assert_eq!(AmountMasker.mask(&value), MaskOutcome::Commit(value.clone()));
        }
    }

    /// Property: after any mix of typing and deleting, every deletion
    /// shortens the value until the field is empty.
    #[test]
    fn prop_deletion_never_traps(keys in "[0-9 /.<]{0,30}") {
        for field in Field::ALL {
            let masker = masker_for(field);
            let mut value = edit_keys(field, &keys);
            while !value.is_empty() {
                let before = value.chars().count();
                value = masker.delete_backward(&value).resolve(&value);
                prop_assert!(
                    value.chars().count() < before,
                    "deletion did not shorten {:?} in {}", value, field
                );
            }
        }
    }
}
