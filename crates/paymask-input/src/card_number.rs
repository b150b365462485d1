//! Card number masking.
//!
//! While fewer than 16 digits are present the value is kept as raw digits.
//! The 16th digit triggers grouping into `DDDD DDDD DDDD DDDD`. Editing the
//! grouped value (which yields an 18 character proposal) collapses it back
//! to raw digits so the user can keep deleting.

use paymask_core::Field;
use paymask_core::constants::{
    CARD_COLLAPSE_LENGTH, CARD_DIGITS, CARD_GROUP_SEPARATOR, CARD_GROUP_SIZE,
};

use crate::classifier::check_last_char;
use crate::masker::{MaskOutcome, Masker, Rejection};

/// Masker for the card number field.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardNumberMasker;

impl Masker for CardNumberMasker {
    fn field(&self) -> Field {
        Field::CardNumber
    }

    fn mask(&self, proposed: &str) -> MaskOutcome {
        mask_card_number(proposed).into()
    }
}

fn mask_card_number(proposed: &str) -> Result<String, Rejection> {
    check_last_char(proposed)?;

    let len = proposed.chars().count();
    if len == CARD_COLLAPSE_LENGTH {
        let collapsed: String = proposed
            .chars()
            .filter(|c| *c != CARD_GROUP_SEPARATOR)
            .collect();
        return fit_to_length(&collapsed);
    }

    fit_to_length(proposed)
}

fn fit_to_length(value: &str) -> Result<String, Rejection> {
    let len = value.chars().count();
    if len > CARD_DIGITS {
        return Err(Rejection::TooLong {
            max: CARD_DIGITS,
            actual: len,
        });
    }
    if len == CARD_DIGITS {
        return Ok(group(value));
    }
    Ok(value.to_string())
}

/// Split a 16 character value into four space-separated groups.
fn group(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let separator = CARD_GROUP_SEPARATOR.to_string();
    chars
        .chunks(CARD_GROUP_SIZE)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(separator.as_str())
}
