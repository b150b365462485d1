//! Amount masking.
//!
//! Accepts a non-negative decimal with at most two fraction digits and a
//! value no greater than 10^12. Committed values are normalized by parsing
//! and re-formatting the number, which drops leading zeros and a zero-only
//! fraction (`"007"` becomes `"7"`, `"50.0"` becomes `"50"`). A trailing
//! decimal point is kept verbatim so the user can continue typing the
//! fraction.

use paymask_core::constants::{AMOUNT_DECIMAL_POINT, AMOUNT_MAX_FRACTION_DIGITS, AMOUNT_MAX_VALUE};
use paymask_core::{Field, format_number};

use crate::masker::{MaskOutcome, Masker, Rejection};

/// Masker for the amount field.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountMasker;

impl Masker for AmountMasker {
    fn field(&self) -> Field {
        Field::Amount
    }

    fn mask(&self, proposed: &str) -> MaskOutcome {
        mask_amount(proposed).into()
    }
}

fn mask_amount(proposed: &str) -> Result<String, Rejection> {
    if proposed.is_empty() {
        return Ok(String::new());
    }

    if let Some((_, fraction)) = proposed.split_once(AMOUNT_DECIMAL_POINT) {
        let digits = fraction
            .split(AMOUNT_DECIMAL_POINT)
            .next()
            .unwrap_or_default()
            .chars()
            .count();
        if digits > AMOUNT_MAX_FRACTION_DIGITS {
            return Err(Rejection::TooManyFractionDigits {
                max: AMOUNT_MAX_FRACTION_DIGITS,
                actual: digits,
            });
        }
    }

    if proposed.matches(AMOUNT_DECIMAL_POINT).count() > 1 {
        return Err(Rejection::MultipleDecimalPoints);
    }

    let value = parse_amount(proposed).ok_or_else(|| Rejection::NotANumber(proposed.to_string()))?;
    if value > AMOUNT_MAX_VALUE {
        return Err(Rejection::AmountTooLarge);
    }

    if proposed.ends_with(AMOUNT_DECIMAL_POINT) {
        return Ok(proposed.to_string());
    }

    Ok(format_number(value))
}

/// Parse an amount made of ASCII digits with at most one decimal point.
///
/// At least one digit must be present. Signs, exponents and whitespace are
/// not accepted.
pub fn parse_amount(value: &str) -> Option<f64> {
    let mut has_digit = false;
    let mut has_point = false;
    for c in value.chars() {
        match c {
            '0'..='9' => has_digit = true,
            AMOUNT_DECIMAL_POINT if !has_point => has_point = true,
            _ => return None,
        }
    }
    if !has_digit {
        return None;
    }

    let trimmed = value.strip_suffix(AMOUNT_DECIMAL_POINT).unwrap_or(value);
    let normalized = if trimmed.starts_with(AMOUNT_DECIMAL_POINT) {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    };
    normalized.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mask(proposed: &str) -> MaskOutcome {
        AmountMasker.mask(proposed)
    }

    #[rstest]
    #[case("", "")]
    #[case("5", "5")]
    #[case("50", "50")]
    #[case("007", "7")]
    #[case("50.", "50.")]
    #[case("50.0", "50")]
    #[case("50.05", "50.05")]
    #[case("7.00", "7")]
    #[case(".5", "0.5")]
    #[case("0", "0")]
    #[case("1000000000000", "1000000000000")]
    fn test_commits(#[case] proposed: &str, #[case] expected: &str) {
        assert_eq!(mask(proposed), MaskOutcome::Commit(expected.to_string()));
    }

    #[test]
    fn test_rejects_third_fraction_digit() {
        assert_eq!(
            mask("7.005"),
            MaskOutcome::Reject(Rejection::TooManyFractionDigits { max: 2, actual: 3 })
        );
        assert_eq!(AmountMasker.apply("7.005", "7"), "7");
    }

    #[test]
    fn test_rejects_second_decimal_point() {
        assert_eq!(mask("7.0."), MaskOutcome::Reject(Rejection::MultipleDecimalPoints));
        assert_eq!(mask("1.2.3"), MaskOutcome::Reject(Rejection::MultipleDecimalPoints));
    }

    #[test]
    fn test_rejects_above_maximum() {
        assert_eq!(mask("1000000000001"), MaskOutcome::Reject(Rejection::AmountTooLarge));
    }

    #[rstest]
    #[case(".")]
    #[case("5a")]
    #[case("-5")]
    #[case("1e5")]
    #[case(" 5")]
    fn test_rejects_non_numbers(#[case] proposed: &str) {
        assert!(matches!(mask(proposed), MaskOutcome::Reject(Rejection::NotANumber(_))));
    }

    #[test]
    fn test_trailing_zero_after_point_is_dropped() {
        let value = AmountMasker.apply("50.", "50");
        assert_eq!(value, "50.");
        let value = AmountMasker.apply(&format!("{value}0"), &value);
        assert_eq!(value, "50");
    }

    #[test]
    fn test_delete_backward() {
        assert_eq!(AmountMasker.delete_backward("50.25"), MaskOutcome::Commit("50.2".to_string()));
        assert_eq!(AmountMasker.delete_backward("5"), MaskOutcome::Commit(String::new()));
    }

    #[rstest]
    #[case("12", Some(12.0))]
    #[case("12.", Some(12.0))]
    #[case(".25", Some(0.25))]
    #[case("", None)]
    #[case("..", None)]
    #[case("+1", None)]
    fn test_parse_amount(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_amount(input), expected);
    }
}
