//! CVV masking. Raw digits, no reformatting; hiding the value is left to
//! the renderer.

use paymask_core::Field;
use paymask_core::constants::CVV_LENGTH;

use crate::classifier::check_last_char;
use crate::masker::{MaskOutcome, Masker, Rejection};

/// Masker for the CVV field.
#[derive(Debug, Clone, Copy, Default)]
pub struct CvvMasker;

impl Masker for CvvMasker {
    fn field(&self) -> Field {
        Field::Cvv
    }

    fn mask(&self, proposed: &str) -> MaskOutcome {
        mask_cvv(proposed).into()
    }
}

fn mask_cvv(proposed: &str) -> Result<String, Rejection> {
    check_last_char(proposed)?;

    let len = proposed.chars().count();
    if len > CVV_LENGTH {
        return Err(Rejection::TooLong {
            max: CVV_LENGTH,
            actual: len,
        });
    }
    Ok(proposed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("1")]
    #[case("12")]
    #[case("123")]
    fn test_commits_verbatim(#[case] proposed: &str) {
        assert_eq!(CvvMasker.mask(proposed), MaskOutcome::Commit(proposed.to_string()));
    }

    #[test]
    fn test_rejects_fourth_digit() {
        assert_eq!(
            CvvMasker.mask("1234"),
            MaskOutcome::Reject(Rejection::TooLong { max: 3, actual: 4 })
        );
    }

    #[test]
    fn test_rejects_letter() {
        assert_eq!(CvvMasker.apply("12x", "12"), "12");
    }

    #[test]
    fn test_delete_backward() {
        assert_eq!(CvvMasker.delete_backward("123"), MaskOutcome::Commit("12".to_string()));
        assert_eq!(CvvMasker.delete_backward(""), MaskOutcome::Commit(String::new()));
    }

    #[test]
    fn test_delete_backward_through_pasted_letter() {
        // Only the last character of a proposal is classified.
        let mut value = CvvMasker.apply("1a3", "");
        assert_eq!(value, "1a3");

        let mut seen = Vec::new();
        while !value.is_empty() {
            value = CvvMasker.delete_backward(&value).resolve(&value);
            seen.push(value.clone());
        }
        assert_eq!(seen, vec!["1a", "1", ""]);
    }
}
