//! Expiration date masking (`MM/YYYY`).
//!
//! The separator is inserted automatically once the two month digits are
//! typed. Because of that, deleting from `MM/` must remove the separator as
//! a unit; otherwise the insertion rule would immediately put it back and
//! the user could never delete past it. That case has its own entry point,
//! [`handle_deletion`].

use paymask_core::Field;
use paymask_core::constants::{
    EXPIRATION_DATE_LENGTH, EXPIRATION_DATE_SEPARATOR, EXPIRATION_MONTH_LENGTH,
    EXPIRATION_MONTH_WITH_SEPARATOR,
};

use crate::classifier::check_last_char;
use crate::masker::{MaskOutcome, Masker, Rejection, drop_last_char, mask_shortened};

/// Masker for the expiration date field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpirationDateMasker;

impl Masker for ExpirationDateMasker {
    fn field(&self) -> Field {
        Field::ExpirationDate
    }

    fn mask(&self, proposed: &str) -> MaskOutcome {
        mask_expiration_date(proposed).into()
    }

    fn delete_backward(&self, current: &str) -> MaskOutcome {
        if is_month_with_separator(current) {
            return MaskOutcome::Commit(handle_deletion(current));
        }

        // Deleting down to two characters must not re-insert the separator.
        let shortened = drop_last_char(current);
        if shortened.chars().count() == EXPIRATION_MONTH_LENGTH {
            return MaskOutcome::Commit(shortened);
        }
        mask_shortened(self, shortened)
    }
}

/// `MM/`: three characters ending in the auto-inserted separator.
fn is_month_with_separator(value: &str) -> bool {
    value.chars().count() == EXPIRATION_MONTH_WITH_SEPARATOR
        && value.ends_with(EXPIRATION_DATE_SEPARATOR)
}

fn mask_expiration_date(proposed: &str) -> Result<String, Rejection> {
    check_last_char(proposed)?;

    let chars: Vec<char> = proposed.chars().collect();
    let len = chars.len();

    if len > EXPIRATION_DATE_LENGTH {
        return Err(Rejection::TooLong {
            max: EXPIRATION_DATE_LENGTH,
            actual: len,
        });
    }

    if len == EXPIRATION_DATE_LENGTH {
        if chars[EXPIRATION_MONTH_LENGTH] != EXPIRATION_DATE_SEPARATOR {
            return Err(Rejection::MisplacedSeparator);
        }
        let month: String = chars[..EXPIRATION_MONTH_LENGTH].iter().collect();
        let year: String = chars[EXPIRATION_MONTH_WITH_SEPARATOR..].iter().collect();
        return Ok(format!("{month}{EXPIRATION_DATE_SEPARATOR}{year}"));
    }

    if len == EXPIRATION_MONTH_LENGTH {
        return Ok(format!("{proposed}{EXPIRATION_DATE_SEPARATOR}"));
    }

    Ok(proposed.to_string())
}

/// Deletion-key handling for the expiration date.
///
/// When the field holds exactly `MM/` (three characters ending in `/`), the
/// auto-inserted separator is removed together with the deletion, leaving
/// the part before the slash. Any other value is returned unchanged;
/// ordinary deletion goes through the insertion rules.
///
/// # Examples
///
/// ```
/// use paymask_input::handle_deletion;
///
/// assert_eq!(handle_deletion("12/"), "12");
/// assert_eq!(handle_deletion("12/2"), "12/2");
/// assert_eq!(handle_deletion("123"), "123");
/// ```
pub fn handle_deletion(current: &str) -> String {
    if !is_month_with_separator(current) {
        return current.to_string();
    }
    current
        .split(EXPIRATION_DATE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mask(proposed: &str) -> MaskOutcome {
        ExpirationDateMasker.mask(proposed)
    }

    #[rstest]
    #[case("", "")]
    #[case("1", "1")]
    #[case("12", "12/")]
    #[case("12/", "12/")]
    #[case("12/2", "12/2")]
    #[case("12/202", "12/202")]
    #[case("12/2099", "12/2099")]
    fn test_commits(#[case] proposed: &str, #[case] expected: &str) {
        assert_eq!(mask(proposed), MaskOutcome::Commit(expected.to_string()));
    }

    #[rstest]
    #[case("12/20991")]
    #[case("12/209912")]
    fn test_rejects_too_long(#[case] proposed: &str) {
        assert!(matches!(mask(proposed), MaskOutcome::Reject(Rejection::TooLong { .. })));
    }

    #[test]
    fn test_rejects_misplaced_separator() {
        assert_eq!(mask("1220991"), MaskOutcome::Reject(Rejection::MisplacedSeparator));
        assert_eq!(mask("122/099"), MaskOutcome::Reject(Rejection::MisplacedSeparator));
    }

    #[test]
    fn test_rejects_letters() {
        assert_eq!(
            mask("12/a"),
            MaskOutcome::Reject(Rejection::UnacceptableCharacter('a'))
        );
    }

    #[test]
    fn test_auto_slash_while_typing() {
        let mut value = String::new();
        let mut seen = Vec::new();
        for c in "122023".chars() {
            value = ExpirationDateMasker.apply(&format!("{value}{c}"), &value);
            seen.push(value.clone());
        }
        assert_eq!(seen, vec!["1", "12/", "12/2", "12/20", "12/202", "12/2023"]);
    }

    #[rstest]
    #[case("12/", "12")]
    #[case("1//", "1")]
    #[case("1/2", "1/2")]
    #[case("123", "123")]
    #[case("12/2", "12/2")]
    #[case("12", "12")]
    #[case("", "")]
    fn test_handle_deletion(#[case] current: &str, #[case] expected: &str) {
        assert_eq!(handle_deletion(current), expected);
    }

    #[test]
    fn test_delete_backward_walks_down_to_empty() {
        let mut value = "12/2099".to_string();
        let mut seen = Vec::new();
        while !value.is_empty() {
            value = ExpirationDateMasker.delete_backward(&value).resolve(&value);
            seen.push(value.clone());
        }
        assert_eq!(seen, vec!["12/209", "12/20", "12/2", "12/", "12", "1", ""]);
    }

    #[test]
    fn test_delete_backward_after_retyping_past_month() {
        let mut value = String::new();
        for c in "12".chars() {
            value = ExpirationDateMasker.apply(&format!("{value}{c}"), &value);
        }
        assert_eq!(value, "12/");

        value = ExpirationDateMasker.delete_backward(&value).resolve(&value);
        assert_eq!(value, "12");

        value = ExpirationDateMasker.apply(&format!("{value}3"), &value);
        assert_eq!(value, "123");

        let mut seen = Vec::new();
        while !value.is_empty() {
            value = ExpirationDateMasker.delete_backward(&value).resolve(&value);
            seen.push(value.clone());
        }
        assert_eq!(seen, vec!["12", "1", ""]);
    }

    #[test]
    fn test_delete_backward_never_reinserts_separator() {
        assert_eq!(
            ExpirationDateMasker.delete_backward("123"),
            MaskOutcome::Commit("12".to_string())
        );
        assert_eq!(
            ExpirationDateMasker.delete_backward("1//"),
            MaskOutcome::Commit("1".to_string())
        );
    }
}
