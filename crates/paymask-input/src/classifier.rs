//! Character classification shared by the numeric field maskers.

use crate::masker::Rejection;

/// Check whether a keystroke string may enter a numeric field.
///
/// A string is acceptable when it is a single space, a single forward
/// slash, or still contains at least one ASCII digit after every non-digit
/// is stripped. The empty string is acceptable so that deleting the last
/// character of a field is always allowed.
///
/// # Examples
///
/// ```
/// use paymask_input::is_acceptable;
///
/// assert!(is_acceptable("7"));
/// assert!(is_acceptable(" "));
/// assert!(is_acceptable("/"));
/// assert!(is_acceptable(""));
/// assert!(!is_acceptable("a"));
/// assert!(!is_acceptable("-"));
/// ```
pub fn is_acceptable(s: &str) -> bool {
    s.is_empty() || s == " " || s == "/" || s.chars().any(|c| c.is_ascii_digit())
}

/// Gate a proposed value on its last character.
///
/// Only the most recent character is inspected; earlier characters were
/// already accepted when the previous value was committed.
pub(crate) fn check_last_char(proposed: &str) -> Result<(), Rejection> {
    match proposed.chars().next_back() {
        Some(c) if !is_acceptable_char(c) => Err(Rejection::UnacceptableCharacter(c)),
        _ => Ok(()),
    }
}

fn is_acceptable_char(c: char) -> bool {
    c == ' ' || c == '/' || c.is_ascii_digit()
}
