//! The masker abstraction and its outcome type.

use paymask_core::Field;
use thiserror::Error;

use crate::{AmountMasker, CardNumberMasker, CvvMasker, ExpirationDateMasker};

/// Reason a proposed value was not committed.
///
/// Rejections are silent from the user's point of view: the keystroke has
/// no visible effect. The reason exists for tracing and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The last character is neither a digit, a space nor a slash.
    #[error("Unacceptable character {0:?}")]
    UnacceptableCharacter(char),

    /// The value is longer than the field allows.
    #[error("Value too long: maximum {max}, got {actual}")]
    TooLong { max: usize, actual: usize },

    /// A complete expiration date without `/` at index 2.
    #[error("Separator must follow the two month digits")]
    MisplacedSeparator,

    /// More than two digits after the decimal point.
    #[error("At most {max} fraction digits allowed, got {actual}")]
    TooManyFractionDigits { max: usize, actual: usize },

    /// More than one decimal point.
    #[error("At most one decimal point allowed")]
    MultipleDecimalPoints,

    /// The amount does not parse as a number.
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    /// The amount exceeds the maximum accepted value.
    #[error("Amount exceeds maximum")]
    AmountTooLarge,
}

/// Result of running a masker over one proposed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskOutcome {
    /// The value to store as the field's new committed value.
    Commit(String),

    /// The proposed value was refused; the previous value stays.
    Reject(Rejection),
}

impl MaskOutcome {
    /// Check if the outcome commits a value.
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Commit(_))
    }

    /// Get the committed value, if any.
    pub fn committed(&self) -> Option<&str> {
        match self {
            Self::Commit(value) => Some(value),
            Self::Reject(_) => None,
        }
    }

    /// Resolve to the value the field holds after this outcome.
    pub fn resolve(self, previous: &str) -> String {
        match self {
            Self::Commit(value) => value,
            Self::Reject(_) => previous.to_string(),
        }
    }
}

impl From<Result<String, Rejection>> for MaskOutcome {
    fn from(result: Result<String, Rejection>) -> Self {
        match result {
            Ok(value) => Self::Commit(value),
            Err(rejection) => Self::Reject(rejection),
        }
    }
}

/// Incremental formatter for one payment field.
///
/// Implementations are pure: the outcome depends only on the proposed
/// string. Each call is evaluated independently against whatever value is
/// committed at that moment.
pub trait Masker: Send + Sync {
    /// The field this masker formats.
    fn field(&self) -> Field;

    /// Run the insertion rules over a full proposed value.
    fn mask(&self, proposed: &str) -> MaskOutcome;

    /// Run the deletion rules against the current committed value.
    ///
    /// The default removes the last character and feeds the result through
    /// [`Masker::mask`]. Deletion always commits: a shortened value the
    /// insertion rules refuse (a pasted value with an inner letter) is kept
    /// as is, so repeated deletion always empties the field.
    fn delete_backward(&self, current: &str) -> MaskOutcome {
        mask_shortened(self, drop_last_char(current))
    }

    /// Apply a proposed value, returning the field's resulting value.
    ///
    /// # Examples
    ///
    /// ```
    /// use paymask_input::{CvvMasker, Masker};
    ///
    /// assert_eq!(CvvMasker.apply("12", "1"), "12");
    /// assert_eq!(CvvMasker.apply("1234", "123"), "123");
    /// ```
    fn apply(&self, proposed: &str, previous: &str) -> String {
        self.mask(proposed).resolve(previous)
    }
}

static CARD_NUMBER: CardNumberMasker = CardNumberMasker;
static EXPIRATION_DATE: ExpirationDateMasker = ExpirationDateMasker;
static CVV: CvvMasker = CvvMasker;
static AMOUNT: AmountMasker = AmountMasker;

/// Get the masker responsible for a field.
pub fn masker_for(field: Field) -> &'static dyn Masker {
    match field {
        Field::CardNumber => &CARD_NUMBER,
        Field::ExpirationDate => &EXPIRATION_DATE,
        Field::Cvv => &CVV,
        Field::Amount => &AMOUNT,
    }
}

pub(crate) fn mask_shortened<M: Masker + ?Sized>(masker: &M, shortened: String) -> MaskOutcome {
    match masker.mask(&shortened) {
        MaskOutcome::Reject(_) => MaskOutcome::Commit(shortened),
        commit => commit,
    }
}

pub(crate) fn drop_last_char(value: &str) -> String {
    let mut chars = value.chars();
    chars.next_back();
    chars.as_str().to_string()
}
