//! Keystroke masking for the payment form fields.
//!
//! Each field has a [`Masker`] that receives the full proposed value of the
//! field after one edit and either commits a new, display-formatted value or
//! rejects the edit. A rejected edit leaves the previous committed value in
//! place; it is never surfaced as an error to the user.
//!
//! Two input channels exist:
//! - [`Masker::mask`] for typed or pasted text (the whole candidate string)
//! - [`Masker::delete_backward`] for the deletion key
//!
//! # Examples
//!
//! ```
//! use paymask_core::Field;
//! use paymask_input::masker_for;
//!
//! let card = masker_for(Field::CardNumber);
//!
//! let mut value = String::new();
//! for digit in "1234123412341234".chars() {
//!     let proposed = format!("{value}{digit}");
//!     value = card.apply(&proposed, &value);
//! }
//! assert_eq!(value, "1234 1234 1234 1234");
//!
//! // A 17th digit is rejected
//! let proposed = format!("{value}5");
//! assert_eq!(card.apply(&proposed, &value), "1234 1234 1234 1234");
//! ```

pub mod amount;
pub mod card_number;
pub mod classifier;
pub mod cvv;
pub mod expiration_date;
pub mod masker;

pub use amount::AmountMasker;
pub use card_number::CardNumberMasker;
pub use classifier::is_acceptable;
pub use cvv::CvvMasker;
pub use expiration_date::{ExpirationDateMasker, handle_deletion};
pub use masker::{MaskOutcome, Masker, Rejection, masker_for};
