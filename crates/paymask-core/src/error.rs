use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Form errors
    #[error("Form is not valid: {0}")]
    FormInvalid(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, Error>;
