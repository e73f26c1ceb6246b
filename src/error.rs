use thiserror::Error;

/// Every failure a contact book operation can report
///
/// Variants carry the offending input so it can be logged; the fixed
/// user-facing sentence for each kind lives in `utils::messages`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("name '{0}' is shorter than the minimum length")]
    InvalidName(String),

    #[error("phone '{0}' is not exactly 10 digits")]
    InvalidPhone(String),

    #[error("birthday '{0}' does not match DD.MM.YYYY")]
    BirthdayFormat(String),

    #[error("birthday '{0}' is in the future or too far in the past")]
    BirthdayRange(String),

    #[error("contact '{0}' already exists")]
    DuplicateName(String),

    #[error("contact '{0}' not found")]
    NotFound(String),

    #[error("phone '{phone}' not found on contact '{name}'")]
    PhoneNotFound { name: String, phone: String },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}
