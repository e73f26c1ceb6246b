/// Translation of contact book failures into fixed user-facing sentences
use crate::error::ContactError;

/// The fixed sentence shown to the user for each kind of failure
pub fn describe_error(error: &ContactError) -> String {
    match error {
        ContactError::InvalidName(_) => "The name must contain at least 3 characters.".to_string(),
        ContactError::InvalidPhone(_) => {
            "Wrong phone number format, should be 10 digits, ex. 1234567890.".to_string()
        }
        ContactError::BirthdayFormat(_) => "Birthday must be in DD.MM.YYYY format.".to_string(),
        ContactError::BirthdayRange(_) => {
            "Birthday cannot be in future or more than 100 years ago.".to_string()
        }
        ContactError::DuplicateName(_) => "A contact with that name already exists.".to_string(),
        ContactError::NotFound(_) => "Contact not found.".to_string(),
        ContactError::PhoneNotFound { .. } => {
            "There is no such phone number in the record.".to_string()
        }
        ContactError::MissingArgument(what) => format!("Provide {}.", what),
    }
}

/// Message for a command word that is not in the command table
pub fn build_invalid_command() -> String {
    "Invalid command.".to_string()
}

/// Message reported when saving the contact book fails
pub fn build_save_error() -> String {
    "Failed to save the contact book, changes are lost.".to_string()
}
