/// Pure validators for contact input (name, phone, birthday)
use std::ops::RangeInclusive;

use chrono::{Months, NaiveDate};

use crate::constants::{BIRTHDAY_FORMAT, MAX_AGE_YEARS, MIN_NAME_LENGTH, PHONE_LENGTH};
use crate::error::ContactError;

/// Validate a contact name, returning it with surrounding whitespace removed
pub fn validate_name(name: &str) -> Result<String, ContactError> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ContactError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}

/// Validate a phone number: exactly 10 decimal digits
pub fn validate_phone(phone: &str) -> Result<String, ContactError> {
    if phone.len() != PHONE_LENGTH || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ContactError::InvalidPhone(phone.to_string()));
    }
    Ok(phone.to_string())
}

/// Check the `DD.MM.YYYY` shape: 1-2 digit day and month, 4 digit year
fn has_birthday_shape(birthday: &str) -> bool {
    fn is_digits(part: &str, lengths: RangeInclusive<usize>) -> bool {
        lengths.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    }

    let parts: Vec<&str> = birthday.split('.').collect();
    match parts.as_slice() {
        &[day, month, year] => {
            is_digits(day, 1..=2) && is_digits(month, 1..=2) && is_digits(year, 4..=4)
        }
        _ => false,
    }
}

/// Parse a `DD.MM.YYYY` birthday and check it lies within the last 100 years
pub fn validate_birthday(birthday: &str, today: NaiveDate) -> Result<NaiveDate, ContactError> {
    if !has_birthday_shape(birthday) {
        return Err(ContactError::BirthdayFormat(birthday.to_string()));
    }
    let parsed = NaiveDate::parse_from_str(birthday, BIRTHDAY_FORMAT)
        .map_err(|_| ContactError::BirthdayFormat(birthday.to_string()))?;

    let earliest = today
        .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
        .unwrap_or(NaiveDate::MIN);

    if parsed > today || parsed < earliest {
        return Err(ContactError::BirthdayRange(birthday.to_string()));
    }
    Ok(parsed)
}
