use chrono::NaiveDate;

use super::required_arg;
use crate::error::ContactError;
use crate::models::AddressBook;
use crate::services::birthday_service::BirthdayService;

/// Set a contact's birthday: `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(
    book: &mut AddressBook,
    args: &[String],
    today: NaiveDate,
) -> Result<String, ContactError> {
    let name = required_arg(args, 0, "name and birthday")?;
    let birthday = required_arg(args, 1, "name and birthday")?;
    let record = book.find_mut(name)?;
    record.add_birthday(birthday, today)?;
    Ok(format!("Updated: {}", record))
}

/// Show a contact's birthday: `show-birthday <name>`
pub fn show_birthday(
    book: &mut AddressBook,
    args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    let name = required_arg(args, 0, "contact name")?;
    let record = book.find(name)?;
    Ok(format!("{}: {}.", record.name(), record.birthday_display()))
}

/// Birthdays to celebrate in the coming week: `birthdays`
pub fn upcoming_birthdays(
    book: &mut AddressBook,
    _args: &[String],
    today: NaiveDate,
) -> Result<String, ContactError> {
    Ok(BirthdayService::new(book).upcoming_week(today).to_string())
}
