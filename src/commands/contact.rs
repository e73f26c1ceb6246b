use chrono::NaiveDate;

use super::required_arg;
use crate::error::ContactError;
use crate::models::{AddressBook, Record};

/// Greet the user
pub fn greetings(
    _book: &mut AddressBook,
    _args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    Ok("How can I help you?".to_string())
}

/// Create a contact, optionally with phones: `add <name> [phone...]`
///
/// Nothing is added if any phone is invalid.
pub fn add_contact(
    book: &mut AddressBook,
    args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    let name = required_arg(args, 0, "contact name")?;
    let mut record = Record::new(name)?;
    for phone in &args[1..] {
        record.add_phone(phone)?;
    }
    let message = format!("New: {}", record);
    book.add(record)?;
    Ok(message)
}

/// Append phones to an existing contact: `append <name> <phone...>`
pub fn add_phone(
    book: &mut AddressBook,
    args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    let name = required_arg(args, 0, "name and phone")?;
    required_arg(args, 1, "name and phone")?;
    let record = book.find_mut(name)?;
    for phone in &args[1..] {
        record.add_phone(phone)?;
    }
    Ok(format!("Displaying: {}", record))
}

/// Replace a phone number: `change <name> <old phone> <new phone>`
pub fn edit_phone(
    book: &mut AddressBook,
    args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    const EXPECTED: &str = "name, old phone and new phone";
    let name = required_arg(args, 0, EXPECTED)?;
    let old = required_arg(args, 1, EXPECTED)?;
    let new = required_arg(args, 2, EXPECTED)?;
    let record = book.find_mut(name)?;
    record.edit_phone(old, new)?;
    Ok(format!("Updated: {}", record))
}

/// Remove a phone number: `delete <name> <phone>`
pub fn remove_phone(
    book: &mut AddressBook,
    args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    let name = required_arg(args, 0, "name and phone")?;
    let phone = required_arg(args, 1, "name and phone")?;
    let record = book.find_mut(name)?;
    record.remove_phone(phone)?;
    Ok(format!("Updated: {}", record))
}

/// Look up one phone number of a contact: `phone <name> <phone>`
pub fn find_phone(
    book: &mut AddressBook,
    args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    let name = required_arg(args, 0, "name and phone")?;
    let phone = required_arg(args, 1, "name and phone")?;
    let record = book.find(name)?;
    let index = record.find_phone(phone)?;
    Ok(format!("{}: {}.", record.name(), record.phones()[index]))
}

/// Show a single contact: `show <name>`
pub fn find_contact(
    book: &mut AddressBook,
    args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    let name = required_arg(args, 0, "contact name")?;
    Ok(book.find(name)?.to_text())
}

/// Delete a contact: `remove <name>`
pub fn remove_contact(
    book: &mut AddressBook,
    args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    let name = required_arg(args, 0, "contact name")?;
    let record = book.delete(name)?;
    Ok(format!("Contact: {} removed.", record.name()))
}

/// List every contact in name order: `all`
pub fn show_contacts(
    book: &mut AddressBook,
    _args: &[String],
    _today: NaiveDate,
) -> Result<String, ContactError> {
    if book.is_empty() {
        return Ok("Contact list is empty.".to_string());
    }
    let lines: Vec<String> = book.all_sorted().iter().map(|r| r.to_text()).collect();
    Ok(format!("Contact list:\n{}", lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn run(
        handler: crate::commands::Handler,
        book: &mut AddressBook,
        values: &[&str],
    ) -> Result<String, ContactError> {
        handler(book, &args(values), today())
    }

    #[test]
    fn test_add_contact() {
        let mut book = AddressBook::new();
        let result = run(add_contact, &mut book, &["Anna", "1111111111", "2222222222"]);
        assert_eq!(
            result.unwrap(),
            "New: Anna: phones: 1111111111, 2222222222, birthday: not set."
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_contact_without_phones() {
        let mut book = AddressBook::new();
        assert!(run(add_contact, &mut book, &["Anna"]).is_ok());
        assert!(book.find("Anna").unwrap().phones().is_empty());
    }

    #[test]
    fn test_add_contact_errors() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(add_contact, &mut book, &[]),
            Err(ContactError::MissingArgument("contact name"))
        );
        assert!(matches!(
            run(add_contact, &mut book, &["Al"]),
            Err(ContactError::InvalidName(_))
        ));
        assert!(matches!(
            run(add_contact, &mut book, &["Anna", "123"]),
            Err(ContactError::InvalidPhone(_))
        ));
        assert!(book.is_empty());

        run(add_contact, &mut book, &["Anna"]).unwrap();
        assert_eq!(
            run(add_contact, &mut book, &["Anna", "1111111111"]),
            Err(ContactError::DuplicateName("Anna".to_string()))
        );
        assert!(book.find("Anna").unwrap().phones().is_empty());
    }

    #[test]
    fn test_add_phone() {
        let mut book = AddressBook::new();
        run(add_contact, &mut book, &["Anna", "1111111111"]).unwrap();
        let result = run(add_phone, &mut book, &["Anna", "2222222222"]).unwrap();
        assert_eq!(
            result,
            "Displaying: Anna: phones: 1111111111, 2222222222, birthday: not set."
        );
        assert_eq!(
            run(add_phone, &mut book, &["Anna"]),
            Err(ContactError::MissingArgument("name and phone"))
        );
        assert_eq!(
            run(add_phone, &mut book, &["Bob", "2222222222"]),
            Err(ContactError::NotFound("Bob".to_string()))
        );
    }

    #[test]
    fn test_edit_and_remove_phone() {
        let mut book = AddressBook::new();
        run(add_contact, &mut book, &["Anna", "1111111111", "2222222222"]).unwrap();

        let edited = run(edit_phone, &mut book, &["Anna", "1111111111", "3333333333"]).unwrap();
        assert_eq!(
            edited,
            "Updated: Anna: phones: 3333333333, 2222222222, birthday: not set."
        );

        let removed = run(remove_phone, &mut book, &["Anna", "3333333333"]).unwrap();
        assert_eq!(removed, "Updated: Anna: phones: 2222222222, birthday: not set.");

        assert!(matches!(
            run(remove_phone, &mut book, &["Anna", "3333333333"]),
            Err(ContactError::PhoneNotFound { .. })
        ));
        assert!(matches!(
            run(edit_phone, &mut book, &["Anna", "2222222222"]),
            Err(ContactError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_find_phone() {
        let mut book = AddressBook::new();
        run(add_contact, &mut book, &["Anna", "1111111111"]).unwrap();
        assert_eq!(
            run(find_phone, &mut book, &["Anna", "1111111111"]).unwrap(),
            "Anna: 1111111111."
        );
        assert!(matches!(
            run(find_phone, &mut book, &["Anna", "9999999999"]),
            Err(ContactError::PhoneNotFound { .. })
        ));
    }

    #[test]
    fn test_find_and_remove_contact() {
        let mut book = AddressBook::new();
        run(add_contact, &mut book, &["Anna"]).unwrap();

        assert_eq!(
            run(find_contact, &mut book, &["Anna"]).unwrap(),
            "Anna: phones: none, birthday: not set."
        );
        assert_eq!(
            run(remove_contact, &mut book, &["Anna"]).unwrap(),
            "Contact: Anna removed."
        );
        assert_eq!(
            run(find_contact, &mut book, &["Anna"]),
            Err(ContactError::NotFound("Anna".to_string()))
        );
        assert_eq!(
            run(remove_contact, &mut book, &[]),
            Err(ContactError::MissingArgument("contact name"))
        );
    }

    #[test]
    fn test_show_contacts() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(show_contacts, &mut book, &[]).unwrap(),
            "Contact list is empty."
        );

        run(add_contact, &mut book, &["Cara"]).unwrap();
        run(add_contact, &mut book, &["Anna", "1111111111"]).unwrap();
        assert_eq!(
            run(show_contacts, &mut book, &[]).unwrap(),
            "Contact list:\nAnna: phones: 1111111111, birthday: not set.\nCara: phones: none, birthday: not set."
        );
    }

    #[test]
    fn test_greetings() {
        let mut book = AddressBook::new();
        assert_eq!(run(greetings, &mut book, &[]).unwrap(), "How can I help you?");
    }
}
