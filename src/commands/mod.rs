// Command modules
mod birthday;
mod contact;

use chrono::NaiveDate;

use crate::error::ContactError;
use crate::models::AddressBook;

pub use birthday::{add_birthday, show_birthday, upcoming_birthdays};
pub use contact::{
    add_contact, add_phone, edit_phone, find_contact, find_phone, greetings, remove_contact,
    remove_phone, show_contacts,
};

/// Common contract for every console command
pub type Handler = fn(&mut AddressBook, &[String], NaiveDate) -> Result<String, ContactError>;

/// Command words understood by the assistant and their handlers
pub const COMMANDS: &[(&str, Handler)] = &[
    ("add", add_contact),
    ("add-birthday", add_birthday),
    ("all", show_contacts),
    ("append", add_phone),
    ("birthdays", upcoming_birthdays),
    ("change", edit_phone),
    ("delete", remove_phone),
    ("hello", greetings),
    ("phone", find_phone),
    ("remove", remove_contact),
    ("show", find_contact),
    ("show-birthday", show_birthday),
];

/// Command words that end the session
pub const EXIT_COMMANDS: &[&str] = &["close", "exit"];

/// Look up the handler for a command word
pub fn get_command(command: &str) -> Option<Handler> {
    COMMANDS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, handler)| *handler)
}

/// Argument at `index`, or a `MissingArgument` naming what the command needs
fn required_arg<'a>(
    args: &'a [String],
    index: usize,
    expected: &'static str,
) -> Result<&'a str, ContactError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(ContactError::MissingArgument(expected))
}
