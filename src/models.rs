use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ContactError;
use crate::utils::datetime::format_birthday_display;
use crate::utils::validation::{validate_birthday, validate_name, validate_phone};

/// A single contact: a name, its phone numbers in insertion order and an optional birthday
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<String>,
    birthday: Option<NaiveDate>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: &str) -> Result<Self, ContactError> {
        Ok(Self {
            name: validate_name(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    /// Append a phone number; duplicates are kept
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ContactError> {
        let phone = validate_phone(phone)?;
        debug!("Adding phone {} to {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ContactError> {
        let new = validate_phone(new)?;
        let index = self.find_phone(old)?;
        debug!("Replacing phone {} with {} on {}", old, new, self.name);
        self.phones[index] = new;
        Ok(())
    }

    /// Remove the first occurrence of `phone`
    pub fn remove_phone(&mut self, phone: &str) -> Result<(), ContactError> {
        let index = self.find_phone(phone)?;
        debug!("Removing phone {} from {}", phone, self.name);
        self.phones.remove(index);
        Ok(())
    }

    /// Position of the first occurrence of `phone`
    pub fn find_phone(&self, phone: &str) -> Result<usize, ContactError> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| ContactError::PhoneNotFound {
                name: self.name.clone(),
                phone: phone.to_string(),
            })
    }

    /// Set the birthday, silently replacing any previous one
    pub fn add_birthday(&mut self, birthday: &str, today: NaiveDate) -> Result<(), ContactError> {
        let birthday = validate_birthday(birthday, today)?;
        if let Some(previous) = self.birthday {
            debug!(
                "Overwriting birthday of {} ({} -> {})",
                self.name, previous, birthday
            );
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Birthday in display form, or "not set"
    pub fn birthday_display(&self) -> String {
        self.birthday
            .map(format_birthday_display)
            .unwrap_or_else(|| "not set".to_string())
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "none".to_string()
        } else {
            self.phones.join(", ")
        };
        write!(
            f,
            "{}: phones: {}, birthday: {}.",
            self.name,
            phones,
            self.birthday_display()
        )
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Serializable form of a record, used for bulk export and import
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSnapshot {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<NaiveDate>,
}

/// All contacts, keyed by unique name and kept in name order
#[derive(Clone, Debug, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; fails without touching the book if the name is taken
    pub fn add(&mut self, record: Record) -> Result<(), ContactError> {
        if self.records.contains_key(record.name()) {
            return Err(ContactError::DuplicateName(record.name().to_string()));
        }
        debug!("Adding contact {}", record.name());
        self.records.insert(record.name().to_string(), record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&Record, ContactError> {
        self.records
            .get(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, ContactError> {
        self.records
            .get_mut(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, ContactError> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))?;
        debug!("Deleted contact {}", name);
        Ok(record)
    }

    /// Records in ascending name order
    pub fn all_sorted(&self) -> Vec<&Record> {
        self.records.values().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export every record in a form the persistence layer can store
    pub fn export(&self) -> Vec<ContactSnapshot> {
        self.records
            .values()
            .map(|record| ContactSnapshot {
                name: record.name.clone(),
                phones: record.phones.clone(),
                birthday: record.birthday,
            })
            .collect()
    }

    /// Rebuild a book from exported snapshots
    ///
    /// Names and phones are validated again; birthdays are taken as stored.
    pub fn import(snapshots: Vec<ContactSnapshot>) -> Result<Self, ContactError> {
        let mut book = Self::new();
        for snapshot in snapshots {
            let mut record = Record::new(&snapshot.name)?;
            for phone in &snapshot.phones {
                record.add_phone(phone)?;
            }
            record.birthday = snapshot.birthday;
            book.add(record)?;
        }
        Ok(book)
    }
}
