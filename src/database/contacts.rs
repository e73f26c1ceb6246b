use std::collections::HashMap;

use super::Database;
use chrono::NaiveDate;
use sqlx::Error as SqlxError;
use tracing::info;

use crate::models::{AddressBook, ContactSnapshot, Error};

impl Database {
    /// Load every stored contact, phones in their saved order
    pub async fn load_contacts(&self) -> Result<Vec<ContactSnapshot>, SqlxError> {
        let contacts: Vec<(String, Option<NaiveDate>)> =
            sqlx::query_as("SELECT name, birthday FROM contacts ORDER BY name")
                .fetch_all(self.pool())
                .await?;

        let phone_rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT contact_name, phone FROM contact_phones ORDER BY contact_name, position",
        )
        .fetch_all(self.pool())
        .await?;

        let mut phones: HashMap<String, Vec<String>> = HashMap::new();
        for (name, phone) in phone_rows {
            phones.entry(name).or_default().push(phone);
        }

        let snapshots: Vec<ContactSnapshot> = contacts
            .into_iter()
            .map(|(name, birthday)| ContactSnapshot {
                phones: phones.remove(&name).unwrap_or_default(),
                name,
                birthday,
            })
            .collect();

        info!("Loaded {} contacts from database", snapshots.len());
        Ok(snapshots)
    }

    /// Replace the stored contact book with `contacts` in a single transaction
    pub async fn save_contacts(&self, contacts: &[ContactSnapshot]) -> Result<(), SqlxError> {
        let mut tx = self.pool().begin().await?;

        sqlx::query("DELETE FROM contact_phones")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM contacts").execute(&mut *tx).await?;

        for contact in contacts {
            sqlx::query("INSERT INTO contacts (name, birthday) VALUES (?, ?)")
                .bind(&contact.name)
                .bind(contact.birthday)
                .execute(&mut *tx)
                .await?;

            for (position, phone) in contact.phones.iter().enumerate() {
                sqlx::query(
                    "INSERT INTO contact_phones (contact_name, position, phone) VALUES (?, ?, ?)",
                )
                .bind(&contact.name)
                .bind(position as i64)
                .bind(phone)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        info!("Saved {} contacts to database", contacts.len());
        Ok(())
    }
}

impl Database {
    /// Rebuild the contact book from the last saved snapshot
    pub async fn load_book(&self) -> Result<AddressBook, Error> {
        let snapshots = self.load_contacts().await?;
        Ok(AddressBook::import(snapshots)?)
    }

    /// Persist the contact book; an empty book leaves the stored snapshot untouched
    pub async fn save_book(&self, book: &AddressBook) -> Result<(), Error> {
        if book.is_empty() {
            info!("Contact book is empty, nothing to save");
            return Ok(());
        }
        self.save_contacts(&book.export()).await?;
        Ok(())
    }
}
