use super::Database;
use sqlx::Error as SqlxError;

impl Database {
    /// Run database migrations to create tables
    pub(super) async fn run_migrations(&self) -> Result<(), SqlxError> {
        self.create_contact_tables().await?;
        Ok(())
    }

    async fn create_contact_tables(&self) -> Result<(), SqlxError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contacts (
                name TEXT PRIMARY KEY,
                birthday DATE
            )
            "#,
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_phones (
                contact_name TEXT NOT NULL REFERENCES contacts(name) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                phone TEXT NOT NULL CHECK (length(phone) = 10),
                PRIMARY KEY (contact_name, position)
            )
            "#,
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }
}
