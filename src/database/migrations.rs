use super::Database;
use sqlx::Error as SqlxError;

impl Database {
    /// Run database migrations to create tables
    pub(super) async fn run_migrations(&self) -> Result<(), SqlxError> {
        self.create_birthday_table().await?;
        Ok(())
    }

    async fn create_birthday_table(&self) -> Result<(), SqlxError> {
        // AUTOINCREMENT: ids stay monotonic and are never reused after a
        // delete, so ORDER BY id is insertion order for the table's lifetime.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS birthdays (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }
}
