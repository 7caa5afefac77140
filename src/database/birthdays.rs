use super::Database;
use sqlx::Error as SqlxError;

use crate::models::BirthdayRecord;

impl Database {
    /// Insert a new birthday and return its assigned id
    pub async fn insert_birthday(&self, name: &str, date: &str) -> Result<i64, SqlxError> {
        let result = sqlx::query("INSERT INTO birthdays (name, date) VALUES (?, ?)")
            .bind(name)
            .bind(date)
            .execute(self.pool())
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get all birthdays in insertion order
    pub async fn get_all_birthdays(&self) -> Result<Vec<BirthdayRecord>, SqlxError> {
        let rows: Vec<(i64, String, String)> =
            sqlx::query_as("SELECT id, name, date FROM birthdays ORDER BY id")
                .fetch_all(self.pool())
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, date)| BirthdayRecord { id, name, date })
            .collect())
    }

    /// Delete the birthday at the given 0-based list position.
    ///
    /// Returns `Ok(false)` when the position does not address a current
    /// entry. The position is resolved and the row deleted inside one
    /// transaction, so two concurrent removals cannot both resolve against a
    /// stale ordering.
    pub async fn delete_birthday_at_rank(&self, rank: usize) -> Result<bool, SqlxError> {
        let mut tx = self.pool().begin().await?;

        let ids: Vec<(i64,)> = sqlx::query_as("SELECT id FROM birthdays ORDER BY id")
            .fetch_all(&mut *tx)
            .await?;

        let Some((id,)) = ids.get(rank).copied() else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM birthdays WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
