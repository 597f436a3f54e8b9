//! Record write operations: insert and the two bulk reconciliation mutations.

use anyhow::Result;
use sqlx::Row;

use super::super::db::{unix_timestamp, DownloadDb};
use super::super::types::{DownloadId, NewDownload};
use super::id_set_predicate;

impl DownloadDb {
    /// Insert a new download record and return its id.
    pub async fn add_download(&self, new: &NewDownload) -> Result<DownloadId> {
        let now = unix_timestamp();
        let row = sqlx::query(
            r#"
            INSERT INTO downloads (uid, destination, data_path, url, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            RETURNING id
            "#,
        )
        .bind(new.owner_uid as i64)
        .bind(new.destination.as_str())
        .bind(&new.data_path)
        .bind(&new.url)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get::<i64, _>("id"))
    }

    /// Clear the owner uid on every row in `ids` with one bulk UPDATE.
    /// Returns the number of rows changed. No-op for an empty set.
    pub async fn clear_owner_bulk(&self, ids: &[DownloadId]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let sql = format!(
            "UPDATE downloads SET uid = NULL, updated_at = ?1 WHERE {}",
            id_set_predicate(ids)
        );
        let result = sqlx::query(&sql)
            .bind(unix_timestamp())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every row in `ids` with one bulk DELETE.
    /// Returns the number of rows deleted. No-op for an empty set.
    pub async fn delete_bulk(&self, ids: &[DownloadId]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let sql = format!("DELETE FROM downloads WHERE {}", id_set_predicate(ids));
        let result = sqlx::query(&sql).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
