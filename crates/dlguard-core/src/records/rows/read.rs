//! Record read operations: list and snapshot.

use anyhow::Result;

use super::super::db::DownloadDb;
use super::super::types::DownloadRecord;
use super::record_from_row;

impl DownloadDb {
    /// List all records, newest first (CLI view).
    pub async fn list_downloads(&self) -> Result<Vec<DownloadRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, uid, destination, data_path, url
            FROM downloads
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    /// Snapshot of every record, in id order, for reconciliation.
    pub async fn snapshot_all(&self) -> Result<Vec<DownloadRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, uid, destination, data_path, url
            FROM downloads
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }

    /// Snapshot narrowed to one owner uid, in id order. Used when a single
    /// package-removal event bounds the reconciliation to that uid's rows.
    pub async fn snapshot_for_uid(&self, uid: u32) -> Result<Vec<DownloadRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, uid, destination, data_path, url
            FROM downloads
            WHERE uid = ?1
            ORDER BY id
            "#,
        )
        .bind(uid as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(record_from_row).collect()
    }
}
