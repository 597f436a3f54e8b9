//! SQLite-backed record store: connection, migration, timestamps.
//! Row operations live in `rows`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent-encode a path for a sqlite:// URI so spaces and special characters
/// survive URI parsing.
fn sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed download record store.
///
/// The database file lives under the XDG state directory:
/// `~/.local/state/dlguard/downloads.db`.
#[derive(Clone)]
pub struct DownloadDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl DownloadDb {
    /// Open (or create) the default record store and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("dlguard")?;
        let state_dir = xdg_dirs.get_state_home().join("dlguard");
        let db_path = state_dir.join("downloads.db");

        tokio::fs::create_dir_all(&state_dir).await?;

        let uri = sqlite_uri(&db_path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;

        let db = DownloadDb { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Open (or create) the store at a specific path. Creates parent dirs if
    /// needed. Intended for tests.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;
        let db = DownloadDb { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // `uid` is nullable: reconciliation clears it when a record is
        // orphaned without deleting the row.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS downloads (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                uid INTEGER,
                destination TEXT NOT NULL,
                data_path TEXT NOT NULL,
                url TEXT NOT NULL DEFAULT '',
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for row timestamps). Pub for use by `rows`.
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory store for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<DownloadDb> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = DownloadDb { pool };
    db.migrate().await?;
    Ok(db)
}
