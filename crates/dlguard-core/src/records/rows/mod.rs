//! Row operations on the download record store.

mod read;
mod write;

use anyhow::{anyhow, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::types::{DestinationKind, DownloadId, DownloadRecord};

/// Render an id set as the disjunctive predicate `id IN (1,2,3)`.
/// Ids are numeric, so inlining them is safe.
pub(super) fn id_set_predicate(ids: &[DownloadId]) -> String {
    let list = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("id IN ({list})")
}

pub(super) fn record_from_row(row: &SqliteRow) -> Result<DownloadRecord> {
    let id: i64 = row.get("id");
    let uid: Option<i64> = row.get("uid");
    let destination_str: String = row.get("destination");
    let data_path: String = row.get("data_path");
    let url: String = row.get("url");

    let destination = DestinationKind::from_str(&destination_str)
        .ok_or_else(|| anyhow!("record {id} has unknown destination kind: {destination_str}"))?;

    Ok(DownloadRecord {
        id,
        owner_uid: uid.map(|u| u as u32),
        destination,
        data_path,
        url,
    })
}
