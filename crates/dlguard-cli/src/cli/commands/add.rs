//! `dlguard add <uid> <destination> <data-path>` – record a new download row.

use anyhow::Result;
use dlguard_core::records::{DownloadDb, NewDownload};

use super::parse_destination;

pub async fn run_add(
    db: &DownloadDb,
    uid: u32,
    destination: &str,
    data_path: &str,
    url: &str,
) -> Result<()> {
    let new = NewDownload {
        owner_uid: uid,
        destination: parse_destination(destination)?,
        data_path: data_path.to_string(),
        url: url.to_string(),
    };
    let id = db.add_download(&new).await?;
    println!("Added record {id} for uid {uid} at {data_path}");
    Ok(())
}
