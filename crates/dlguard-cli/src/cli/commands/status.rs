//! `dlguard status` – show all download records.

use anyhow::Result;
use dlguard_core::records::DownloadDb;

pub async fn run_status(db: &DownloadDb) -> Result<()> {
    let records = db.list_downloads().await?;
    if records.is_empty() {
        println!("No download records.");
    } else {
        println!("{:<6} {:<10} {:<22} {}", "ID", "UID", "DESTINATION", "PATH");
        for r in records {
            let uid_str = r
                .owner_uid
                .map(|u| u.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<6} {:<10} {:<22} {}",
                r.id,
                uid_str,
                r.destination.as_str(),
                r.data_path
            );
        }
    }
    Ok(())
}
