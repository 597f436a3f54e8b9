//! `dlguard reconcile` – orphan or remove records whose owning app is gone.

use anyhow::{anyhow, Result};
use dlguard_core::config::DlguardConfig;
use dlguard_core::identity::StaticOwnerResolver;
use dlguard_core::reconcile::{reconcile, RemovedUid};
use dlguard_core::records::DownloadDb;

/// Parse repeated `UID=PACKAGE` entries into a resolver table.
fn parse_installed(entries: &[String]) -> Result<StaticOwnerResolver> {
    let mut resolver = StaticOwnerResolver::new();
    for entry in entries {
        let (uid, package) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected UID=PACKAGE, got: {entry}"))?;
        let uid: u32 = uid
            .parse()
            .map_err(|_| anyhow!("invalid uid in entry: {entry}"))?;
        resolver.insert(uid, package);
    }
    Ok(resolver)
}

pub async fn run_reconcile(
    db: &DownloadDb,
    cfg: &DlguardConfig,
    uid: Option<u32>,
    installed: &[String],
) -> Result<()> {
    let resolver = parse_installed(installed)?;
    let removed = match uid {
        Some(uid) => RemovedUid::Uid(uid),
        None => RemovedUid::All,
    };

    let parts = reconcile(db, &resolver, removed, &cfg.storage_layout()).await?;
    println!(
        "reconciled: {} valid, {} orphaned, {} removed",
        parts.valid.len(),
        parts.to_orphan.len(),
        parts.to_remove.len()
    );
    Ok(())
}
