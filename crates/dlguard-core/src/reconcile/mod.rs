//! Ownership reconciliation.
//!
//! Runs on a package-removal signal or as a periodic sweep: snapshots the
//! record store, resolves each record's owning uid against the installed
//! packages, and partitions ids into `valid` / `to_orphan` / `to_remove`.
//! Orphans keep their row with ownership cleared; removals delete the row.
//! The two bulk mutations use disjoint id sets, so their order is immaterial,
//! and rerunning the pass over an unchanged store is a no-op.

mod partition;

pub use partition::{partition, ReconcilePartition, RemovedUid};

use anyhow::Result;

use crate::identity::OwnerResolver;
use crate::layout::StorageLayout;
use crate::records::DownloadDb;

/// Snapshot, classify, and apply the two bulk mutations.
///
/// Store failures propagate unrecovered; a retried run is safe because
/// reclassifying already-orphaned or already-deleted rows changes nothing.
pub async fn reconcile(
    db: &DownloadDb,
    resolver: &dyn OwnerResolver,
    removed: RemovedUid,
    layout: &StorageLayout,
) -> Result<ReconcilePartition> {
    let snapshot = match removed {
        RemovedUid::All => db.snapshot_all().await?,
        RemovedUid::Uid(uid) => db.snapshot_for_uid(uid).await?,
    };

    let parts = partition(&snapshot, resolver, removed, layout);

    if !parts.to_orphan.is_empty() {
        let changed = db.clear_owner_bulk(&parts.to_orphan).await?;
        tracing::info!(orphaned = changed, "cleared ownership of orphaned records");
    }
    if !parts.to_remove.is_empty() {
        let deleted = db.delete_bulk(&parts.to_remove).await?;
        tracing::info!(removed = deleted, "deleted records tied to missing apps");
    }

    Ok(parts)
}

#[cfg(test)]
mod tests;
