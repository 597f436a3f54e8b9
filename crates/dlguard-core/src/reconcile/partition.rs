//! Three-way classification of a record snapshot.

use std::path::Path;

use crate::identity::OwnerResolver;
use crate::layout::StorageLayout;
use crate::records::{DestinationKind, DownloadId, DownloadRecord};

/// Which uid's removal triggered the reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovedUid {
    /// Reconsider every record (periodic sweep).
    All,
    /// Only records owned by this uid are subject to reclassification,
    /// bounding the blast radius of a single package-removal event.
    Uid(u32),
}

/// Disjoint partition of a snapshot's record ids. Every input id lands in
/// exactly one of the three sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePartition {
    /// Owner still resolves (or the record was out of scope for this run).
    pub valid: Vec<DownloadId>,
    /// Owner gone, but the file lives in shared storage: keep the row for
    /// user-visible history with ownership cleared.
    pub to_orphan: Vec<DownloadId>,
    /// Owner gone and the file lived in the vanished app's private area: the
    /// record is meaningless without the app.
    pub to_remove: Vec<DownloadId>,
}

/// Classify every record in `records` into the three action sets.
///
/// Already-orphaned rows (no stored uid) stay valid, which is what makes a
/// repeated run over an unchanged snapshot a no-op.
pub fn partition(
    records: &[DownloadRecord],
    resolver: &dyn OwnerResolver,
    removed: RemovedUid,
    layout: &StorageLayout,
) -> ReconcilePartition {
    let mut out = ReconcilePartition::default();

    for record in records {
        let Some(uid) = record.owner_uid else {
            out.valid.push(record.id);
            continue;
        };

        if let RemovedUid::Uid(removed_uid) = removed {
            if uid != removed_uid {
                out.valid.push(record.id);
                continue;
            }
        }

        if !resolver.resolve_owners(uid).is_empty() {
            out.valid.push(record.id);
            continue;
        }

        match record.destination {
            DestinationKind::External => out.to_orphan.push(record.id),
            DestinationKind::CachePartition => out.to_remove.push(record.id),
            // These two can point anywhere, so inspect the concrete path:
            // app-private external tree means the row dies with the app.
            DestinationKind::FileUri | DestinationKind::NonDownloadManager => {
                if layout.is_in_android_app_dirs(Path::new(&record.data_path)) {
                    out.to_remove.push(record.id);
                } else {
                    out.to_orphan.push(record.id);
                }
            }
        }
    }

    out
}
