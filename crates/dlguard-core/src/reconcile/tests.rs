//! Reconciliation tests: the three-way partition and its application to the
//! record store.

use super::*;
use crate::identity::StaticOwnerResolver;
use crate::records::db::open_memory;
use crate::records::{DestinationKind, DownloadId, DownloadRecord, NewDownload};

const UID1: u32 = 11111;
const UID2: u32 = 11112;
const UID3: u32 = 11113;

/// Expected classification alongside the generated rows.
struct Fixture {
    records: Vec<DownloadRecord>,
    expect_orphan: Vec<DownloadId>,
    expect_remove: Vec<DownloadId>,
}

/// One row per (uid, destination, location) in the same shape the production
/// store would hold: external rows in Download, file-uri and
/// non-download-manager rows once in a public dir and once in the app's
/// private sandbox, cache rows in the cache partition.
fn fixture(uids: &[u32], missing: &[u32]) -> Fixture {
    let mut records = Vec::new();
    let mut expect_orphan = Vec::new();
    let mut expect_remove = Vec::new();
    let mut next_id = 0i64;

    let mut push = |uid: u32,
                    destination: DestinationKind,
                    data_path: String,
                    records: &mut Vec<DownloadRecord>| {
        next_id += 1;
        records.push(DownloadRecord {
            id: next_id,
            owner_uid: Some(uid),
            destination,
            data_path,
            url: format!("https://example.com/{uid}/{next_id}"),
        });
        next_id
    };

    for &uid in uids {
        let gone = missing.contains(&uid);

        let id = push(
            uid,
            DestinationKind::External,
            format!("/storage/emulated/0/Download/{uid}_ext.txt"),
            &mut records,
        );
        if gone {
            expect_orphan.push(id);
        }

        for destination in [DestinationKind::FileUri, DestinationKind::NonDownloadManager] {
            let id = push(
                uid,
                destination,
                format!("/storage/emulated/0/Documents/{uid}_pub.txt"),
                &mut records,
            );
            if gone {
                expect_orphan.push(id);
            }

            let id = push(
                uid,
                destination,
                format!("/storage/emulated/0/Android/data/com.example{uid}/files/{uid}_priv.txt"),
                &mut records,
            );
            if gone {
                expect_remove.push(id);
            }
        }

        let id = push(
            uid,
            DestinationKind::CachePartition,
            format!("/data/user_de/0/com.android.providers.downloads/cache/{uid}.txt"),
            &mut records,
        );
        if gone {
            expect_remove.push(id);
        }
    }

    Fixture {
        records,
        expect_orphan,
        expect_remove,
    }
}

fn resolver_with_only_uid3() -> StaticOwnerResolver {
    let mut resolver = StaticOwnerResolver::new();
    resolver.insert(UID3, format!("com.example{UID3}"));
    resolver
}

fn layout() -> crate::layout::StorageLayout {
    crate::layout::StorageLayout::default()
}

#[test]
fn partition_all_splits_missing_uids_by_destination() {
    let fx = fixture(&[UID1, UID2, UID3], &[UID1, UID2]);
    let parts = partition(&fx.records, &resolver_with_only_uid3(), RemovedUid::All, &layout());

    assert_eq!(parts.to_orphan, fx.expect_orphan);
    assert_eq!(parts.to_remove, fx.expect_remove);

    // UID3's rows are untouched: absent from both action sets.
    let uid3_ids: Vec<_> = fx
        .records
        .iter()
        .filter(|r| r.owner_uid == Some(UID3))
        .map(|r| r.id)
        .collect();
    assert!(uid3_ids.iter().all(|id| parts.valid.contains(id)));
}

#[test]
fn partition_covers_every_id_exactly_once() {
    let fx = fixture(&[UID1, UID2, UID3], &[UID1, UID2]);
    let parts = partition(&fx.records, &resolver_with_only_uid3(), RemovedUid::All, &layout());

    let mut all: Vec<DownloadId> = parts
        .valid
        .iter()
        .chain(&parts.to_orphan)
        .chain(&parts.to_remove)
        .copied()
        .collect();
    all.sort_unstable();

    let mut input: Vec<DownloadId> = fx.records.iter().map(|r| r.id).collect();
    input.sort_unstable();

    assert_eq!(all, input, "sets must be disjoint and cover the input");
}

#[test]
fn specific_removed_uid_bounds_the_blast_radius() {
    // UID1 is also unresolvable, but only UID2 triggered this run.
    let fx = fixture(&[UID1, UID2, UID3], &[UID1, UID2]);
    let parts = partition(
        &fx.records,
        &resolver_with_only_uid3(),
        RemovedUid::Uid(UID2),
        &layout(),
    );

    let uid2_ids: Vec<_> = fx
        .records
        .iter()
        .filter(|r| r.owner_uid == Some(UID2))
        .map(|r| r.id)
        .collect();
    for id in parts.to_orphan.iter().chain(&parts.to_remove) {
        assert!(uid2_ids.contains(id), "only UID2 rows may be touched");
    }

    let uid1_ids: Vec<_> = fx
        .records
        .iter()
        .filter(|r| r.owner_uid == Some(UID1))
        .map(|r| r.id)
        .collect();
    assert!(uid1_ids.iter().all(|id| parts.valid.contains(id)));
}

#[test]
fn partition_is_deterministic_over_the_same_snapshot() {
    let fx = fixture(&[UID1, UID2, UID3], &[UID1, UID2]);
    let resolver = resolver_with_only_uid3();
    let first = partition(&fx.records, &resolver, RemovedUid::All, &layout());
    let second = partition(&fx.records, &resolver, RemovedUid::All, &layout());
    assert_eq!(first, second);
}

#[test]
fn already_orphaned_rows_stay_valid() {
    let records = vec![DownloadRecord {
        id: 1,
        owner_uid: None,
        destination: DestinationKind::External,
        data_path: "/storage/emulated/0/Download/old.bin".to_string(),
        url: String::new(),
    }];
    let parts = partition(&records, &resolver_with_only_uid3(), RemovedUid::All, &layout());
    assert_eq!(parts.valid, vec![1]);
    assert!(parts.to_orphan.is_empty());
    assert!(parts.to_remove.is_empty());
}

#[tokio::test]
async fn reconcile_applies_both_bulk_mutations() {
    let db = open_memory().await.unwrap();
    let fx = fixture(&[UID1, UID2, UID3], &[UID1, UID2]);
    for record in &fx.records {
        db.add_download(&NewDownload {
            owner_uid: record.owner_uid.unwrap(),
            destination: record.destination,
            data_path: record.data_path.clone(),
            url: record.url.clone(),
        })
        .await
        .unwrap();
    }

    let parts = reconcile(&db, &resolver_with_only_uid3(), RemovedUid::All, &layout())
        .await
        .unwrap();
    assert_eq!(parts.to_orphan, fx.expect_orphan);
    assert_eq!(parts.to_remove, fx.expect_remove);

    let after = db.snapshot_all().await.unwrap();
    // Removed rows are gone.
    assert!(after.iter().all(|r| !fx.expect_remove.contains(&r.id)));
    // Orphaned rows survive with ownership cleared.
    for id in &fx.expect_orphan {
        let row = after.iter().find(|r| r.id == *id).expect("orphan row kept");
        assert_eq!(row.owner_uid, None);
    }
    // Valid rows keep their owner.
    for row in after.iter().filter(|r| !fx.expect_orphan.contains(&r.id)) {
        assert_eq!(row.owner_uid, Some(UID3));
    }
}

#[tokio::test]
async fn reconcile_is_idempotent() {
    let db = open_memory().await.unwrap();
    let fx = fixture(&[UID1, UID3], &[UID1]);
    for record in &fx.records {
        db.add_download(&NewDownload {
            owner_uid: record.owner_uid.unwrap(),
            destination: record.destination,
            data_path: record.data_path.clone(),
            url: record.url.clone(),
        })
        .await
        .unwrap();
    }

    let resolver = resolver_with_only_uid3();
    let first = reconcile(&db, &resolver, RemovedUid::All, &layout()).await.unwrap();
    assert!(!first.to_orphan.is_empty());
    assert!(!first.to_remove.is_empty());

    // Second pass over the mutated store finds nothing left to do.
    let second = reconcile(&db, &resolver, RemovedUid::All, &layout()).await.unwrap();
    assert!(second.to_orphan.is_empty());
    assert!(second.to_remove.is_empty());
}

#[tokio::test]
async fn reconcile_with_specific_uid_only_queries_that_uid() {
    let db = open_memory().await.unwrap();
    let fx = fixture(&[UID1, UID2], &[UID1, UID2]);
    for record in &fx.records {
        db.add_download(&NewDownload {
            owner_uid: record.owner_uid.unwrap(),
            destination: record.destination,
            data_path: record.data_path.clone(),
            url: record.url.clone(),
        })
        .await
        .unwrap();
    }

    reconcile(
        &db,
        &StaticOwnerResolver::new(),
        RemovedUid::Uid(UID2),
        &layout(),
    )
    .await
    .unwrap();

    let after = db.snapshot_all().await.unwrap();
    // UID1's rows are untouched even though its uid is also unresolvable.
    let uid1_rows: Vec<_> = after.iter().filter(|r| r.owner_uid == Some(UID1)).collect();
    assert_eq!(uid1_rows.len(), fx.records.len() / 2);
    // No remaining row belongs to UID2.
    assert!(after.iter().all(|r| r.owner_uid != Some(UID2)));
}
