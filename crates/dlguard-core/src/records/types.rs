//! Types used by the download record store.

/// Record identifier.
pub type DownloadId = i64;

/// Where a download's bytes land, stored as a string in the database.
///
/// `FileUri` and `NonDownloadManager` destinations can point either into
/// shared storage or into the owning app's private sandbox, so the reconciler
/// inspects their path per row; `External` is always shared and
/// `CachePartition` is always app-private.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationKind {
    External,
    FileUri,
    NonDownloadManager,
    CachePartition,
}

impl DestinationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DestinationKind::External => "external",
            DestinationKind::FileUri => "file_uri",
            DestinationKind::NonDownloadManager => "non_download_manager",
            DestinationKind::CachePartition => "cache_partition",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "external" => Some(DestinationKind::External),
            "file_uri" => Some(DestinationKind::FileUri),
            "non_download_manager" => Some(DestinationKind::NonDownloadManager),
            "cache_partition" => Some(DestinationKind::CachePartition),
            _ => None,
        }
    }
}

/// One download row as seen by the reconciler and the CLI.
#[derive(Debug, Clone)]
pub struct DownloadRecord {
    pub id: DownloadId,
    /// Owning app uid; `None` once the record has been orphaned.
    pub owner_uid: Option<u32>,
    pub destination: DestinationKind,
    pub data_path: String,
    pub url: String,
}

/// Fields for inserting a new download row.
#[derive(Debug, Clone)]
pub struct NewDownload {
    pub owner_uid: u32,
    pub destination: DestinationKind,
    pub data_path: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_kind_string_roundtrip() {
        for kind in [
            DestinationKind::External,
            DestinationKind::FileUri,
            DestinationKind::NonDownloadManager,
            DestinationKind::CachePartition,
        ] {
            assert_eq!(DestinationKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(DestinationKind::from_str("bogus"), None);
    }
}
