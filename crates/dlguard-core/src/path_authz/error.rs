//! Security-class denial error for destination paths.

use std::fmt;
use std::path::PathBuf;

/// Why a destination path was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Restricted call path: only the public downloads directory is allowed.
    OutsideDownloadsDir,
    /// Another app's `Android/data` subtree; no capability ever opens it.
    OtherAppPrivateData,
    /// Another app's obb subtree without installer or storage-write capability.
    ObbRequiresCapability,
    /// Shared `Android/` tree (or another app's media) without the
    /// storage-write capability.
    RequiresWriteExternalStorage,
    /// Path outside every recognized zone; legacy callers need the
    /// storage-write capability.
    LegacyRequiresWriteExternalStorage,
    /// Path outside every recognized zone; scoped callers are denied outright.
    OutsideScopedStorage,
}

impl DenyReason {
    fn as_str(self) -> &'static str {
        match self {
            DenyReason::OutsideDownloadsDir => {
                "only the public Download directory is permitted for this request"
            }
            DenyReason::OtherAppPrivateData => {
                "cannot write to another app's private data directory"
            }
            DenyReason::ObbRequiresCapability => {
                "writing another app's obb directory requires the install-packages \
                 or write-external-storage capability"
            }
            DenyReason::RequiresWriteExternalStorage => {
                "writing the shared Android tree requires the write-external-storage capability"
            }
            DenyReason::LegacyRequiresWriteExternalStorage => {
                "writing outside recognized directories requires the write-external-storage \
                 capability"
            }
            DenyReason::OutsideScopedStorage => {
                "path is outside all directories writable under scoped storage"
            }
        }
    }
}

/// Denied destination. This is a security failure, not a soft validation
/// result; callers of the download-creation path must propagate it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenied {
    pub path: PathBuf,
    pub reason: DenyReason,
}

impl AccessDenied {
    pub(super) fn new(path: &std::path::Path, reason: DenyReason) -> Self {
        AccessDenied {
            path: path.to_path_buf(),
            reason,
        }
    }
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "destination not permitted: {}: {}",
            self.path.display(),
            self.reason.as_str()
        )
    }
}

impl std::error::Error for AccessDenied {}
