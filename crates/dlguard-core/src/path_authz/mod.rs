//! Destination path authorization.
//!
//! Decides whether a calling app may write a download to a candidate path.
//! The decision is a pure function over the path, the caller's identity, its
//! resolved capabilities, and the legacy/scoped storage mode: the path is
//! classified into a [`StorageZone`] by syntactic prefix matching and each
//! zone carries a fixed capability requirement. Denial is an [`AccessDenied`]
//! error, never a soft return, so callers cannot silently continue.

mod capability;
mod error;
mod zone;

pub use capability::{
    CallerGrant, Capability, CapabilityCheck, CapabilityKind, StaticCapabilityCheck,
};
pub use error::{AccessDenied, DenyReason};
pub use zone::{classify, StorageZone};

use std::path::Path;

use crate::layout::StorageLayout;

/// Authorizes destination paths against the storage zone policy.
/// Holds no mutable state; every call is self-contained.
#[derive(Debug, Clone, Default)]
pub struct PathAuthorizer {
    layout: StorageLayout,
}

impl PathAuthorizer {
    pub fn new(layout: StorageLayout) -> Self {
        PathAuthorizer { layout }
    }

    /// Check whether `calling_package`, holding `grant`, may write to `path`.
    ///
    /// Rules are checked in order, first match wins:
    /// 1. `downloads_dir_only` restricts the call to the public downloads
    ///    directory regardless of every other rule.
    /// 2. Zone classification:
    ///    - own `Android/{data,obb,media}/<pkg>` subtree: allowed, no
    ///      capability, in both modes;
    ///    - public standard directory: allowed, no capability, in both modes;
    ///    - another app's obb subtree: install-packages or
    ///      write-external-storage;
    ///    - another app's data subtree: always denied;
    ///    - shared `Android/` tree or another app's media subtree:
    ///      write-external-storage only (install never substitutes);
    ///    - anything else: write-external-storage for legacy callers,
    ///      denied outright under scoped storage.
    pub fn authorize(
        &self,
        path: &Path,
        calling_package: &str,
        grant: &CallerGrant,
        legacy_mode: bool,
        downloads_dir_only: bool,
    ) -> Result<(), AccessDenied> {
        if downloads_dir_only {
            return if self.layout.is_in_downloads_dir(path) {
                Ok(())
            } else {
                Err(AccessDenied::new(path, DenyReason::OutsideDownloadsDir))
            };
        }

        let zone = classify(path, calling_package, &self.layout);
        let denied = |reason| Err(AccessDenied::new(path, reason));

        match zone {
            StorageZone::OwnPrivateAppDir | StorageZone::PublicStandardDir => Ok(()),
            StorageZone::OtherAppDataDir => denied(DenyReason::OtherAppPrivateData),
            StorageZone::ObbOfOtherApp => {
                if grant.install_packages.granted() || grant.write_external_storage.granted() {
                    Ok(())
                } else {
                    denied(DenyReason::ObbRequiresCapability)
                }
            }
            StorageZone::AndroidTreeRoot | StorageZone::MediaOfOtherApp => {
                if grant.write_external_storage.granted() {
                    Ok(())
                } else {
                    denied(DenyReason::RequiresWriteExternalStorage)
                }
            }
            StorageZone::Other => {
                if legacy_mode {
                    if grant.write_external_storage.granted() {
                        Ok(())
                    } else {
                        denied(DenyReason::LegacyRequiresWriteExternalStorage)
                    }
                } else {
                    denied(DenyReason::OutsideScopedStorage)
                }
            }
        }
    }
}
