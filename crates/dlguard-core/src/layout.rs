//! Shared-storage layout: volume roots and the public directory allow-list.
//!
//! All checks here are purely syntactic over path components; nothing touches
//! the filesystem. Both the path authorizer and the ownership reconciler
//! classify paths through this module so the two agree on what counts as the
//! `Android/` tree and what counts as a public directory.

use std::path::{Component, Path, PathBuf};

/// Fixed allow-list of top-level shared directories. Writes here never
/// require a capability.
pub const PUBLIC_DIRS: &[&str] = &[
    "Music",
    "Podcasts",
    "Ringtones",
    "Alarms",
    "Notifications",
    "Pictures",
    "Movies",
    "Download",
    "DCIM",
    "Documents",
    "Audiobooks",
    "Recordings",
];

/// Name of the public downloads directory within [`PUBLIC_DIRS`].
pub const DOWNLOADS_DIR: &str = "Download";

/// Layout of shared storage volumes.
///
/// Volumes live directly under `storage_base` (`/storage/AAAA-FFFF/...`);
/// the emulated volume carries an extra numeric user segment
/// (`/storage/emulated/0/...`).
#[derive(Debug, Clone)]
pub struct StorageLayout {
    storage_base: PathBuf,
}

impl Default for StorageLayout {
    fn default() -> Self {
        StorageLayout {
            storage_base: PathBuf::from("/storage"),
        }
    }
}

impl StorageLayout {
    pub fn new(storage_base: impl Into<PathBuf>) -> Self {
        StorageLayout {
            storage_base: storage_base.into(),
        }
    }

    /// Path components relative to the containing volume root, or `None` if
    /// `path` is not under a storage volume at all.
    ///
    /// Returns `None` for paths containing `..` so nothing can escape the
    /// prefix match. `.` components are harmless and skipped.
    pub fn volume_relative<'a>(&self, path: &'a Path) -> Option<Vec<&'a str>> {
        let rel = path.strip_prefix(&self.storage_base).ok()?;
        let mut comps = Vec::new();
        for c in rel.components() {
            match c {
                Component::Normal(s) => comps.push(s.to_str()?),
                Component::CurDir => {}
                _ => return None,
            }
        }
        if comps.is_empty() {
            return None;
        }
        // Drop the volume name; the emulated volume nests a per-user segment.
        let volume = comps.remove(0);
        if volume.eq_ignore_ascii_case("emulated") {
            if comps.is_empty() || !comps[0].bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            comps.remove(0);
        }
        Some(comps)
    }

    /// The public standard directory containing `path`, if any.
    pub fn public_dir_of(&self, path: &Path) -> Option<&'static str> {
        let comps = self.volume_relative(path)?;
        let first = comps.first()?;
        PUBLIC_DIRS.iter().find(|d| *d == first).copied()
    }

    /// True if `path` is inside the public downloads directory.
    pub fn is_in_downloads_dir(&self, path: &Path) -> bool {
        self.public_dir_of(path) == Some(DOWNLOADS_DIR)
    }

    /// True if `path` points inside a per-app subtree of the shared
    /// `Android/{data,obb,media}` tree (any app, including the caller's own).
    pub fn is_in_android_app_dirs(&self, path: &Path) -> bool {
        let Some(comps) = self.volume_relative(path) else {
            return false;
        };
        comps.len() >= 3
            && comps[0].eq_ignore_ascii_case("Android")
            && (comps[1].eq_ignore_ascii_case("data")
                || comps[1].eq_ignore_ascii_case("obb")
                || comps[1].eq_ignore_ascii_case("media"))
    }
}
