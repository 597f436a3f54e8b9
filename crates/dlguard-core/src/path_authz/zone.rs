//! Storage zone classification.
//!
//! A destination path falls into exactly one zone; the allow/deny table in
//! `mod.rs` is a single match over this enum so the policy stays exhaustive
//! and auditable.

use std::path::Path;

use crate::layout::StorageLayout;

/// Classification of a destination path for authorization purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageZone {
    /// Caller's own `Android/{data,obb,media}/<pkg>` subtree.
    OwnPrivateAppDir,
    /// Another app's `Android/data/<pkg>` subtree. Absolutely private.
    OtherAppDataDir,
    /// Another app's `Android/obb/<pkg>` subtree; installers may stage here.
    ObbOfOtherApp,
    /// Another app's `Android/media/<pkg>` subtree.
    MediaOfOtherApp,
    /// The shared `Android/` tree itself without a per-app subtree
    /// (`Android/`, `Android/media/`, or a bare `Android/{data,obb}`).
    AndroidTreeRoot,
    /// One of the fixed public standard directories.
    PublicStandardDir,
    /// Anything else, including paths outside shared storage entirely.
    Other,
}

/// Classify `path` for a caller identified by `calling_package`.
/// Purely syntactic; never touches the filesystem.
pub fn classify(path: &Path, calling_package: &str, layout: &StorageLayout) -> StorageZone {
    let Some(comps) = layout.volume_relative(path) else {
        return StorageZone::Other;
    };

    let Some(first) = comps.first() else {
        return StorageZone::Other;
    };

    if first.eq_ignore_ascii_case("Android") {
        let subtree = comps.get(1).map(|s| s.to_ascii_lowercase());
        return match subtree.as_deref() {
            Some("data") | Some("obb") | Some("media") => match comps.get(2) {
                Some(pkg) if *pkg == calling_package => StorageZone::OwnPrivateAppDir,
                Some(_) => match subtree.as_deref() {
                    Some("data") => StorageZone::OtherAppDataDir,
                    Some("obb") => StorageZone::ObbOfOtherApp,
                    _ => StorageZone::MediaOfOtherApp,
                },
                // `Android/data`, `Android/obb`, `Android/media` with no app
                // segment belong to the shared tree.
                None => StorageZone::AndroidTreeRoot,
            },
            // `Android/` itself or an unrecognized child.
            _ => StorageZone::AndroidTreeRoot,
        };
    }

    if layout.public_dir_of(path).is_some() {
        return StorageZone::PublicStandardDir;
    }

    StorageZone::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALLER: &str = "com.example.caller";

    fn zone(path: &str) -> StorageZone {
        classify(Path::new(path), CALLER, &StorageLayout::default())
    }

    #[test]
    fn own_private_dirs() {
        assert_eq!(
            zone("/storage/emulated/0/Android/data/com.example.caller/test"),
            StorageZone::OwnPrivateAppDir
        );
        assert_eq!(
            zone("/storage/emulated/0/Android/obb/com.example.caller/test"),
            StorageZone::OwnPrivateAppDir
        );
        assert_eq!(
            zone("/storage/emulated/0/Android/media/com.example.caller/test"),
            StorageZone::OwnPrivateAppDir
        );
    }

    #[test]
    fn other_app_subtrees() {
        assert_eq!(
            zone("/storage/emulated/0/Android/data/foo/test"),
            StorageZone::OtherAppDataDir
        );
        assert_eq!(
            zone("/storage/emulated/0/Android/obb/foo/test"),
            StorageZone::ObbOfOtherApp
        );
        assert_eq!(
            zone("/storage/emulated/0/Android/media/foo"),
            StorageZone::MediaOfOtherApp
        );
    }

    #[test]
    fn android_tree_root() {
        assert_eq!(zone("/storage/emulated/0/Android/"), StorageZone::AndroidTreeRoot);
        assert_eq!(zone("/storage/emulated/0/Android/media/"), StorageZone::AndroidTreeRoot);
        assert_eq!(zone("/storage/emulated/0/Android/data"), StorageZone::AndroidTreeRoot);
    }

    #[test]
    fn public_and_other() {
        assert_eq!(
            zone("/storage/emulated/0/Pictures/test"),
            StorageZone::PublicStandardDir
        );
        assert_eq!(
            zone("/storage/emulated/0/Download/test"),
            StorageZone::PublicStandardDir
        );
        assert_eq!(zone("/storage/emulated/0/Testing/foo.mp4"), StorageZone::Other);
        assert_eq!(zone("/data/local/tmp/foo"), StorageZone::Other);
    }

    #[test]
    fn secondary_volume_classified_like_primary() {
        assert_eq!(
            zone("/storage/AAAA-FFFF/Android/obb/foo/test"),
            StorageZone::ObbOfOtherApp
        );
        assert_eq!(
            zone("/storage/AAAA-FFFF/Download/dir/bar.html"),
            StorageZone::PublicStandardDir
        );
    }
}
