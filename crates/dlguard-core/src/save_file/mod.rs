//! Save-file path resolution.
//!
//! Derives a destination path for a new download from the request's name
//! hint, response headers, URL, and MIME type, then guarantees the result
//! does not clobber an existing file. The resolved path still has to pass
//! the path authorizer before anything is created.

mod extension;
mod filename;
mod sanitize;
mod unique;

pub use filename::DEFAULT_FILE_NAME_PREFIX;
pub use sanitize::sanitize_filename;

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::records::DestinationKind;

use extension::apply_mime_extension;
use filename::derive_filename;
use sanitize::{has_no_valid_chars, sanitize_filename as sanitize};
use unique::find_unique_path;

#[derive(Debug, thiserror::Error)]
pub enum SaveFileError {
    /// Every counter suffix up to the bound collides with an existing file.
    #[error("no available filename for \"{name}\" in {} after {attempts} attempts", .dir.display())]
    NoUniqueName {
        dir: PathBuf,
        name: String,
        attempts: u32,
    },
    /// Hint is not a usable file path (e.g. malformed file:// URI or no
    /// filename component).
    #[error("unusable destination hint: {0}")]
    InvalidHint(String),
}

/// Resolves destination paths for new downloads. Stateless; filesystem
/// existence checks are the only I/O.
#[derive(Debug, Clone)]
pub struct SaveFileResolver {
    max_unique_attempts: u32,
}

impl Default for SaveFileResolver {
    fn default() -> Self {
        SaveFileResolver {
            max_unique_attempts: 10_000,
        }
    }
}

impl SaveFileResolver {
    pub fn new(max_unique_attempts: u32) -> Self {
        SaveFileResolver {
            max_unique_attempts,
        }
    }

    /// Resolve the absolute path a download should be written to.
    ///
    /// An explicit hint (honored for file-URI destinations) names the exact
    /// file the caller wants: it only undergoes illegal-character
    /// substitution, with no extension or uniqueness rewriting. Derived names
    /// follow the header/URL priority chain, get an extension from the MIME
    /// type, and are deduplicated with `-1`, `-2`, ... counter suffixes.
    pub fn resolve(
        &self,
        base_dir: &Path,
        url: &str,
        hint: Option<&str>,
        content_disposition: Option<&str>,
        content_location: Option<&str>,
        mime_type: Option<&str>,
        destination: DestinationKind,
    ) -> Result<PathBuf, SaveFileError> {
        if destination == DestinationKind::FileUri {
            if let Some(hint) = hint {
                return resolve_hint(hint, base_dir);
            }
        }

        let raw = derive_filename(url, content_disposition, content_location);
        let mut name = sanitize(&raw);
        if has_no_valid_chars(&raw) {
            name = DEFAULT_FILE_NAME_PREFIX.to_string();
        }
        let name = apply_mime_extension(&name, mime_type);

        find_unique_path(base_dir, &name, self.max_unique_attempts)
    }
}

/// Hint branch: the caller chose the file. Sanitize the name, keep the
/// directory; a name with nothing salvageable becomes the default prefix
/// plus a random numeric suffix.
fn resolve_hint(hint: &str, base_dir: &Path) -> Result<PathBuf, SaveFileError> {
    let hint_path = if hint.starts_with("file://") {
        url::Url::parse(hint)
            .ok()
            .and_then(|u| u.to_file_path().ok())
            .ok_or_else(|| SaveFileError::InvalidHint(hint.to_string()))?
    } else {
        PathBuf::from(hint)
    };

    let name = hint_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SaveFileError::InvalidHint(hint.to_string()))?;
    let dir = hint_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(base_dir);

    if has_no_valid_chars(name) {
        let suffix: u32 = rand::rng().random_range(100_000..1_000_000);
        return Ok(dir.join(format!("{DEFAULT_FILE_NAME_PREFIX}{suffix}")));
    }

    Ok(dir.join(sanitize(name)))
}
