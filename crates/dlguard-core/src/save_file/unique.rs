//! Non-destructive uniqueness: counter suffixes before the extension.

use std::path::{Path, PathBuf};

use super::SaveFileError;

/// Find a path for `name` in `dir` that does not exist yet: `name.ext`,
/// `name-1.ext`, `name-2.ext`, ... Bounded so a full or adversarial
/// directory cannot loop us forever.
pub(super) fn find_unique_path(
    dir: &Path,
    name: &str,
    max_attempts: u32,
) -> Result<PathBuf, SaveFileError> {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let (stem, ext) = split_extension(name);
    for n in 1..=max_attempts {
        let numbered = match ext {
            Some(ext) => format!("{stem}-{n}.{ext}"),
            None => format!("{stem}-{n}"),
        };
        let candidate = dir.join(numbered);
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(SaveFileError::NoUniqueName {
        dir: dir.to_path_buf(),
        name: name.to_string(),
        attempts: max_attempts,
    })
}

/// Split at the final dot; a leading dot does not start an extension.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < name.len() => (&name[..pos], Some(&name[pos + 1..])),
        _ => (name, None),
    }
}
