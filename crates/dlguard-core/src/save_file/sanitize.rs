//! FAT-safe filename sanitization.

/// Characters FAT-style filesystems reject outright, besides controls.
const ILLEGAL: &[char] = &['"', '*', '/', ':', '<', '>', '?', '\\', '|'];

pub(super) fn is_valid_filename_char(c: char) -> bool {
    !(c.is_control() || c == '\u{7f}' || ILLEGAL.contains(&c))
}

/// Replace each character illegal in a filename with `_`, preserving
/// everything else verbatim (no collapsing, no trimming: the caller's chosen
/// name is otherwise respected).
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if is_valid_filename_char(c) { c } else { '_' })
        .collect()
}

/// True if nothing of the name would survive sanitization.
pub(super) fn has_no_valid_chars(name: &str) -> bool {
    !name.chars().any(is_valid_filename_char)
}
