//! Filename derivation from headers and URL.

/// Default name stem when nothing usable can be derived; a random numeric
/// suffix is appended when it stands in for an unusable hint.
pub const DEFAULT_FILE_NAME_PREFIX: &str = "downloadfile";

/// Derive a raw (unsanitized) filename in priority order:
/// Content-Disposition, then Content-Location, then the URL's last path
/// segment, then the fixed default.
pub(super) fn derive_filename(
    url: &str,
    content_disposition: Option<&str>,
    content_location: Option<&str>,
) -> String {
    content_disposition
        .and_then(disposition_filename)
        .or_else(|| content_location.and_then(last_segment))
        .or_else(|| url_filename(url))
        .unwrap_or_else(|| DEFAULT_FILE_NAME_PREFIX.to_string())
}

/// Extract the filename parameter from a Content-Disposition header value.
/// Quoted and token forms are accepted; any path prefix inside the value is
/// dropped, only the last segment counts.
fn disposition_filename(header_value: &str) -> Option<String> {
    for param in header_value.split(';') {
        let param = param.trim();
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        if !name.trim().eq_ignore_ascii_case("filename") {
            continue;
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        return last_segment(value);
    }
    None
}

/// Last non-empty path segment of the URL, query and fragment excluded.
fn url_filename(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Last non-empty `/`-separated segment of a raw value, with any query or
/// fragment suffix stripped. Used for Content-Location and disposition paths.
fn last_segment(value: &str) -> Option<String> {
    let bare = value.split(&['?', '#'][..]).next().unwrap_or(value);
    let segment = bare.split('/').filter(|s| !s.is_empty()).last()?;
    Some(segment.to_string())
}
