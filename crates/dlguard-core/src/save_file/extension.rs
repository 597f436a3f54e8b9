//! MIME type to filename extension mapping.
//!
//! A fixed table, not a sniffing layer. The derived name keeps its extension
//! when it already agrees with the MIME type; otherwise the MIME type wins,
//! since the server's declared type is what the file will be opened as.

/// (mime, preferred extension). Reverse lookups also accept the extras below.
const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("application/gzip", "gz"),
    ("application/json", "json"),
    ("application/octet-stream", "bin"),
    ("application/pdf", "pdf"),
    ("application/xml", "xml"),
    ("application/zip", "zip"),
    ("audio/mpeg", "mp3"),
    ("audio/ogg", "ogg"),
    ("image/gif", "gif"),
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("text/html", "html"),
    ("text/plain", "txt"),
    ("video/mp4", "mp4"),
    ("video/mpeg", "mpg"),
    ("video/webm", "webm"),
];

/// Alternate spellings accepted when mapping an extension back to a type.
const EXTENSION_ALIASES: &[(&str, &str)] = &[
    ("htm", "text/html"),
    ("jpeg", "image/jpeg"),
    ("mpeg", "video/mpeg"),
];

/// Lowercase the type and drop any parameters (`; charset=...`).
fn normalize_mime(mime: &str) -> String {
    let bare = mime.split(';').next().unwrap_or(mime).trim();
    bare.to_ascii_lowercase()
}

pub(super) fn extension_for_mime(mime: &str) -> Option<&'static str> {
    let mime = normalize_mime(mime);
    if let Some((_, ext)) = MIME_EXTENSIONS.iter().find(|(m, _)| *m == mime) {
        return Some(ext);
    }
    // Unknown text subtypes degrade to plain text.
    if mime.starts_with("text/") {
        return Some("txt");
    }
    None
}

pub(super) fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    MIME_EXTENSIONS
        .iter()
        .find(|(_, e)| *e == ext)
        .map(|(m, _)| *m)
        .or_else(|| {
            EXTENSION_ALIASES
                .iter()
                .find(|(e, _)| *e == ext)
                .map(|(_, m)| *m)
        })
}

/// Give `name` the extension implied by `mime`: append one if the name has
/// none, replace the current one if it maps to a different type, keep it when
/// it already agrees or when the type is unknown.
pub(super) fn apply_mime_extension(name: &str, mime: Option<&str>) -> String {
    let Some(mime) = mime else {
        return name.to_string();
    };

    let (stem, current_ext) = match name.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < name.len() => (&name[..pos], Some(&name[pos + 1..])),
        _ => (name, None),
    };

    match current_ext {
        Some(ext) => {
            let agrees = mime_for_extension(ext)
                .map(|m| m == normalize_mime(mime))
                .unwrap_or(false);
            if agrees {
                return name.to_string();
            }
            match extension_for_mime(mime) {
                Some(new_ext) => format!("{stem}.{new_ext}"),
                None => name.to_string(),
            }
        }
        None => match extension_for_mime(mime) {
            Some(ext) => format!("{name}.{ext}"),
            None => name.to_string(),
        },
    }
}
