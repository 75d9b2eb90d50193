//! Object names for uploaded images.

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 7;

/// Fallback extension when neither file name nor content type give one.
const DEFAULT_EXTENSION: &str = "png";

/// Build a unique object name: `{unix_millis}-{7 random base36 chars}.{ext}`.
///
/// The extension comes from the uploaded file name, then from the content
/// type, and falls back to `png`.
#[must_use]
pub fn object_name(file_name: Option<&str>, content_type: Option<&str>) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let ext = extension(file_name, content_type);
    format!("{millis}-{}.{ext}", random_suffix())
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect()
}

/// Lowercased file extension for an upload.
#[must_use]
pub fn extension(file_name: Option<&str>, content_type: Option<&str>) -> String {
    let from_name = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    from_name
        .or_else(|| {
            content_type
                .and_then(|ct| ct.strip_prefix("image/"))
                .map(|sub| match sub {
                    "jpeg" => "jpg".to_string(),
                    "svg+xml" => "svg".to_string(),
                    other => other.to_ascii_lowercase(),
                })
        })
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Content type to send for a file, guessed from its extension.
#[must_use]
pub fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "image/png",
    }
}
