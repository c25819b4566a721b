//! URL normalization and local filename derivation for wix-image-dl

use url::Url;

/// Make a raw image reference absolute, as text
///
/// Protocol-relative references get `https:`; root-relative ones are prefixed
/// with the page origin; anything else is returned unchanged. Nothing is
/// re-encoded, so the result keeps the page's spelling of the path.
pub fn normalize_reference(raw: &str, base: &Url) -> String {
    if raw.starts_with("//") {
        format!("https:{raw}")
    } else if raw.starts_with('/') {
        format!("{}{raw}", base.origin().ascii_serialization())
    } else {
        raw.to_string()
    }
}

/// Derive the local filename for a normalized reference
///
/// Uses the last segment of the reference's path as written in the page
/// (spaces, non-ASCII and `%xx` sequences untouched) when it looks like a
/// filename, otherwise synthesizes `image_{index}.{ext}` with the extension
/// guessed from the reference.
pub fn derive_filename(reference: &str, index: usize) -> String {
    let basename = raw_path(reference)
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if !basename.is_empty() && basename.contains('.') {
        return basename.to_string();
    }

    format!("image_{index}.{}", guess_extension(reference))
}

/// Path component of a reference, without scheme, authority, query or fragment
fn raw_path(reference: &str) -> &str {
    let without_query = reference.split(['?', '#']).next().unwrap_or_default();

    match without_query.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |slash| &rest[slash..]),
        None => without_query,
    }
}

/// Guess an image extension from anywhere in the URL text
fn guess_extension(url: &str) -> &'static str {
    let lower = url.to_lowercase();
    if lower.contains(".png") {
        "png"
    } else if lower.contains(".webp") {
        "webp"
    } else {
        "jpg"
    }
}
