//! Markup scanning for wix-image-dl
//!
//! Pulls image references out of static HTML. Wix lazy-loads most images, so
//! the real URL often sits in a `data-*` attribute instead of `src`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Attributes that may carry an image URL, highest priority first
pub const SOURCE_ATTRIBUTES: [&str; 3] = ["src", "data-src", "data-cke-saved-src"];

static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("Failed to create img selector"));

/// An image reference found in the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 1-based position of the `<img>` tag among all image tags in the document
    pub index: usize,

    /// Raw attribute value; may be relative or protocol-relative
    pub url: String,
}

/// Pick the first non-empty source attribute in priority order
pub fn pick_source(attrs: &HashMap<String, String>) -> Option<&str> {
    SOURCE_ATTRIBUTES
        .iter()
        .filter_map(|name| attrs.get(*name))
        .map(String::as_str)
        .find(|value| !value.is_empty())
}

/// Scan a document for image candidates in document order
///
/// Every `<img>` tag consumes an index, including tags that carry no usable
/// source, so synthesized filenames stay stable for a given page.
pub fn scan(html: &str) -> Vec<Candidate> {
    let document = Html::parse_document(html);

    document
        .select(&IMG_SELECTOR)
        .enumerate()
        .filter_map(|(position, element)| {
            let attrs: HashMap<String, String> = element
                .value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();

            pick_source(&attrs).map(|url| Candidate {
                index: position + 1,
                url: url.to_string(),
            })
        })
        .collect()
}
