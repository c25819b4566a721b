//! Candidate filtering for wix-image-dl
//!
//! Decides from the URL text alone whether an image is worth downloading.

/// Substrings that mark a URL as a content image
pub const ACCEPT_PATTERNS: [&str; 6] = [
    "wixstatic.com",
    "wixpress.com",
    ".jpg",
    ".jpeg",
    ".png",
    ".webp",
];

/// Substrings that mark a URL as page chrome rather than content
pub const REJECT_PATTERNS: [&str; 3] = ["icon", "logo", "sprite"];

/// Result of classifying a candidate URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Worth downloading
    Accepted,
    /// Matches none of the accept patterns
    Unmatched,
    /// Matches a reject pattern; wins over any accept pattern
    Rejected(&'static str),
}

/// Classify a candidate URL (case-insensitive)
pub fn classify(url: &str) -> Verdict {
    let lower = url.to_lowercase();

    if let Some(pattern) = reject_pattern(&lower) {
        return Verdict::Rejected(pattern);
    }

    if ACCEPT_PATTERNS.iter().any(|p| lower.contains(p)) {
        Verdict::Accepted
    } else {
        Verdict::Unmatched
    }
}

/// Classify a candidate together with its normalized form
///
/// Accept patterns are matched against the reference as written; reject
/// patterns also see the normalized text, so a page host such as
/// `iconic-dogs.wixsite.com` rejects every root-relative image on it.
pub fn classify_resolved(raw: &str, resolved: &str) -> Verdict {
    match classify(raw) {
        Verdict::Accepted => match reject_pattern(&resolved.to_lowercase()) {
            Some(pattern) => Verdict::Rejected(pattern),
            None => Verdict::Accepted,
        },
        verdict => verdict,
    }
}

fn reject_pattern(lower: &str) -> Option<&'static str> {
    REJECT_PATTERNS.iter().copied().find(|p| lower.contains(*p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_patterns() {
        assert_eq!(classify("https://static.wixstatic.com/media/abc~mv2"), Verdict::Accepted);
        assert_eq!(classify("https://static.parastorage.wixpress.com/x"), Verdict::Accepted);
        assert_eq!(classify("/media/dog.JPG"), Verdict::Accepted);
        assert_eq!(classify("/media/dog.jpeg"), Verdict::Accepted);
        assert_eq!(classify("//cdn.example.com/a.png"), Verdict::Accepted);
        assert_eq!(classify("/media/a.webp"), Verdict::Accepted);
    }

    #[test]
    fn test_reject_wins_over_accept() {
        assert_eq!(classify("https://static.wixstatic.com/media/logo.png"), Verdict::Rejected("logo"));
        assert_eq!(classify("/Images/Facebook-ICON.jpg"), Verdict::Rejected("icon"));
        assert_eq!(classify("/assets/sprite-sheet.webp"), Verdict::Rejected("sprite"));
        assert_eq!(classify("/logo-icon.png"), Verdict::Rejected("icon"));
    }

    #[test]
    fn test_unmatched_urls() {
        assert_eq!(classify("https://example.com/pixel.gif"), Verdict::Unmatched);
        assert_eq!(classify("data:image/svg+xml;base64,AAAA"), Verdict::Unmatched);
        assert_eq!(classify(""), Verdict::Unmatched);
    }

    #[test]
    fn test_no_url_validation() {
        // Anything containing a pattern passes, well-formed or not
        assert_eq!(classify("not even a url.jpg"), Verdict::Accepted);
    }

    #[test]
    fn test_reject_checks_normalized_text() {
        assert_eq!(
            classify_resolved("/media/pup.jpg", "https://iconic-dogs.wixsite.com/media/pup.jpg"),
            Verdict::Rejected("icon")
        );
        assert_eq!(
            classify_resolved("/media/pup.jpg", "https://springcorgis.wixsite.com/media/pup.jpg"),
            Verdict::Accepted
        );

        // Acceptance still comes from the reference as written
        assert_eq!(
            classify_resolved("/media/pup.gif", "https://cdn.wixstatic.com/media/pup.gif"),
            Verdict::Unmatched
        );
    }
}
