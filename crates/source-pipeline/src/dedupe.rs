use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::types::RawSource;

/// Hex-encoded SHA-256 digest of a document's raw text.
///
/// Identity is decided by bytes alone: two sources with identical text
/// always hash identically, regardless of how they parsed. A fresh hasher
/// is instantiated per call.
#[must_use]
pub fn content_hash(raw_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Drop sources whose raw text has already been seen, keeping the first
/// occurrence in traversal order.
///
/// Purely textual identity: sources differing only in whitespace hash
/// differently and are both retained.
pub(crate) fn dedupe_sources(sources: Vec<RawSource>) -> Vec<(String, RawSource)> {
    let total = sources.len();
    let mut seen = HashSet::with_capacity(total);
    let mut retained = Vec::with_capacity(total);

    for source in sources {
        let hash = content_hash(&source.raw_text);
        if seen.insert(hash.clone()) {
            retained.push((hash, source));
        }
    }

    if retained.len() < total {
        log::debug!(
            "dropped {} duplicate source(s) out of {total}",
            total - retained.len()
        );
    }

    retained
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_known_vectors() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            content_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_content_hash_is_stable() {
        let text = "query Viewer { id }";
        assert_eq!(content_hash(text), content_hash(text));
        assert_eq!(content_hash(text).len(), 64);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let first = RawSource::parse("query Viewer { id }")
            .unwrap()
            .with_location("a.graphql");
        let duplicate = RawSource::parse("query Viewer { id }")
            .unwrap()
            .with_location("b.graphql");

        let retained = dedupe_sources(vec![first, duplicate]);

        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].1.location.as_deref(), Some("a.graphql"));
    }

    #[test]
    fn test_whitespace_variants_are_both_retained() {
        let compact = RawSource::parse("query Viewer { id }").unwrap();
        let spaced = RawSource::parse("query Viewer  { id }").unwrap();

        let retained = dedupe_sources(vec![compact, spaced]);
        assert_eq!(retained.len(), 2);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let sources = vec![
            RawSource::parse("query A { a }").unwrap(),
            RawSource::parse("query A { a }").unwrap(),
            RawSource::parse("query B { b }").unwrap(),
        ];

        let once = dedupe_sources(sources);
        let survivors: Vec<RawSource> = once.iter().map(|(_, s)| s.clone()).collect();
        let twice = dedupe_sources(survivors);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_follows_first_seen() {
        let sources = vec![
            RawSource::parse("query B { b }").unwrap(),
            RawSource::parse("query A { a }").unwrap(),
            RawSource::parse("query B { b }").unwrap(),
        ];

        let retained = dedupe_sources(sources);
        let texts: Vec<&str> = retained.iter().map(|(_, s)| s.raw_text.as_str()).collect();
        assert_eq!(texts, ["query B { b }", "query A { a }"]);
    }
}
