//! Keyword matching: case-insensitive substring containment
//!
//! Matching is deliberately permissive. There is no tokenization and no
//! word-boundary check, so `process` matches `processing` and `subprocess`.

use std::collections::BTreeSet;

/// Default keyword list of the digest scanner, in tie-break order
pub const DEFAULT_DIGEST_KEYWORDS: &[&str] = &["protocol", "SOP", "process", "naming"];

/// Fixed keyword list of the archive walker
pub const WALK_KEYWORDS: &[&str] = &["protocol", "sop", "naming", "process"];

/// An ordered, lowercased keyword list
///
/// Order is significant: [`KeywordSet::first_match`] breaks ties by list
/// position, and [`KeywordSet::matches_in`] reports hits in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a keyword set, trimming and lowercasing each item
    ///
    /// Empty items are dropped and repeated keywords keep their first position.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if !kw.is_empty() && !out.contains(&kw) {
                out.push(kw);
            }
        }
        Self { keywords: out }
    }

    /// Parse a comma-separated keyword list such as `protocol,SOP,process`
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// The default digest scanner keywords
    #[must_use]
    pub fn digest_defaults() -> Self {
        Self::new(DEFAULT_DIGEST_KEYWORDS)
    }

    /// The fixed archive walker keywords
    #[must_use]
    pub fn walk_defaults() -> Self {
        Self::new(WALK_KEYWORDS)
    }

    /// First keyword (in list order) contained in `text`, ignoring case
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .find(|kw| lower.contains(kw.as_str()))
            .map(String::as_str)
    }

    /// Every keyword contained in `text`, in list order
    ///
    /// `text` must already be lowercased; callers that match the same content
    /// against several sets lowercase it once.
    #[must_use]
    pub fn matches_in(&self, lowered: &str) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|kw| lowered.contains(kw.as_str()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

/// Keywords present in exactly one of `a` and `b`, sorted alphabetically
#[must_use]
pub fn symmetric_difference(a: &[String], b: &[String]) -> Vec<String> {
    let a: BTreeSet<&String> = a.iter().collect();
    let b: BTreeSet<&String> = b.iter().collect();
    a.symmetric_difference(&b).map(|kw| (*kw).clone()).collect()
}
