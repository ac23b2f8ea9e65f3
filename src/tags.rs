//! Tag sets — unordered labels describing what data represents.
//!
//! Tags are the compatibility currency of the graph: writer ports declare
//! the tags their containers carry, reader ports declare the tags they
//! require, and a connection is legal when the writer's set covers the
//! reader's. The text form is `#`-delimited (`"#number#array"`); parsing
//! lowercases labels and drops empties, so `"#Number##ARRAY"` and
//! `"#number#array"` denote the same set.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// An unordered, duplicate-free set of lowercase labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet {
    labels: BTreeSet<String>,
}

impl TagSet {
    /// The empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `#`-delimited tag string. Empty segments are skipped and
    /// labels are lowercased, so ordering and case never affect equality.
    pub fn parse(text: &str) -> Self {
        Self {
            labels: text
                .split('#')
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    /// Build from individual labels.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// This set plus one more label.
    pub fn with(mut self, label: &str) -> Self {
        let label = label.to_lowercase();
        if !label.is_empty() {
            self.labels.insert(label);
        }
        self
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(&label.to_lowercase())
    }

    /// Whether this set contains every label of `other`. Vacuously true for
    /// an empty `other` — this is the connection-compatibility predicate.
    pub fn has_all(&self, other: &TagSet) -> bool {
        other.labels.is_subset(&self.labels)
    }

    /// Whether this set shares at least one label with `other`.
    pub fn has_any(&self, other: &TagSet) -> bool {
        !self.labels.is_disjoint(&other.labels)
    }

    /// Search predicate: whether this set satisfies `query`. Unlike
    /// [`has_all`](TagSet::has_all), an empty query matches only the empty
    /// set, so a blank search never resolves to an arbitrary class.
    pub fn matches(&self, query: &TagSet) -> bool {
        if query.is_empty() {
            self.is_empty()
        } else {
            self.has_all(query)
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, "#");
        }
        for label in &self.labels {
            write!(f, "#{label}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_normalizes_case_and_empties() {
        let a = TagSet::parse("#Number##ARRAY");
        let b = TagSet::parse("#array#number");
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert!(a.contains("Number"));
    }

    #[test]
    fn test_display_round_trip() {
        let tags = TagSet::parse("#number#scalar");
        assert_eq!(tags.to_string(), "#number#scalar");
        assert_eq!(TagSet::parse(&tags.to_string()), tags);
        assert_eq!(TagSet::new().to_string(), "#");
    }

    #[test]
    fn test_has_all_is_subset() {
        let provided = TagSet::parse("#number#scalar#source");
        assert!(provided.has_all(&TagSet::parse("#number")));
        assert!(provided.has_all(&TagSet::parse("#number#scalar")));
        assert!(!provided.has_all(&TagSet::parse("#number#text")));
        // Empty requirement is satisfied by anything.
        assert!(provided.has_all(&TagSet::new()));
    }

    #[test]
    fn test_has_any() {
        let tags = TagSet::parse("#number#array");
        assert!(tags.has_any(&TagSet::parse("#array#text")));
        assert!(!tags.has_any(&TagSet::parse("#text")));
        assert!(!tags.has_any(&TagSet::new()));
    }

    #[test]
    fn test_matches_empty_query_only_matches_empty_set() {
        let tagged = TagSet::parse("#number");
        assert!(!tagged.matches(&TagSet::new()));
        assert!(TagSet::new().matches(&TagSet::new()));
        assert!(tagged.matches(&TagSet::parse("#number")));
    }

    #[test]
    fn test_with_builds_incrementally() {
        let tags = TagSet::new().with("number").with("Scalar").with("");
        assert_eq!(tags, TagSet::parse("#number#scalar"));
    }

    #[test]
    fn test_from_labels() {
        let tags = TagSet::from_labels(["number", "array"]);
        assert_eq!(tags, TagSet::parse("#number#array"));
    }

    proptest! {
        #[test]
        fn prop_superset_has_all(labels in prop::collection::btree_set("[a-z]{1,6}", 0..6)) {
            let sub = TagSet::from_labels(labels.iter().take(labels.len() / 2));
            let full = TagSet::from_labels(labels.iter());
            prop_assert!(full.has_all(&sub));
        }

        #[test]
        fn prop_foreign_label_fails_has_all(labels in prop::collection::btree_set("[a-z]{1,6}", 0..6)) {
            let full = TagSet::from_labels(labels.iter());
            // A digit can never appear in the generated labels.
            prop_assert!(!full.has_all(&TagSet::from_labels(["tag0"])));
        }
    }
}
