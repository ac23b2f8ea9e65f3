//! Class registry — name- and tag-based object creation.
//!
//! A [`Registry`] maps class names to descriptors, each pairing a tag set
//! with a factory closure. It is an explicit, process-scoped value the
//! caller owns and threads where needed; there is no global instance.
//! Entries keep registration order, so tag searches are deterministic:
//! the first registered match wins, always.

use crate::tags::TagSet;
use tracing::debug;

/// Factory entry: the tags a class advertises plus its constructor.
pub struct Descriptor<T: ?Sized> {
    tags: TagSet,
    create: Box<dyn Fn() -> Box<T> + Send>,
}

impl<T: ?Sized> Descriptor<T> {
    pub fn new(tags: TagSet, create: impl Fn() -> Box<T> + Send + 'static) -> Self {
        Self {
            tags,
            create: Box::new(create),
        }
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}

/// An ordered registry of named class descriptors producing boxed `T`.
pub struct Registry<T: ?Sized> {
    entries: Vec<(String, Descriptor<T>)>,
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: ?Sized> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Re-registering a name replaces its descriptor in
    /// place, keeping the original position in search order.
    pub fn register(&mut self, name: impl Into<String>, descriptor: Descriptor<T>) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            debug!("replacing registered class '{name}'");
            entry.1 = descriptor;
        } else {
            debug!("registered class '{name}'");
            self.entries.push((name, descriptor));
        }
    }

    /// Remove a class by name; reports whether it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(n, _)| n != name);
        before != self.entries.len()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// The tags a registered class advertises.
    pub fn class_tags(&self, name: &str) -> Option<&TagSet> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| &d.tags)
    }

    /// Instantiate a class by name.
    pub fn new_object(&self, name: &str) -> Option<Box<T>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| (d.create)())
    }

    /// Instantiate the first registered class whose tags match the query.
    /// An empty query matches only classes with an empty tag set.
    pub fn new_object_from_tags(&self, query: &TagSet) -> Option<Box<T>> {
        self.entries
            .iter()
            .find(|(_, d)| d.tags.matches(query))
            .map(|(_, d)| (d.create)())
    }

    /// Registered class names, in registration order.
    pub fn available_classes(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Registered class names whose tags satisfy the query, in registration
    /// order.
    pub fn available_classes_from_tags(&self, query: &TagSet) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, d)| d.tags.matches(query))
            .map(|(n, _)| n.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry specialised to boxed nodes.
pub type NodeRegistry = Registry<dyn crate::graph::Node>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{Container, ScalarContainer, ScalarValue};

    fn scalar_descriptor(tags: &str, value: f64) -> Descriptor<dyn Container> {
        Descriptor::new(TagSet::parse(tags), move || {
            Box::new(ScalarContainer::new(value)) as Box<dyn Container>
        })
    }

    #[test]
    fn test_miss_then_hit() {
        let mut reg: Registry<dyn Container> = Registry::new();
        assert!(!reg.exists("scalar"));
        assert!(reg.new_object("scalar").is_none());

        reg.register("scalar", scalar_descriptor("#number#scalar", 4.0));
        assert!(reg.exists("scalar"));
        let obj = reg.new_object("scalar").unwrap();
        assert_eq!(obj.scalar().unwrap().get(), 4.0);
    }

    #[test]
    fn test_tag_search_is_registration_ordered() {
        let mut reg: Registry<dyn Container> = Registry::new();
        reg.register("first", scalar_descriptor("#number#scalar", 1.0));
        reg.register("second", scalar_descriptor("#number#scalar", 2.0));

        let obj = reg
            .new_object_from_tags(&TagSet::parse("#number"))
            .unwrap();
        assert_eq!(obj.scalar().unwrap().get(), 1.0);
    }

    #[test]
    fn test_empty_query_matches_only_empty_tags() {
        let mut reg: Registry<dyn Container> = Registry::new();
        reg.register("tagged", scalar_descriptor("#number#scalar", 1.0));
        assert!(reg.new_object_from_tags(&TagSet::new()).is_none());
    }

    #[test]
    fn test_reregister_replaces_in_place() {
        let mut reg: Registry<dyn Container> = Registry::new();
        reg.register("a", scalar_descriptor("#number#scalar", 1.0));
        reg.register("b", scalar_descriptor("#number#scalar", 2.0));
        reg.register("a", scalar_descriptor("#number#scalar", 9.0));

        assert_eq!(reg.available_classes(), vec!["a", "b"]);
        let obj = reg
            .new_object_from_tags(&TagSet::parse("#number"))
            .unwrap();
        assert_eq!(obj.scalar().unwrap().get(), 9.0);
    }

    #[test]
    fn test_unregister() {
        let mut reg: Registry<dyn Container> = Registry::new();
        reg.register("a", scalar_descriptor("#number", 1.0));
        assert!(reg.unregister("a"));
        assert!(!reg.unregister("a"));
        assert!(reg.is_empty());
        assert!(reg.new_object_from_tags(&TagSet::parse("#number")).is_none());
    }

    #[test]
    fn test_available_classes_from_tags() {
        let mut reg: Registry<dyn Container> = Registry::new();
        reg.register("a", scalar_descriptor("#number#scalar", 1.0));
        reg.register("b", scalar_descriptor("#number#array", 2.0));
        reg.register("c", scalar_descriptor("#text", 3.0));

        let query = TagSet::parse("#number");
        assert_eq!(reg.available_classes_from_tags(&query), vec!["a", "b"]);
        assert!(reg
            .available_classes_from_tags(&TagSet::parse("#audio"))
            .is_empty());
    }

    #[test]
    fn test_class_tags() {
        let mut reg: Registry<dyn Container> = Registry::new();
        reg.register("a", scalar_descriptor("#number#scalar", 1.0));
        assert!(reg.class_tags("a").unwrap().contains("scalar"));
        assert!(reg.class_tags("b").is_none());
    }
}
