//! Integration tests for the class registry
//!
//! These tests validate the factory workflow:
//! - Name lookup (miss, hit, instance identity)
//! - Tag-based search with deterministic ordering
//! - Unregistration

use anyhow::Result;
use flowgraph::nodes::{self, ValueSourceNode};
use flowgraph::registry::{Descriptor, NodeRegistry};
use flowgraph::{Node, TagSet};

#[test]
fn test_lookup_miss_then_hit() -> Result<()> {
    let mut registry = NodeRegistry::new();
    assert!(registry.new_object("add").is_none());
    assert!(!registry.exists("add"));

    nodes::register_builtins(&mut registry);
    assert!(registry.exists("add"));

    let node = registry
        .new_object("add")
        .ok_or_else(|| anyhow::anyhow!("add not registered"))?;
    assert_eq!(node.name(), "add");
    Ok(())
}

#[test]
fn test_each_instantiation_is_distinct() -> Result<()> {
    let mut registry = NodeRegistry::new();
    nodes::register_builtins(&mut registry);

    let first = registry
        .new_object("value-source")
        .ok_or_else(|| anyhow::anyhow!("missing"))?;
    let second = registry
        .new_object("value-source")
        .ok_or_else(|| anyhow::anyhow!("missing"))?;
    // Two boxes, two allocations.
    assert!(!std::ptr::eq(
        first.as_ref() as *const dyn Node as *const u8,
        second.as_ref() as *const dyn Node as *const u8,
    ));
    Ok(())
}

#[test]
fn test_tag_search_prefers_first_registered() -> Result<()> {
    let mut registry = NodeRegistry::new();
    registry.register(
        "source-a",
        Descriptor::new(TagSet::parse("#number#source"), || {
            Box::new(ValueSourceNode::new(1.0)) as Box<dyn Node>
        }),
    );
    registry.register(
        "source-b",
        Descriptor::new(TagSet::parse("#number#source"), || {
            Box::new(ValueSourceNode::new(2.0)) as Box<dyn Node>
        }),
    );

    // Both match; registration order decides, every time.
    for _ in 0..3 {
        let node = registry
            .new_object_from_tags(&TagSet::parse("#number"))
            .ok_or_else(|| anyhow::anyhow!("no match"))?;
        assert_eq!(node.name(), "value-source");
        let tags = registry.class_tags("source-a");
        assert!(tags.map(|t| t.contains("source")).unwrap_or(false));
    }
    Ok(())
}

#[test]
fn test_tag_search_miss() {
    let mut registry = NodeRegistry::new();
    nodes::register_builtins(&mut registry);
    assert!(registry
        .new_object_from_tags(&TagSet::parse("#audio"))
        .is_none());
}

#[test]
fn test_unregister_removes_from_search() {
    let mut registry = NodeRegistry::new();
    nodes::register_builtins(&mut registry);

    assert!(registry.unregister("text-uppercase"));
    assert!(!registry.exists("text-uppercase"));
    assert!(!registry.unregister("text-uppercase"));
    assert!(registry
        .new_object_from_tags(&TagSet::parse("#text"))
        .is_none());
    assert_eq!(registry.available_classes(), vec!["value-source", "add"]);
}
