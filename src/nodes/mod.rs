//! Built-in nodes and their registry hookup.

pub mod add;
pub mod text_upper;
pub mod value_source;

pub use add::AddNode;
pub use text_upper::TextUppercaseNode;
pub use value_source::ValueSourceNode;

use crate::graph::Node;
use crate::registry::{Descriptor, NodeRegistry};
use crate::tags::TagSet;

/// Register every built-in node class.
pub fn register_builtins(registry: &mut NodeRegistry) {
    registry.register(
        "value-source",
        Descriptor::new(TagSet::parse("#number#source"), || {
            Box::new(ValueSourceNode::new(0.0)) as Box<dyn Node>
        }),
    );
    registry.register(
        "add",
        Descriptor::new(TagSet::parse("#number#filter#arithmetic"), || {
            Box::new(AddNode::new()) as Box<dyn Node>
        }),
    );
    registry.register(
        "text-uppercase",
        Descriptor::new(TagSet::parse("#text#filter"), || {
            Box::new(TextUppercaseNode::new()) as Box<dyn Node>
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let mut reg = NodeRegistry::new();
        register_builtins(&mut reg);
        assert_eq!(
            reg.available_classes(),
            vec!["value-source", "add", "text-uppercase"]
        );
        let node = reg.new_object("add").unwrap();
        assert_eq!(node.name(), "add");
    }
}
