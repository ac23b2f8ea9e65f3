//! flowgraph — a synchronous dataflow graph-wiring framework.
//!
//! Nodes declare a fixed layout of ports; the [`Graph`] owns the nodes,
//! validates connections by tag compatibility, and drives processing on
//! demand. Data crosses ports as boxed [`Container`]s carrying a [`TagSet`],
//! inspected by capability or checked downcast rather than concrete type.
//!
//! The layers, bottom up:
//!
//! - [`tags`] — label sets and the subset predicate that gates connections.
//! - [`container`] — scalar, line-text, and strided N-dimensional array
//!   payloads behind one trait.
//! - [`graph`] — ids, port layouts, the [`Node`] trait, and the graph itself.
//! - [`registry`] — name- and tag-addressed factories for boxed objects.
//! - [`nodes`] — built-in source and filter nodes.
//!
//! A minimal pipeline:
//!
//! ```
//! use flowgraph::graph::{Graph, PortId};
//! use flowgraph::nodes::{AddNode, ValueSourceNode};
//! use flowgraph::{Container, ScalarValue};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(Box::new(ValueSourceNode::new(3.0)));
//! let b = graph.add_node(Box::new(ValueSourceNode::new(4.0)));
//! let add = graph.add_node(Box::new(AddNode::new()));
//!
//! graph.connect(PortId::new(a, 0), PortId::new(add, 0))?;
//! graph.connect(PortId::new(b, 0), PortId::new(add, 1))?;
//!
//! graph.process(a)?;
//! graph.process(b)?;
//! graph.process(add)?;
//!
//! let sum = graph.writer_container(PortId::new(add, 0)).unwrap();
//! assert_eq!(sum.scalar().unwrap().get(), 7.0);
//! # Ok::<(), flowgraph::error::FlowError>(())
//! ```

pub mod container;
pub mod error;
pub mod graph;
pub mod nodes;
pub mod registry;
pub mod tags;

pub use container::{Container, ScalarValue, TextBuffer};
pub use error::{FlowError, Result};
pub use graph::{Graph, Node, NodeId, PortId};
pub use registry::{Descriptor, NodeRegistry, Registry};
pub use tags::TagSet;
