//! Node abstraction and the contexts handed to its lifecycle hooks.
//!
//! A node owns a fixed layout of ports (declared once, at construction) and
//! two hooks the graph drives:
//!
//! - [`Node::process`] — recompute outputs from currently connected inputs.
//!   Must be safe to call with any subset of inputs disconnected; each node
//!   documents its degradation policy (skip, neutral value, leave outputs
//!   untouched) and never crashes on a missing input.
//! - [`Node::layout_changed`] — fired whenever one of the node's own ports
//!   connects or disconnects (and once when the node is added to a graph).
//!   This is where the lazy/eager allocation policy lives: allocate an
//!   output container the first time all required inputs are connected,
//!   free it as soon as any required input disconnects.
//!
//! Context keys come from the node's own [`LayoutBuilder`] registration, so
//! key-based access and flat runtime indexing resolve to the same port.

use super::layout::{DataKey, NodeLayout, ReaderKey, WriterKey};
use super::port::{DataPort, ReaderPort, WriterPort};
use crate::container::Container;
use crate::error::Result;

/// A processing unit with a fixed port layout.
pub trait Node: Send {
    /// Human-readable name of this node.
    fn name(&self) -> &str;

    /// The port layout declared at construction. Must be stable for the
    /// node's whole lifetime.
    fn layout(&self) -> &NodeLayout;

    /// Recompute outputs from connected inputs.
    fn process(&mut self, ctx: &mut ProcessContext);

    /// React to a connection change on one of this node's ports.
    fn layout_changed(&mut self, _ctx: &mut LayoutContext) {}
}

/// Borrowed view handed to [`Node::process`]: resolved input containers plus
/// mutable access to the node's own writer and data ports.
pub struct ProcessContext<'a> {
    pub(crate) inputs: &'a [Option<&'a dyn Container>],
    pub(crate) writers: &'a mut [WriterPort],
    pub(crate) data: &'a mut [DataPort],
}

impl ProcessContext<'_> {
    /// The container behind a reader port, or `None` when the port is
    /// unconnected or its writer has not allocated yet.
    pub fn input(&self, key: ReaderKey) -> Option<&dyn Container> {
        self.inputs.get(key.index()).copied().flatten()
    }

    /// This node's output container, if allocated.
    pub fn output(&self, key: WriterKey) -> Option<&dyn Container> {
        self.writers[key.index()].container()
    }

    pub fn output_mut(&mut self, key: WriterKey) -> Option<&mut (dyn Container + 'static)> {
        self.writers[key.index()].container_mut()
    }

    /// This node's data-port container, if holding.
    pub fn data(&self, key: DataKey) -> Option<&dyn Container> {
        self.data[key.index()].container()
    }

    pub fn data_mut(&mut self, key: DataKey) -> Option<&mut (dyn Container + 'static)> {
        self.data[key.index()].container_mut()
    }
}

/// Borrowed view handed to [`Node::layout_changed`]: connection state plus
/// container slots, so a node can apply its allocation policy.
pub struct LayoutContext<'a> {
    pub(crate) readers: &'a [ReaderPort],
    pub(crate) writers: &'a mut [WriterPort],
    pub(crate) data: &'a mut [DataPort],
}

impl LayoutContext<'_> {
    /// Whether a reader port currently references a writer.
    pub fn reader_connected(&self, key: ReaderKey) -> bool {
        self.readers[key.index()].is_connected()
    }

    /// Whether every reader port is connected (vacuously true for sources).
    pub fn all_readers_connected(&self) -> bool {
        self.readers.iter().all(ReaderPort::is_connected)
    }

    /// Number of readers currently fed by a writer port.
    pub fn writer_fanout(&self, key: WriterKey) -> usize {
        self.writers[key.index()].connections.len()
    }

    /// Whether a writer port currently holds a container.
    pub fn has_output(&self, key: WriterKey) -> bool {
        self.writers[key.index()].container.is_some()
    }

    /// Install a container on a writer port; rejected (slot unchanged) when
    /// its tags do not satisfy the port's declared tags.
    pub fn set_output(&mut self, key: WriterKey, container: Box<dyn Container>) -> Result<()> {
        self.writers[key.index()].set_container(container)
    }

    /// Free and return a writer port's container.
    pub fn take_output(&mut self, key: WriterKey) -> Option<Box<dyn Container>> {
        self.writers[key.index()].take_container()
    }

    pub fn has_data(&self, key: DataKey) -> bool {
        self.data[key.index()].container.is_some()
    }

    /// Install a container on a data port; same tag check as `set_output`.
    pub fn set_data(&mut self, key: DataKey, container: Box<dyn Container>) -> Result<()> {
        self.data[key.index()].set_container(container)
    }

    pub fn take_data(&mut self, key: DataKey) -> Option<Box<dyn Container>> {
        self.data[key.index()].take_container()
    }
}
