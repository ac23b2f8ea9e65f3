//! The graph — node slots, wiring, and on-demand processing.
//!
//! Nodes live in slots indexed by [`NodeId`]. Each slot pairs the boxed node
//! with the runtime port lists built from its declared layout. Readers store
//! the [`PortId`] of their writer, never a pointer: every container access
//! resolves through the graph at call time, so a disconnect or node removal
//! can never leave a dereferenceable stale handle.
//!
//! Everything here is synchronous call-and-return. Each `connect` /
//! `disconnect` completes — including the `layout_changed` notifications it
//! triggers — before returning, so no partially-wired state is ever
//! observable between calls. Evaluation order across nodes is the caller's
//! concern; the graph only runs `process` on the node it is asked to.

use super::id::{NodeId, PortId};
use super::node::{LayoutContext, Node, ProcessContext};
use super::port::{DataPort, ReaderPort, WriterPort};
use super::snapshot::{ConnectionSnapshot, NodeSnapshot, TopologySnapshot};
use crate::container::Container;
use crate::error::{FlowError, Result};
use tracing::{debug, info};

/// A slot holding a node and the runtime state of its ports.
pub struct NodeSlot {
    node: Box<dyn Node>,
    readers: Vec<ReaderPort>,
    writers: Vec<WriterPort>,
    data: Vec<DataPort>,
}

/// A directed dataflow graph over boxed nodes.
#[derive(Default)]
pub struct Graph {
    slots: Vec<Option<NodeSlot>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Node management ──

    /// Add a node, build its runtime ports from the declared layout, and
    /// fire the initial `layout_changed` (so zero-input sources can allocate
    /// their outputs immediately). Returns the node's id.
    pub fn add_node(&mut self, node: Box<dyn Node>) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        let layout = node.layout().clone();
        let readers: Vec<ReaderPort> = layout
            .readers()
            .iter()
            .cloned()
            .map(ReaderPort::new)
            .collect();
        let writers: Vec<WriterPort> = layout
            .writers()
            .iter()
            .cloned()
            .map(WriterPort::new)
            .collect();
        let data: Vec<DataPort> = layout.data().iter().cloned().map(DataPort::new).collect();

        // Runtime lists and the declared layout stay index-aligned forever.
        debug_assert_eq!(readers.len(), layout.readers().len());
        debug_assert_eq!(writers.len(), layout.writers().len());
        debug_assert_eq!(data.len(), layout.data().len());

        debug!("added node '{}' as {id}", node.name());
        self.slots.push(Some(NodeSlot {
            node,
            readers,
            writers,
            data,
        }));
        self.notify_layout_changed(id);
        id
    }

    /// Remove a node: disconnect every edge touching it (notifying each
    /// peer), then drop the slot and all containers it owns.
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        let slot = self.slot(id).ok_or(FlowError::UnknownNode(id))?;
        let inbound: Vec<PortId> = slot
            .readers
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_connected())
            .map(|(i, _)| PortId::new(id, i as u16))
            .collect();
        let outbound: Vec<PortId> = slot
            .writers
            .iter()
            .flat_map(|w| w.connections.iter().copied())
            .collect();

        for reader in inbound {
            self.disconnect(reader);
        }
        for reader in outbound {
            self.disconnect(reader);
        }
        self.slots[id.index()] = None;
        info!("removed node {id}");
        Ok(())
    }

    /// The node behind an id, if alive.
    pub fn node(&self, id: NodeId) -> Option<&dyn Node> {
        self.slot(id).map(|s| s.node.as_ref())
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    // ── Wiring ──

    /// Connect a writer port to a reader port.
    ///
    /// Rejected — with nothing mutated — when either port is unknown, the
    /// ports belong to the same node, the reader is already connected, or
    /// the writer's declared tags do not satisfy the reader's requirements.
    /// On success both sides record each other and both owning nodes receive
    /// `layout_changed`.
    pub fn connect(&mut self, from: PortId, to: PortId) -> Result<()> {
        if from.node == to.node {
            return Err(FlowError::SelfConnection(from.node));
        }
        {
            let writer = self.writer_port(from).ok_or(FlowError::UnknownPort(from))?;
            let reader = self.reader_port(to).ok_or(FlowError::UnknownPort(to))?;
            if reader.connection.is_some() {
                return Err(FlowError::AlreadyConnected(to));
            }
            if !writer.decl.provided.has_all(&reader.decl.required) {
                debug!(
                    "rejected connection {from} -> {to}: provides {} but requires {}",
                    writer.decl.provided, reader.decl.required
                );
                return Err(FlowError::IncompatibleTags {
                    provided: writer.decl.provided.clone(),
                    required: reader.decl.required.clone(),
                });
            }
        }

        // Both ports validated above; record the edge on both sides.
        if let Some(slot) = self.slot_mut(from.node) {
            slot.writers[from.port_index()].connections.push(to);
        }
        if let Some(slot) = self.slot_mut(to.node) {
            slot.readers[to.port_index()].connection = Some(from);
        }
        debug!("connected {from} -> {to}");

        self.notify_layout_changed(from.node);
        self.notify_layout_changed(to.node);
        Ok(())
    }

    /// Disconnect a reader port from its writer. Clears both sides, fires
    /// `layout_changed` on both owning nodes, and reports whether a
    /// connection existed.
    pub fn disconnect(&mut self, reader: PortId) -> bool {
        let writer = {
            let port = self
                .slot_mut(reader.node)
                .and_then(|s| s.readers.get_mut(reader.port_index()));
            match port.and_then(|p| p.connection.take()) {
                Some(writer) => writer,
                None => return false,
            }
        };
        if let Some(port) = self
            .slot_mut(writer.node)
            .and_then(|s| s.writers.get_mut(writer.port_index()))
        {
            port.connections.retain(|&r| r != reader);
        }
        debug!("disconnected {writer} -> {reader}");

        self.notify_layout_changed(writer.node);
        self.notify_layout_changed(reader.node);
        true
    }

    // ── Processing ──

    /// Run one node's `process`: resolve each connected reader to its
    /// writer's container (borrowed, never copied) and hand the node mutable
    /// access to its own outputs. Safe to call with any subset of inputs
    /// connected — unresolved inputs surface as `None` in the context.
    pub fn process(&mut self, id: NodeId) -> Result<()> {
        let idx = id.index();
        let mut slot = self
            .slots
            .get_mut(idx)
            .ok_or(FlowError::UnknownNode(id))?
            .take()
            .ok_or(FlowError::UnknownNode(id))?;
        {
            let connections: Vec<Option<PortId>> =
                slot.readers.iter().map(|r| r.connection).collect();
            let inputs: Vec<Option<&dyn Container>> = connections
                .iter()
                .map(|c| c.and_then(|pid| self.writer_container(pid)))
                .collect();
            let mut ctx = ProcessContext {
                inputs: &inputs,
                writers: slot.writers.as_mut_slice(),
                data: slot.data.as_mut_slice(),
            };
            slot.node.process(&mut ctx);
        }
        self.slots[idx] = Some(slot);
        Ok(())
    }

    // ── Port and container access ──

    pub fn reader_port(&self, pid: PortId) -> Option<&ReaderPort> {
        self.slot(pid.node)?.readers.get(pid.port_index())
    }

    pub fn writer_port(&self, pid: PortId) -> Option<&WriterPort> {
        self.slot(pid.node)?.writers.get(pid.port_index())
    }

    pub fn data_port(&self, pid: PortId) -> Option<&DataPort> {
        self.slot(pid.node)?.data.get(pid.port_index())
    }

    /// The container published on a writer port, if allocated. This is the
    /// consumer surface: viewers and serializers read final outputs here and
    /// never reach into node internals.
    pub fn writer_container(&self, pid: PortId) -> Option<&dyn Container> {
        self.writer_port(pid)?.container()
    }

    /// The container held by a data port, if any.
    pub fn data_container(&self, pid: PortId) -> Option<&dyn Container> {
        self.data_port(pid)?.container()
    }

    // ── Snapshots ──

    /// A serializable description of the current topology.
    pub fn snapshot(&self) -> TopologySnapshot {
        let mut nodes = Vec::new();
        let mut connections = Vec::new();
        for (i, slot) in self.slots.iter().enumerate() {
            let Some(slot) = slot else { continue };
            let id = NodeId(i as u32);
            let layout = slot.node.layout();
            nodes.push(NodeSnapshot {
                id,
                name: slot.node.name().to_string(),
                readers: layout.readers().to_vec(),
                writers: layout.writers().to_vec(),
                data: layout.data().to_vec(),
            });
            for (r, port) in slot.readers.iter().enumerate() {
                if let Some(writer) = port.connection {
                    connections.push(ConnectionSnapshot {
                        from: writer,
                        to: PortId::new(id, r as u16),
                    });
                }
            }
        }
        TopologySnapshot { nodes, connections }
    }

    // ── Internals ──

    fn slot(&self, id: NodeId) -> Option<&NodeSlot> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut NodeSlot> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Run a node's `layout_changed` with a context over its own ports.
    fn notify_layout_changed(&mut self, id: NodeId) {
        if let Some(slot) = self.slot_mut(id) {
            let NodeSlot {
                node,
                readers,
                writers,
                data,
            } = slot;
            let mut ctx = LayoutContext {
                readers: readers.as_slice(),
                writers: writers.as_mut_slice(),
                data: data.as_mut_slice(),
            };
            node.layout_changed(&mut ctx);
        }
    }
}
