//! Dataflow graph: nodes, ports, wiring, and processing.
//!
//! The pieces, bottom up:
//!
//! - [`id`] — stable [`NodeId`]/[`PortId`] handles; all cross-node references
//!   go through these, never through pointers.
//! - [`layout`] — immutable per-node port declarations, built once with
//!   [`LayoutBuilder`] and addressed with typed keys.
//! - [`port`] — runtime port state: reader connections, writer containers
//!   and fan-out, data-port storage.
//! - [`node`] — the [`Node`] trait and the contexts its hooks receive.
//! - [`graph`] — the [`Graph`] that owns the slots and drives wiring,
//!   notifications, and processing.
//! - [`snapshot`] — serializable topology descriptions.

pub mod graph;
pub mod id;
pub mod layout;
pub mod node;
pub mod port;
pub mod snapshot;

pub use graph::Graph;
pub use id::{NodeId, PortId};
pub use layout::{
    DataDecl, DataKey, LayoutBuilder, NodeLayout, PortFlag, ReaderDecl, ReaderKey, WriterDecl,
    WriterKey,
};
pub use node::{LayoutContext, Node, ProcessContext};
pub use port::{DataPort, ReaderPort, WriterPort};
pub use snapshot::{ConnectionSnapshot, NodeSnapshot, TopologySnapshot};
