//! Serializable snapshots of graph topology.
//!
//! A snapshot is a point-in-time description of the graph's structure —
//! node names, declared ports, and the current edges — suitable for
//! serialization with serde. It carries no container payloads.

use super::id::{NodeId, PortId};
use super::layout::{DataDecl, ReaderDecl, WriterDecl};
use serde::Serialize;

/// One node: id, name, and declared port lists.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub name: String,
    pub readers: Vec<ReaderDecl>,
    pub writers: Vec<WriterDecl>,
    pub data: Vec<DataDecl>,
}

/// One edge, from a writer port to a reader port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionSnapshot {
    pub from: PortId,
    pub to: PortId,
}

/// The whole topology at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct TopologySnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub connections: Vec<ConnectionSnapshot>,
}
