//! Identity types for the graph system.
//!
//! `NodeId` is a newtype over `u32` used as a direct index into the graph's
//! slot vector. `PortId` addresses one port on one node; whether it names a
//! reader, writer, or data port is determined by the operation it is passed
//! to (`connect` takes a writer-side and a reader-side id, `disconnect` a
//! reader-side id, and so on).

use serde::Serialize;
use std::fmt;

/// Index into `Graph::slots`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "NodeId(INVALID)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One port on one node: the owning node plus the port's position in its
/// declaration-order list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PortId {
    pub node: NodeId,
    pub port: u16,
}

impl PortId {
    pub fn new(node: NodeId, port: u16) -> Self {
        Self { node, port }
    }

    #[inline]
    pub fn port_index(self) -> usize {
        self.port as usize
    }
}

impl fmt::Debug for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PortId(node={}, port={})", self.node.0, self.port)
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId(42);
        assert!(id.is_valid());
        assert_eq!(id.index(), 42);
        assert!(!NodeId::INVALID.is_valid());
    }

    #[test]
    fn test_port_id() {
        let pid = PortId::new(NodeId(3), 1);
        assert_eq!(pid.node, NodeId(3));
        assert_eq!(pid.port_index(), 1);
        assert_eq!(format!("{pid}"), "PortId(node=3, port=1)");
    }
}
