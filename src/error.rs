//! Error handling for the flowgraph crate.
//!
//! Wiring and lookup failures are reported to the immediate caller as
//! ordinary `Err` values; nothing in this crate panics on a bad connection,
//! a missing factory entry, or an out-of-range array index.

use crate::graph::id::{NodeId, PortId};
use crate::tags::TagSet;
use thiserror::Error;

/// Errors that can occur in the graph wiring and container subsystems.
#[derive(Error, Debug)]
pub enum FlowError {
    /// The node id does not name a live node.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// The port id does not name a port on a live node.
    #[error("unknown port: {0}")]
    UnknownPort(PortId),

    /// A node cannot be wired to itself.
    #[error("cannot connect node {0} to itself")]
    SelfConnection(NodeId),

    /// The reader port already references a writer; disconnect it first.
    #[error("reader port {0} is already connected")]
    AlreadyConnected(PortId),

    /// The writer's declared tags do not satisfy the reader's requirements.
    #[error("incompatible connection: writer provides {provided}, reader requires {required}")]
    IncompatibleTags { provided: TagSet, required: TagSet },

    /// A container was offered to a port whose declared tags it does not satisfy.
    #[error("container tagged {container} does not satisfy port tags {expected}")]
    ContainerMismatch { container: TagSet, expected: TagSet },

    /// A strided-array index fell outside the span.
    #[error("array index {index:?} out of bounds for span {span:?}")]
    OutOfBounds { index: Vec<usize>, span: Vec<usize> },

    /// Span/stride vectors that would address memory outside the buffer.
    #[error("invalid strides: {0}")]
    InvalidStrides(String),

    /// A text line index outside the buffer.
    #[error("line {line} out of range ({lines} lines)")]
    LineOutOfRange { line: usize, lines: usize },

    /// A character position outside a text line.
    #[error("char position {pos} out of range on line {line}")]
    CharOutOfRange { line: usize, pos: usize },
}

/// Result type alias for flowgraph operations.
pub type Result<T> = std::result::Result<T, FlowError>;
