//! Runtime port state.
//!
//! Ports are built by the graph from a node's declared layout when the node
//! is added. A reader references at most one writer; a writer fans out to
//! any number of readers and owns the container it publishes; a data port is
//! node-local storage (`Empty → Holding → Empty`). Containers are owned by
//! exactly one writer or data port — readers borrow through the graph and
//! never hold a container across wiring changes.

use super::id::PortId;
use super::layout::{DataDecl, ReaderDecl, WriterDecl};
use crate::container::Container;
use crate::error::{FlowError, Result};

/// A reader (input) port: at most one upstream writer.
#[derive(Debug)]
pub struct ReaderPort {
    pub(crate) decl: ReaderDecl,
    pub(crate) connection: Option<PortId>,
}

impl ReaderPort {
    pub(crate) fn new(decl: ReaderDecl) -> Self {
        Self {
            decl,
            connection: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.decl.name
    }

    /// Tags a connected writer must provide.
    pub fn required(&self) -> &crate::tags::TagSet {
        &self.decl.required
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// The writer this reader currently references, if any.
    pub fn connected_writer(&self) -> Option<PortId> {
        self.connection
    }
}

/// A writer (output) port: owns its container, fans out to readers.
pub struct WriterPort {
    pub(crate) decl: WriterDecl,
    pub(crate) connections: Vec<PortId>,
    pub(crate) container: Option<Box<dyn Container>>,
}

impl WriterPort {
    pub(crate) fn new(decl: WriterDecl) -> Self {
        Self {
            decl,
            connections: Vec::new(),
            container: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.decl.name
    }

    /// Tags this port's containers carry.
    pub fn provided(&self) -> &crate::tags::TagSet {
        &self.decl.provided
    }

    pub fn is_connected(&self) -> bool {
        !self.connections.is_empty()
    }

    /// Readers currently referencing this writer.
    pub fn connected_readers(&self) -> &[PortId] {
        &self.connections
    }

    pub fn container(&self) -> Option<&dyn Container> {
        self.container.as_deref()
    }

    pub fn container_mut(&mut self) -> Option<&mut (dyn Container + 'static)> {
        self.container.as_deref_mut()
    }

    /// Install a container. Rejected (port left unchanged) when the
    /// container's tags do not satisfy the port's declared tags.
    pub(crate) fn set_container(&mut self, container: Box<dyn Container>) -> Result<()> {
        if !container.tags().has_all(&self.decl.provided) {
            return Err(FlowError::ContainerMismatch {
                container: container.tags().clone(),
                expected: self.decl.provided.clone(),
            });
        }
        self.container = Some(container);
        Ok(())
    }

    pub(crate) fn take_container(&mut self) -> Option<Box<dyn Container>> {
        self.container.take()
    }
}

/// A data port: node-local container storage with an access flag.
pub struct DataPort {
    pub(crate) decl: DataDecl,
    pub(crate) container: Option<Box<dyn Container>>,
}

impl DataPort {
    pub(crate) fn new(decl: DataDecl) -> Self {
        Self {
            decl,
            container: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.decl.name
    }

    pub fn flag(&self) -> super::layout::PortFlag {
        self.decl.flag
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_none()
    }

    pub fn container(&self) -> Option<&dyn Container> {
        self.container.as_deref()
    }

    pub fn container_mut(&mut self) -> Option<&mut (dyn Container + 'static)> {
        self.container.as_deref_mut()
    }

    /// Install a container. Rejected (port left unchanged) when the
    /// container's tags do not satisfy the port's accepted tags.
    pub(crate) fn set_container(&mut self, container: Box<dyn Container>) -> Result<()> {
        if !container.tags().has_all(&self.decl.accepts) {
            return Err(FlowError::ContainerMismatch {
                container: container.tags().clone(),
                expected: self.decl.accepts.clone(),
            });
        }
        self.container = Some(container);
        Ok(())
    }

    pub(crate) fn take_container(&mut self) -> Option<Box<dyn Container>> {
        self.container.take()
    }
}
