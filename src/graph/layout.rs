//! Static layout adapter — fixed port declarations with typed keys.
//!
//! A node declares its ports once, at construction, through a
//! [`LayoutBuilder`]. Each registration returns a typed key
//! ([`ReaderKey`]/[`WriterKey`]/[`DataKey`]) that the node stores and later
//! uses for context access, while the same registration appends the
//! declaration to a runtime-indexable list. A key's index equals the port's
//! position in that list, so the typed accessor and the flat runtime index
//! always observe the same port identity. The built [`NodeLayout`] is
//! immutable: connection state changes over a node's lifetime, the set of
//! port identities never does.

use crate::tags::TagSet;
use serde::Serialize;

/// Access capability of a data port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PortFlag {
    Read,
    Write,
    ReadWrite,
}

/// Declaration of a reader (input) port.
#[derive(Debug, Clone, Serialize)]
pub struct ReaderDecl {
    pub name: &'static str,
    /// Tags a connected writer must provide.
    pub required: TagSet,
}

/// Declaration of a writer (output) port.
#[derive(Debug, Clone, Serialize)]
pub struct WriterDecl {
    pub name: &'static str,
    /// Tags the containers installed on this port will carry.
    pub provided: TagSet,
}

/// Declaration of a data (node-local storage) port.
#[derive(Debug, Clone, Serialize)]
pub struct DataDecl {
    pub name: &'static str,
    pub flag: PortFlag,
    /// Tags a container must carry to be accepted by this port.
    pub accepts: TagSet,
}

/// Typed handle to a reader port, valid for the layout that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderKey(pub(crate) u16);

/// Typed handle to a writer port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterKey(pub(crate) u16);

/// Typed handle to a data port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataKey(pub(crate) u16);

impl ReaderKey {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl WriterKey {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl DataKey {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The fixed port layout of a node: declaration-order lists of reader,
/// writer, and data port declarations.
#[derive(Debug, Clone, Default)]
pub struct NodeLayout {
    readers: Vec<ReaderDecl>,
    writers: Vec<WriterDecl>,
    data: Vec<DataDecl>,
}

impl NodeLayout {
    pub fn readers(&self) -> &[ReaderDecl] {
        &self.readers
    }

    pub fn writers(&self) -> &[WriterDecl] {
        &self.writers
    }

    pub fn data(&self) -> &[DataDecl] {
        &self.data
    }
}

/// Builder used by node constructors to declare their ports.
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    layout: NodeLayout,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a reader port requiring `required` tags on its peer.
    pub fn reader(&mut self, name: &'static str, required: TagSet) -> ReaderKey {
        let key = ReaderKey(self.layout.readers.len() as u16);
        self.layout.readers.push(ReaderDecl { name, required });
        key
    }

    /// Declare a writer port whose containers carry `provided` tags.
    pub fn writer(&mut self, name: &'static str, provided: TagSet) -> WriterKey {
        let key = WriterKey(self.layout.writers.len() as u16);
        self.layout.writers.push(WriterDecl { name, provided });
        key
    }

    /// Declare a data port accepting containers tagged `accepts`.
    pub fn data(&mut self, name: &'static str, flag: PortFlag, accepts: TagSet) -> DataKey {
        let key = DataKey(self.layout.data.len() as u16);
        self.layout.data.push(DataDecl {
            name,
            flag,
            accepts,
        });
        key
    }

    pub fn build(self) -> NodeLayout {
        self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_declaration_order() {
        let mut b = LayoutBuilder::new();
        let a = b.reader("a", TagSet::parse("#number"));
        let c = b.reader("b", TagSet::parse("#number"));
        let out = b.writer("out", TagSet::parse("#number#scalar"));
        let scratch = b.data("scratch", PortFlag::ReadWrite, TagSet::new());
        let layout = b.build();

        assert_eq!(a.index(), 0);
        assert_eq!(c.index(), 1);
        assert_eq!(out.index(), 0);
        assert_eq!(scratch.index(), 0);

        assert_eq!(layout.readers().len(), 2);
        assert_eq!(layout.readers()[a.index()].name, "a");
        assert_eq!(layout.readers()[c.index()].name, "b");
        assert_eq!(layout.writers()[out.index()].name, "out");
        assert_eq!(layout.data()[scratch.index()].flag, PortFlag::ReadWrite);
    }
}
