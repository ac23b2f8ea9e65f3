//! Containers — the polymorphic data holders that flow across ports.
//!
//! A container carries a [`TagSet`] describing what it represents and can be
//! inspected by *capability* rather than by concrete type. Two downcast
//! paths exist, both checked and both returning an absent result instead of
//! failing hard:
//!
//! - capability queries (`scalar()`, `text()`) return a trait-object view
//!   when the container supports that role;
//! - [`downcast_ref`](Container) on `dyn Container` recovers the concrete
//!   type for containers with no common capability trait (e.g. a typed
//!   strided array).
//!
//! Callers must treat a failed downcast as "input not yet available" and
//! degrade per their documented policy — never as a fault.

pub mod array;
pub mod scalar;
pub mod text;

pub use array::{ArrayContainer, StridedArray, StridedView};
pub use scalar::ScalarContainer;
pub use text::TextContainer;

use crate::tags::TagSet;
use std::any::Any;

/// A polymorphic data holder with a tag set and capability-based access.
///
/// A container is owned by exactly one writer or data port at a time; reader
/// ports only ever borrow it through the graph.
pub trait Container: Any + Send {
    /// The tags describing what this container represents.
    fn tags(&self) -> &TagSet;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Numeric capability, if this container holds a scalar value.
    fn scalar(&self) -> Option<&dyn ScalarValue> {
        None
    }

    fn scalar_mut(&mut self) -> Option<&mut dyn ScalarValue> {
        None
    }

    /// Text capability, if this container holds line-oriented text.
    fn text(&self) -> Option<&dyn TextBuffer> {
        None
    }

    fn text_mut(&mut self) -> Option<&mut dyn TextBuffer> {
        None
    }
}

impl dyn Container {
    /// Checked downcast to a concrete container type.
    pub fn downcast_ref<T: Container>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Checked mutable downcast to a concrete container type.
    pub fn downcast_mut<T: Container>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// A single numeric value.
pub trait ScalarValue {
    fn get(&self) -> f64;
    fn set(&mut self, value: f64);
}

/// Line-oriented text access.
pub trait TextBuffer {
    fn line_count(&self) -> usize;
    fn line(&self, index: usize) -> Option<&str>;
    fn push_line(&mut self, line: &str);
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_query_absent_on_mismatched_kind() {
        let scalar: Box<dyn Container> = Box::new(ScalarContainer::new(1.0));
        assert!(scalar.scalar().is_some());
        assert!(scalar.text().is_none());

        let text: Box<dyn Container> = Box::new(TextContainer::new());
        assert!(text.text().is_some());
        assert!(text.scalar().is_none());
    }

    #[test]
    fn test_concrete_downcast() {
        let mut c: Box<dyn Container> = Box::new(ScalarContainer::new(2.5));
        assert!(c.downcast_ref::<ScalarContainer>().is_some());
        assert!(c.downcast_ref::<TextContainer>().is_none());

        c.downcast_mut::<ScalarContainer>().unwrap().set(3.0);
        assert_eq!(c.scalar().unwrap().get(), 3.0);
    }
}
