//! Scalar container — a single numeric value tagged `#number#scalar`.

use super::{Container, ScalarValue};
use crate::tags::TagSet;
use std::any::Any;

/// A container holding one `f64`.
///
/// The default payload for arithmetic nodes; writers that produce a single
/// number allocate one of these lazily when their inputs connect.
#[derive(Debug)]
pub struct ScalarContainer {
    value: f64,
    tags: TagSet,
}

impl ScalarContainer {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            tags: TagSet::parse("#number#scalar"),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl Default for ScalarContainer {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Container for ScalarContainer {
    fn tags(&self) -> &TagSet {
        &self.tags
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn scalar(&self) -> Option<&dyn ScalarValue> {
        Some(self)
    }

    fn scalar_mut(&mut self) -> Option<&mut dyn ScalarValue> {
        Some(self)
    }
}

impl ScalarValue for ScalarContainer {
    fn get(&self) -> f64 {
        self.value
    }

    fn set(&mut self, value: f64) {
        self.value = value;
    }
}
