//! Constant numeric source.

use crate::container::{Container, ScalarContainer, ScalarValue};
use crate::graph::{LayoutBuilder, LayoutContext, Node, NodeLayout, ProcessContext, WriterKey};
use crate::tags::TagSet;
use tracing::error;

/// A zero-input node publishing one constant value on its writer.
///
/// The output container is allocated at the initial `layout_changed` (a
/// source has no inputs to wait for) and refreshed on every `process`.
pub struct ValueSourceNode {
    layout: NodeLayout,
    out: WriterKey,
    value: f64,
}

impl ValueSourceNode {
    pub fn new(value: f64) -> Self {
        let mut builder = LayoutBuilder::new();
        let out = builder.writer("value", TagSet::parse("#number#scalar"));
        Self {
            layout: builder.build(),
            out,
            value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl Node for ValueSourceNode {
    fn name(&self) -> &str {
        "value-source"
    }

    fn layout(&self) -> &NodeLayout {
        &self.layout
    }

    fn process(&mut self, ctx: &mut ProcessContext) {
        if let Some(out) = ctx.output_mut(self.out).and_then(|c| c.scalar_mut()) {
            out.set(self.value);
        }
    }

    fn layout_changed(&mut self, ctx: &mut LayoutContext) {
        if !ctx.has_output(self.out) {
            let container = Box::new(ScalarContainer::new(self.value));
            if let Err(err) = ctx.set_output(self.out, container) {
                error!("value-source output allocation failed: {err}");
            }
        }
    }
}
