//! Two-operand addition filter.

use crate::container::{Container, ScalarContainer, ScalarValue};
use crate::graph::{
    LayoutBuilder, LayoutContext, Node, NodeLayout, ProcessContext, ReaderKey, WriterKey,
};
use crate::tags::TagSet;
use tracing::error;

/// Adds its two numeric inputs.
///
/// Allocation is lazy: the `sum` container exists only while both inputs are
/// connected, and is freed as soon as either disconnects — downstream readers
/// then observe an absent container, not a stale sum. A connected input whose
/// writer has not produced a scalar yet contributes the neutral value `0.0`.
pub struct AddNode {
    layout: NodeLayout,
    a: ReaderKey,
    b: ReaderKey,
    sum: WriterKey,
}

impl AddNode {
    pub fn new() -> Self {
        let mut builder = LayoutBuilder::new();
        let a = builder.reader("a", TagSet::parse("#number"));
        let b = builder.reader("b", TagSet::parse("#number"));
        let sum = builder.writer("sum", TagSet::parse("#number#scalar"));
        Self {
            layout: builder.build(),
            a,
            b,
            sum,
        }
    }
}

impl Default for AddNode {
    fn default() -> Self {
        Self::new()
    }
}

fn operand(ctx: &ProcessContext, key: ReaderKey) -> f64 {
    ctx.input(key)
        .and_then(|c| c.scalar())
        .map_or(0.0, |s| s.get())
}

impl Node for AddNode {
    fn name(&self) -> &str {
        "add"
    }

    fn layout(&self) -> &NodeLayout {
        &self.layout
    }

    fn process(&mut self, ctx: &mut ProcessContext) {
        let total = operand(ctx, self.a) + operand(ctx, self.b);
        if let Some(out) = ctx.output_mut(self.sum).and_then(|c| c.scalar_mut()) {
            out.set(total);
        }
    }

    fn layout_changed(&mut self, ctx: &mut LayoutContext) {
        if ctx.all_readers_connected() {
            if !ctx.has_output(self.sum) {
                let container = Box::new(ScalarContainer::default());
                if let Err(err) = ctx.set_output(self.sum, container) {
                    error!("add output allocation failed: {err}");
                }
            }
        } else if ctx.has_output(self.sum) {
            ctx.take_output(self.sum);
        }
    }
}
