//! Line-wise uppercase text filter.

use crate::container::{Container, TextBuffer, TextContainer};
use crate::graph::{
    LayoutBuilder, LayoutContext, Node, NodeLayout, ProcessContext, ReaderKey, WriterKey,
};
use crate::tags::TagSet;
use tracing::error;

/// Republishes its text input with every line uppercased.
///
/// The output container exists only while the input is connected. With the
/// input connected but unresolved, `process` publishes an empty buffer.
pub struct TextUppercaseNode {
    layout: NodeLayout,
    input: ReaderKey,
    output: WriterKey,
}

impl TextUppercaseNode {
    pub fn new() -> Self {
        let mut builder = LayoutBuilder::new();
        let input = builder.reader("text", TagSet::parse("#text"));
        let output = builder.writer("upper", TagSet::parse("#text"));
        Self {
            layout: builder.build(),
            input,
            output,
        }
    }
}

impl Default for TextUppercaseNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for TextUppercaseNode {
    fn name(&self) -> &str {
        "text-uppercase"
    }

    fn layout(&self) -> &NodeLayout {
        &self.layout
    }

    fn process(&mut self, ctx: &mut ProcessContext) {
        let lines: Vec<String> = match ctx.input(self.input).and_then(|c| c.text()) {
            Some(text) => (0..text.line_count())
                .filter_map(|i| text.line(i))
                .map(str::to_uppercase)
                .collect(),
            None => Vec::new(),
        };
        if let Some(out) = ctx.output_mut(self.output).and_then(|c| c.text_mut()) {
            out.clear();
            for line in &lines {
                out.push_line(line);
            }
        }
    }

    fn layout_changed(&mut self, ctx: &mut LayoutContext) {
        if ctx.reader_connected(self.input) {
            if !ctx.has_output(self.output) {
                if let Err(err) = ctx.set_output(self.output, Box::new(TextContainer::new())) {
                    error!("text-uppercase output allocation failed: {err}");
                }
            }
        } else if ctx.has_output(self.output) {
            ctx.take_output(self.output);
        }
    }
}
