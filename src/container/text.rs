//! Text container — a line-oriented buffer tagged `#text`.
//!
//! Line edits are bounds-checked: an out-of-range line or character position
//! is a reported [`FlowError`], never a silent no-op or a panic.

use super::{Container, TextBuffer};
use crate::error::{FlowError, Result};
use crate::tags::TagSet;
use std::any::Any;

/// A container holding lines of text.
#[derive(Debug)]
pub struct TextContainer {
    lines: Vec<String>,
    tags: TagSet,
}

impl Default for TextContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextContainer {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            tags: TagSet::parse("#text"),
        }
    }

    /// Build a container from existing lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut c = Self::new();
        c.lines = lines.into_iter().map(Into::into).collect();
        c
    }

    /// Insert a line at `position`, or append when `position` is `None`.
    pub fn insert_line(&mut self, line: impl Into<String>, position: Option<usize>) -> Result<()> {
        match position {
            None => {
                self.lines.push(line.into());
                Ok(())
            }
            Some(pos) if pos <= self.lines.len() => {
                self.lines.insert(pos, line.into());
                Ok(())
            }
            Some(pos) => Err(FlowError::LineOutOfRange {
                line: pos,
                lines: self.lines.len(),
            }),
        }
    }

    /// Remove and return the line at `position`.
    pub fn remove_line(&mut self, position: usize) -> Result<String> {
        if position < self.lines.len() {
            Ok(self.lines.remove(position))
        } else {
            Err(FlowError::LineOutOfRange {
                line: position,
                lines: self.lines.len(),
            })
        }
    }

    /// Overwrite one character on one line.
    pub fn set_char(&mut self, line: usize, pos: usize, value: char) -> Result<()> {
        let lines = self.lines.len();
        let text = self
            .lines
            .get_mut(line)
            .ok_or(FlowError::LineOutOfRange { line, lines })?;
        let mut chars: Vec<char> = text.chars().collect();
        if pos >= chars.len() {
            return Err(FlowError::CharOutOfRange { line, pos });
        }
        chars[pos] = value;
        *text = chars.into_iter().collect();
        Ok(())
    }

    /// Append raw text, splitting on newlines.
    pub fn append_str(&mut self, text: &str) {
        for line in text.lines() {
            self.lines.push(line.to_string());
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Container for TextContainer {
    fn tags(&self) -> &TagSet {
        &self.tags
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn text(&self) -> Option<&dyn TextBuffer> {
        Some(self)
    }

    fn text_mut(&mut self) -> Option<&mut dyn TextBuffer> {
        Some(self)
    }
}

impl TextBuffer for TextContainer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove() {
        let mut c = TextContainer::new();
        c.insert_line("world", None).unwrap();
        c.insert_line("hello", Some(0)).unwrap();
        assert_eq!(c.lines(), &["hello".to_string(), "world".to_string()]);

        let removed = c.remove_line(0).unwrap();
        assert_eq!(removed, "hello");
        assert_eq!(c.line_count(), 1);
    }

    #[test]
    fn test_out_of_range_edits_are_errors() {
        let mut c = TextContainer::from_lines(["abc"]);
        assert!(matches!(
            c.insert_line("x", Some(5)),
            Err(FlowError::LineOutOfRange { line: 5, lines: 1 })
        ));
        assert!(c.remove_line(1).is_err());
        assert!(matches!(
            c.set_char(0, 3, 'z'),
            Err(FlowError::CharOutOfRange { line: 0, pos: 3 })
        ));
        assert!(c.set_char(1, 0, 'z').is_err());
    }

    #[test]
    fn test_set_char() {
        let mut c = TextContainer::from_lines(["cat"]);
        c.set_char(0, 0, 'b').unwrap();
        assert_eq!(c.line(0), Some("bat"));
    }

    #[test]
    fn test_append_str_splits_lines() {
        let mut c = TextContainer::new();
        c.append_str("one\ntwo\n");
        assert_eq!(c.line_count(), 2);
        assert_eq!(c.line(1), Some("two"));
    }
}
