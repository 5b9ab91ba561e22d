//! The terminal's rendering surface.
//!
//! The dispatcher writes through `TerminalSurface`; hosts decide how the
//! scrollback and the input line are actually drawn.

use std::collections::VecDeque;

/// Styling of an output block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Error,
}

/// One entry in the scrollback pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    /// A submitted command, shown after the prompt.
    Echo(String),
    /// Lines produced by a command.
    Lines { style: LineStyle, lines: Vec<String> },
}

impl OutputBlock {
    fn line_count(&self) -> usize {
        match self {
            Self::Echo(_) => 1,
            Self::Lines { lines, .. } => lines.len(),
        }
    }
}

/// Output region plus single-line input, as seen by the dispatcher.
pub trait TerminalSurface {
    /// Show a submitted command after the prompt.
    fn echo(&mut self, command: &str);

    /// Append a block of output lines.
    fn append(&mut self, lines: Vec<String>, style: LineStyle);

    /// Drop everything in the output region.
    fn clear(&mut self);

    /// Replace the visible input text and caret (char index).
    fn set_input(&mut self, text: &str, caret: usize);
}

/// In-memory surface keeping a bounded scrollback.
///
/// Oldest blocks are dropped once the retained line count exceeds the
/// budget; the newest block is always kept whole.
#[derive(Debug, Clone)]
pub struct ScrollbackSurface {
    blocks: VecDeque<OutputBlock>,
    line_count: usize,
    max_lines: usize,
    input: String,
    caret: usize,
}

impl ScrollbackSurface {
    pub fn new(max_lines: usize) -> Self {
        Self {
            blocks: VecDeque::new(),
            line_count: 0,
            max_lines: max_lines.max(1),
            input: String::new(),
            caret: 0,
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = &OutputBlock> {
        self.blocks.iter()
    }

    /// Total lines currently retained.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The last block appended, if any.
    pub fn last_block(&self) -> Option<&OutputBlock> {
        self.blocks.back()
    }

    /// Plain text of the last output block's lines.
    pub fn last_lines(&self) -> Option<(&[String], LineStyle)> {
        self.blocks.iter().rev().find_map(|b| match b {
            OutputBlock::Lines { style, lines } => Some((lines.as_slice(), *style)),
            OutputBlock::Echo(_) => None,
        })
    }

    fn push(&mut self, block: OutputBlock) {
        self.line_count += block.line_count();
        self.blocks.push_back(block);
        while self.line_count > self.max_lines && self.blocks.len() > 1 {
            if let Some(old) = self.blocks.pop_front() {
                self.line_count -= old.line_count();
            }
        }
    }
}

impl TerminalSurface for ScrollbackSurface {
    fn echo(&mut self, command: &str) {
        self.push(OutputBlock::Echo(command.to_string()));
    }

    fn append(&mut self, lines: Vec<String>, style: LineStyle) {
        self.push(OutputBlock::Lines { style, lines });
    }

    fn clear(&mut self) {
        self.blocks.clear();
        self.line_count = 0;
    }

    fn set_input(&mut self, text: &str, caret: usize) {
        self.input.clear();
        self.input.push_str(text);
        self.caret = caret.min(text.chars().count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_and_append_are_kept_in_order() {
        let mut s = ScrollbackSurface::new(100);
        s.echo("ls");
        s.append(vec!["a".into(), "b".into()], LineStyle::Normal);
        let blocks: Vec<_> = s.blocks().cloned().collect();
        assert_eq!(
            blocks,
            vec![
                OutputBlock::Echo("ls".into()),
                OutputBlock::Lines {
                    style: LineStyle::Normal,
                    lines: vec!["a".into(), "b".into()],
                },
            ]
        );
        assert_eq!(s.line_count(), 3);
    }

    #[test]
    fn clear_empties_output_but_not_input() {
        let mut s = ScrollbackSurface::new(100);
        s.set_input("he", 2);
        s.echo("ls");
        s.clear();
        assert_eq!(s.blocks().count(), 0);
        assert_eq!(s.line_count(), 0);
        assert_eq!(s.input(), "he");
    }

    #[test]
    fn oldest_blocks_trimmed() {
        let mut s = ScrollbackSurface::new(3);
        s.echo("one");
        s.echo("two");
        s.append(vec!["x".into(), "y".into()], LineStyle::Error);
        assert_eq!(s.line_count(), 3);
        assert_eq!(s.blocks().next(), Some(&OutputBlock::Echo("two".into())));
    }

    #[test]
    fn oversized_block_kept_whole() {
        let mut s = ScrollbackSurface::new(2);
        s.echo("help");
        s.append(vec!["1".into(), "2".into(), "3".into()], LineStyle::Normal);
        assert_eq!(s.blocks().count(), 1);
        assert_eq!(s.line_count(), 3);
    }

    #[test]
    fn last_lines_skips_echo() {
        let mut s = ScrollbackSurface::new(10);
        s.append(vec!["out".into()], LineStyle::Error);
        s.echo("next");
        let (lines, style) = s.last_lines().unwrap();
        assert_eq!(lines, ["out".to_string()]);
        assert_eq!(style, LineStyle::Error);
    }

    #[test]
    fn caret_clamped_to_input() {
        let mut s = ScrollbackSurface::new(10);
        s.set_input("ab", 10);
        assert_eq!(s.caret(), 2);
    }
}
