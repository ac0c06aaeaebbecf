use serde::Serialize;
use std::ops::Range;

/// Cursor as supplied by the editor: a caret offset or a selected range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorLocus {
    Offset(usize),
    /// Half-open `[pos, end)` selection.
    Range { pos: usize, end: usize },
}

impl CursorLocus {
    /// Offset used for node lookup; ranges collapse to their start.
    pub const fn offset(self) -> usize {
        match self {
            CursorLocus::Offset(offset) => offset,
            CursorLocus::Range { pos, .. } => pos,
        }
    }
}

impl From<usize> for CursorLocus {
    fn from(offset: usize) -> Self {
        CursorLocus::Offset(offset)
    }
}

impl From<Range<usize>> for CursorLocus {
    fn from(range: Range<usize>) -> Self {
        CursorLocus::Range {
            pos: range.start,
            end: range.end,
        }
    }
}

/// Contiguous `[start, start + length)` region of source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub fn from_range(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }

    pub const fn end(self) -> usize {
        self.start + self.length
    }

    pub const fn range(self) -> Range<usize> {
        self.start..self.end()
    }
}
