//! Document view used by typing-assist strategies.
//!
//! Strategies only ever *read* the document: random-access character reads and
//! line-bounds queries, expressed through the [`TextBuffer`] trait so that a
//! host can hand its own buffer to a strategy without copying. [`Document`]
//! is the canonical rope-backed implementation and additionally supports the
//! mutations a host (or a test) needs to commit an [`EditCommand`].
//!
//! All offsets are char offsets. A line range is half-open `[start, end)` and
//! never includes the line terminator.

use crate::command::EditCommand;
use ropey::Rope;
use std::ops::Range;

/// Error type for document reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Offset beyond the end of the document.
    InvalidOffset(usize),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::InvalidOffset(offset) => {
                write!(f, "Invalid offset: {}", offset)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// Read-only view of a host-owned text buffer.
///
/// Implementations must keep the operations cheap: strategies call them once
/// per scanned character while a keystroke is being processed.
pub trait TextBuffer {
    /// Total character count.
    fn len_chars(&self) -> usize;

    /// The character at `offset`.
    fn char_at(&self, offset: usize) -> Result<char, DocumentError>;

    /// The `[start, end)` char range of the line containing `offset`,
    /// excluding the line terminator.
    ///
    /// `offset` may equal [`len_chars`](TextBuffer::len_chars), addressing the
    /// last (possibly empty) line.
    fn line_range(&self, offset: usize) -> Result<Range<usize>, DocumentError>;

    /// Returns `true` if the buffer contains no characters.
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }
}

/// Rope-backed document.
///
/// Rope provides O(log N) line access, insertion, and deletion, so per-keystroke
/// line scans stay cheap even in large documents.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a document from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get complete text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Get text of the specified line (excluding the line terminator).
    pub fn get_line_text(&self, line_number: usize) -> Option<String> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_number).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }

        Some(text)
    }

    /// Char offset of the first character of the specified line.
    pub fn line_to_char(&self, line_number: usize) -> Option<usize> {
        if line_number >= self.rope.len_lines() {
            return None;
        }
        Some(self.rope.line_to_char(line_number))
    }

    /// Insert text at the specified char offset.
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, text);
    }

    /// Delete a char range.
    pub fn delete(&mut self, start_char: usize, len_chars: usize) {
        let start_char = start_char.min(self.rope.len_chars());
        let end_char = (start_char + len_chars).min(self.rope.len_chars());

        if start_char < end_char {
            self.rope.remove(start_char..end_char);
        }
    }

    /// Commit an [`EditCommand`]: replace the addressed range with the
    /// command's text and return the resulting caret offset.
    pub fn apply_command(&mut self, command: &EditCommand) -> usize {
        self.delete(command.offset, command.length);
        self.insert(command.offset, &command.text);
        command.caret_after()
    }
}

impl TextBuffer for Document {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, offset: usize) -> Result<char, DocumentError> {
        self.rope
            .get_char(offset)
            .ok_or(DocumentError::InvalidOffset(offset))
    }

    fn line_range(&self, offset: usize) -> Result<Range<usize>, DocumentError> {
        if offset > self.rope.len_chars() {
            return Err(DocumentError::InvalidOffset(offset));
        }

        let line_number = self.rope.char_to_line(offset);
        let start = self.rope.line_to_char(line_number);
        let line = self.rope.line(line_number);

        // Rope lines include the terminator; trim "\n" / "\r\n" as a unit.
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }

        Ok(start..start + len)
    }
}
