//! Automatic closing of brackets and quotes.
//!
//! [`AutoCloseStrategy`] inspects each single-character insertion before the
//! host commits it and makes one of three local decisions:
//!
//! 1. **Insert pair** - typing an opening bracket appends the matching closer
//!    and pins the caret between the pair
//! 2. **Skip close** - typing a closer or quote that already sits at the
//!    caret suppresses the insertion and moves the caret past it
//! 3. **Leave alone** - anything else passes through unmodified
//!
//! Disambiguation uses only a scan of the current line: a tally of opening
//! vs. closing brackets for closers, a parity count for quotes. This is an
//! intentional approximation - brackets on previous lines and string/comment
//! context are ignored - trading lexical accuracy for O(line length) per
//! keystroke with no state retained between calls.

use crate::command::EditCommand;
use crate::document::{DocumentError, TextBuffer};
use autoedit_lang::PairTable;

/// A strategy consulted by the host once per input event, before the edit is
/// committed to the document.
///
/// Implementations may rewrite the command's text and caret fields; they must
/// not mutate the document.
pub trait AutoEditStrategy {
    /// Inspect `command` against `document` and rewrite it in place.
    fn customize_command(&self, document: &dyn TextBuffer, command: &mut EditCommand);
}

/// Auto-closes brackets and quotes as the user types.
///
/// Only well-formed candidates are considered: the document is non-empty, the
/// offset is in range, and the command is a pure single-character insertion.
/// Anything else (paste, multi-selection replace, empty document) passes
/// through untouched, as does any keystroke during which a document read
/// fails - a recoverable condition, never an error.
#[derive(Debug, Clone, Default)]
pub struct AutoCloseStrategy {
    pairs: PairTable,
}

impl AutoCloseStrategy {
    /// Create a strategy over a custom pair table.
    pub fn new(pairs: PairTable) -> Self {
        Self { pairs }
    }

    /// The pair table this strategy consults.
    pub fn pairs(&self) -> &PairTable {
        &self.pairs
    }
}

impl AutoEditStrategy for AutoCloseStrategy {
    fn customize_command(&self, document: &dyn TextBuffer, command: &mut EditCommand) {
        if document.is_empty() || command.offset > document.len_chars() || command.length > 0 {
            return;
        }
        let Some(ch) = command.single_char() else {
            return;
        };

        // A failed read below means the document changed under us
        // (concurrent edit); keep the command as typed.
        if let Some(closing) = self.pairs.closer_for(ch) {
            set_closing_char(command, closing);
        } else if let Some(opening) = self.pairs.opener_for(ch) {
            let _ = check_closing_char(document, command, opening, ch);
        } else if self.pairs.is_quote(ch) {
            let _ = check_quote_char(document, command, ch);
        }
    }
}

/// Append the closing character and pin the caret between the pair.
fn set_closing_char(command: &mut EditCommand, closing: char) {
    command.text.push(closing);
    command.caret = Some(command.offset + 1);
    command.shifts_caret = false;
}

/// Cancel the insertion and step the caret over the character already there.
fn skip_existing_char(command: &mut EditCommand) {
    command.text.clear();
    command.caret = Some(command.offset + 1);
    command.shifts_caret = false;
}

fn check_closing_char(
    document: &dyn TextBuffer,
    command: &mut EditCommand,
    opening: char,
    closing: char,
) -> Result<(), DocumentError> {
    if command.offset == document.len_chars() {
        // cursor at end of document, nothing to skip over
        return Ok(());
    }

    if document.char_at(command.offset)? == closing
        && closer_is_skippable(document, command.offset, opening, closing)?
    {
        skip_existing_char(command);
    }
    Ok(())
}

/// The closer at `offset` counts as auto-inserted when the scanned prefix of
/// the line - start through `offset` inclusive - still holds an unmatched
/// opening bracket.
fn closer_is_skippable(
    document: &dyn TextBuffer,
    offset: usize,
    opening: char,
    closing: char,
) -> Result<bool, DocumentError> {
    let line = document.line_range(offset)?;

    let mut opening_count = 0usize;
    let mut closing_count = 0usize;
    for i in line.start..=offset {
        let ch = document.char_at(i)?;
        if ch == opening {
            opening_count += 1;
        } else if ch == closing {
            closing_count += 1;
        }
    }

    Ok(opening_count > closing_count)
}

fn check_quote_char(
    document: &dyn TextBuffer,
    command: &mut EditCommand,
    quote: char,
) -> Result<(), DocumentError> {
    if command.offset == document.len_chars() {
        // cursor at end of document
        if count_quotes(document, command.offset, quote)? % 2 == 0 {
            set_closing_char(command, quote);
        }
        return Ok(());
    }

    if document.char_at(command.offset)? == quote {
        // Next char is already the quote. Quotes don't nest, so no tally:
        // always step over it.
        skip_existing_char(command);
    } else if count_quotes(document, command.offset, quote)? % 2 == 0 {
        set_closing_char(command, quote);
    }
    Ok(())
}

/// Count occurrences of `quote` on the line, start through `offset` exclusive.
fn count_quotes(
    document: &dyn TextBuffer,
    offset: usize,
    quote: char,
) -> Result<usize, DocumentError> {
    let line = document.line_range(offset)?;

    let mut count = 0usize;
    for i in line.start..offset {
        if document.char_at(i)? == quote {
            count += 1;
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_closer_is_skippable_tally() {
        // Scanned prefix includes the char at `offset`.
        let doc = Document::from_text("foo(bar()");
        assert_eq!(closer_is_skippable(&doc, 8, '(', ')'), Ok(true)); // opens=2, closes=1

        let doc = Document::from_text("()");
        assert_eq!(closer_is_skippable(&doc, 1, '(', ')'), Ok(false)); // opens=1, closes=1

        // Previous lines don't participate in the tally.
        let doc = Document::from_text("((\n()");
        assert_eq!(closer_is_skippable(&doc, 4, '(', ')'), Ok(false));
    }

    #[test]
    fn test_count_quotes_excludes_offset() {
        let doc = Document::from_text("say \"hi\" now");
        assert_eq!(count_quotes(&doc, 4, '"'), Ok(0));
        assert_eq!(count_quotes(&doc, 5, '"'), Ok(1));
        assert_eq!(count_quotes(&doc, 12, '"'), Ok(2));

        // Line-local: the quote on line 0 is invisible from line 1.
        let doc = Document::from_text("\"\nx");
        assert_eq!(count_quotes(&doc, 3, '"'), Ok(0));
    }

    #[test]
    fn test_set_and_skip_rewrites() {
        let mut cmd = EditCommand::insertion(4, "(");
        set_closing_char(&mut cmd, ')');
        assert_eq!(cmd.text, "()");
        assert_eq!(cmd.caret, Some(5));
        assert!(!cmd.shifts_caret);

        let mut cmd = EditCommand::insertion(4, ")");
        skip_existing_char(&mut cmd);
        assert_eq!(cmd.text, "");
        assert_eq!(cmd.caret, Some(5));
        assert!(!cmd.shifts_caret);
    }
}
