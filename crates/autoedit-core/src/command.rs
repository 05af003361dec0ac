//! The edit command rewritten by typing-assist strategies.

/// A proposed edit, delivered to strategies before the host commits it.
///
/// The host builds one per input event and hands it to
/// [`AutoEditStrategy::customize_command`](crate::AutoEditStrategy::customize_command),
/// which may rewrite `text`, `caret`, and `shifts_caret` in place. The host
/// then replaces the `length` chars at `offset` with `text` and positions the
/// caret per [`caret_after`](EditCommand::caret_after).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    /// Char offset the edit applies at.
    pub offset: usize,
    /// Length of the replaced range in chars (0 for a pure insertion).
    pub length: usize,
    /// Replacement text.
    pub text: String,
    /// Explicit caret offset after the commit; honored when
    /// [`shifts_caret`](EditCommand::shifts_caret) is `false`.
    pub caret: Option<usize>,
    /// When `true` (the default), the caret moves to the end of the inserted
    /// text; when `false`, it stays pinned at [`caret`](EditCommand::caret).
    pub shifts_caret: bool,
}

impl EditCommand {
    /// A pure insertion at `offset`.
    pub fn insertion(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            length: 0,
            text: text.into(),
            caret: None,
            shifts_caret: true,
        }
    }

    /// A replacement of `length` chars at `offset`.
    pub fn replacement(offset: usize, length: usize, text: impl Into<String>) -> Self {
        Self {
            length,
            ..Self::insertion(offset, text)
        }
    }

    /// The caret offset after the host commits this command.
    ///
    /// Falls back to end-of-inserted-text when no explicit caret is pinned.
    pub fn caret_after(&self) -> usize {
        let end_of_text = self.offset + self.text.chars().count();
        if self.shifts_caret {
            end_of_text
        } else {
            self.caret.unwrap_or(end_of_text)
        }
    }

    /// The inserted character, if the command inserts exactly one.
    pub fn single_char(&self) -> Option<char> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}
