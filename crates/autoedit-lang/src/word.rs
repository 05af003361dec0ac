//! Word classification for directive-style template languages.

/// Character classification used by tokenizers to delimit words.
///
/// A scanning loop that owns its own cursor calls [`is_word_start`] to decide
/// whether a word begins at the current character, then greedily consumes
/// characters for which [`is_word_part`] holds.
///
/// [`is_word_start`]: WordDetector::is_word_start
/// [`is_word_part`]: WordDetector::is_word_part
pub trait WordDetector {
    /// Returns `true` if a word may start with `ch`.
    fn is_word_start(&self, ch: char) -> bool;

    /// Returns `true` if `ch` may continue an already-started word.
    fn is_word_part(&self, ch: char) -> bool;
}

/// A directive-aware word detector for Velocity-style template languages.
///
/// Directive words start with a sigil character (`#` by default, as in
/// `#if` / `#foreach` / `#end`) and continue with Unicode letters or digits,
/// `-`, or `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveDetector {
    sigil: char,
}

impl DirectiveDetector {
    /// The default directive sigil.
    pub const DEFAULT_SIGIL: char = '#';

    /// Create a detector with a custom sigil character.
    pub const fn new(sigil: char) -> Self {
        Self { sigil }
    }

    /// The sigil this detector recognizes as a word start.
    pub const fn sigil(&self) -> char {
        self.sigil
    }
}

impl Default for DirectiveDetector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIGIL)
    }
}

impl WordDetector for DirectiveDetector {
    fn is_word_start(&self, ch: char) -> bool {
        ch == self.sigil
    }

    fn is_word_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '-' || ch == '_'
    }
}
