//! Bracket and quote pair tables.

/// A single bracket pair with distinct opening and closing characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPair {
    /// Opening character (e.g. `(`).
    pub open: char,
    /// Closing character (e.g. `)`).
    pub close: char,
}

impl BracketPair {
    /// Create a new bracket pair.
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }
}

impl From<(char, char)> for BracketPair {
    fn from((open, close): (char, char)) -> Self {
        Self::new(open, close)
    }
}

/// The set of characters a typing-assist strategy treats as pairable.
///
/// Brackets have distinct opening/closing characters and are subject to a
/// nesting tally; quotes are symmetric and only ever tracked by parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable {
    brackets: Vec<BracketPair>,
    quotes: Vec<char>,
}

impl PairTable {
    /// Create a pair table from explicit bracket pairs and quote characters.
    pub fn new<B, Q>(brackets: B, quotes: Q) -> Self
    where
        B: IntoIterator<Item = BracketPair>,
        Q: IntoIterator<Item = char>,
    {
        Self {
            brackets: brackets.into_iter().collect(),
            quotes: quotes.into_iter().collect(),
        }
    }

    /// The configured bracket pairs.
    pub fn brackets(&self) -> &[BracketPair] {
        &self.brackets
    }

    /// The configured quote characters.
    pub fn quotes(&self) -> &[char] {
        &self.quotes
    }

    /// Returns the closing character if `ch` opens a bracket pair.
    pub fn closer_for(&self, ch: char) -> Option<char> {
        self.brackets
            .iter()
            .find(|pair| pair.open == ch)
            .map(|pair| pair.close)
    }

    /// Returns the opening character if `ch` closes a bracket pair.
    pub fn opener_for(&self, ch: char) -> Option<char> {
        self.brackets
            .iter()
            .find(|pair| pair.close == ch)
            .map(|pair| pair.open)
    }

    /// Returns `true` if `ch` is a configured quote character.
    pub fn is_quote(&self, ch: char) -> bool {
        self.quotes.contains(&ch)
    }
}

impl Default for PairTable {
    /// Parentheses, braces, square brackets, double and single quotes.
    fn default() -> Self {
        Self::new(
            [
                BracketPair::new('(', ')'),
                BracketPair::new('{', '}'),
                BracketPair::new('[', ']'),
            ],
            ['"', '\''],
        )
    }
}
