#![warn(missing_docs)]
//! `autoedit-lang` - data-driven language configuration helpers for `autoedit-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any document or
//! highlighting systems. It provides small structs that hosts can use to configure
//! typing-assist features in a language-aware way:
//!
//! - [`PairTable`] - which bracket pairs and quote characters auto-close
//! - [`WordDetector`] / [`DirectiveDetector`] - character classification for directive words

mod pairs;
mod word;

pub use pairs::{BracketPair, PairTable};
pub use word::{DirectiveDetector, WordDetector};
