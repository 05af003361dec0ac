#![warn(missing_docs)]
//! Autoedit Core - Headless Typing-Assist Kernel
//!
//! # Overview
//!
//! `autoedit-core` is the algorithmic core of a template-editing assist engine:
//! a keystroke-time state machine that auto-closes brackets and quotes. It is
//! headless - it never touches an editor widget - and stateless between calls,
//! assuming the host serializes input events and owns the document.
//!
//! # How it works
//!
//! The host intercepts each single-character insertion, wraps it in an
//! [`EditCommand`], and passes it together with the current document to an
//! [`AutoEditStrategy`] *before* the edit is committed. The strategy may
//! rewrite the command - append a closing character, or suppress the typed one
//! and shift the caret past a closer that is already there - and the host then
//! applies whatever the command says.
//!
//! Decisions are line-local: an opening/closing tally for brackets, a parity
//! count for quotes, both bounded by the current line's length. No document
//! reference is retained beyond the call.
//!
//! # Quick Start
//!
//! ```rust
//! use autoedit_core::{AutoCloseStrategy, AutoEditStrategy, Document, EditCommand};
//!
//! let mut doc = Document::from_text("let x = f");
//! let strategy = AutoCloseStrategy::default();
//!
//! // User types '(' at the end of the line.
//! let mut command = EditCommand::insertion(9, "(");
//! strategy.customize_command(&doc, &mut command);
//!
//! assert_eq!(command.text, "()");
//! let caret = doc.apply_command(&command);
//! assert_eq!(doc.get_text(), "let x = f()");
//! assert_eq!(caret, 10); // caret sits between the pair
//! ```
//!
//! # Module Description
//!
//! - [`document`] - rope-backed [`Document`] and the [`TextBuffer`] read seam
//! - [`command`] - the [`EditCommand`] value strategies rewrite in place
//! - [`auto_close`] - the [`AutoCloseStrategy`] decision logic
//! - [`intervals`] - style interval primitives shared with highlighting crates

pub mod auto_close;
pub mod command;
pub mod document;
pub mod intervals;

pub use auto_close::{AutoCloseStrategy, AutoEditStrategy};
pub use autoedit_lang::{BracketPair, PairTable};
pub use command::EditCommand;
pub use document::{Document, DocumentError, TextBuffer};
pub use intervals::{Interval, StyleId};
