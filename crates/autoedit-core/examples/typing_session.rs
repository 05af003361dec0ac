//! Typing session example
//!
//! Demonstrates how a host drives [`AutoCloseStrategy`] keystroke by keystroke.

use autoedit_core::{AutoCloseStrategy, AutoEditStrategy, Document, EditCommand};

fn main() {
    let strategy = AutoCloseStrategy::default();
    let mut doc = Document::from_text("#macro(arg");
    let mut caret = doc.get_text().chars().count();

    println!("=== Auto-close typing session ===\n");
    println!("start:  {:?} (caret {})", doc.get_text(), caret);

    for typed in ['(', '"', 'x', '"', ')'] {
        let mut command = EditCommand::insertion(caret, typed.to_string());
        strategy.customize_command(&doc, &mut command);

        let decision = match command.text.as_str() {
            "" => "skip over existing".to_string(),
            t if t.chars().count() == 2 => format!("insert pair {t:?}"),
            t => format!("insert {t:?}"),
        };

        caret = doc.apply_command(&command);
        println!("typed {typed:?}: {decision:<24} -> {:?} (caret {})", doc.get_text(), caret);
    }
}
