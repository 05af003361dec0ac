//! `autoedit-highlight-simple` - lightweight highlighting for directive template languages.
//!
//! This crate is intended for small templating formats (Velocity-style headers and
//! code templates) where full parsing is unnecessary. Directive words are delimited
//! with the [`WordDetector`] predicates from `autoedit-lang`; everything else is
//! matched with per-line regex rules.

use autoedit_core::{Document, Interval, StyleId};
use autoedit_lang::{DirectiveDetector, WordDetector};
use regex::Regex;

/// A word-based highlighting rule.
///
/// On a character for which the detector's `is_word_start` holds, the scanner
/// greedily consumes `is_word_part` characters and emits one interval for the
/// whole word.
#[derive(Debug, Clone)]
pub struct DirectiveRule {
    detector: DirectiveDetector,
    style_id: StyleId,
}

impl DirectiveRule {
    pub fn new(detector: DirectiveDetector, style_id: StyleId) -> Self {
        Self { detector, style_id }
    }

    pub fn detector(&self) -> &DirectiveDetector {
        &self.detector
    }

    pub fn style_id(&self) -> StyleId {
        self.style_id
    }
}

/// A single regex highlighting rule.
#[derive(Debug, Clone)]
pub struct RegexRule {
    regex: Regex,
    style_id: StyleId,
    capture_group: Option<usize>,
}

impl RegexRule {
    pub fn new(pattern: &str, style_id: StyleId) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            style_id,
            capture_group: None,
        })
    }

    /// Highlight only a capture group of each match.
    pub fn with_capture_group(mut self, group: usize) -> Self {
        self.capture_group = Some(group);
        self
    }

    pub fn style_id(&self) -> StyleId {
        self.style_id
    }
}

/// A simple line-based highlighter for directive template languages.
///
/// Designed for small formats. It is *not* a template parser: rules never see
/// more than one line at a time.
#[derive(Debug, Clone)]
pub struct TemplateHighlighter {
    directive_rules: Vec<DirectiveRule>,
    regex_rules: Vec<RegexRule>,
}

impl TemplateHighlighter {
    pub fn new(directive_rules: Vec<DirectiveRule>, regex_rules: Vec<RegexRule>) -> Self {
        Self {
            directive_rules,
            regex_rules,
        }
    }

    pub fn directive_rules(&self) -> &[DirectiveRule] {
        &self.directive_rules
    }

    pub fn regex_rules(&self) -> &[RegexRule] {
        &self.regex_rules
    }

    /// Run all rules over the whole document and return style intervals (char offsets).
    pub fn highlight(&self, document: &Document) -> Vec<Interval> {
        let mut intervals = Vec::new();
        let line_count = document.line_count();

        for line in 0..line_count {
            let Some(line_text) = document.get_line_text(line) else {
                continue;
            };
            let line_start = document.line_to_char(line).unwrap_or(0);

            for rule in &self.directive_rules {
                scan_directive_words(
                    &line_text,
                    line_start,
                    &rule.detector,
                    rule.style_id,
                    &mut intervals,
                );
            }

            for rule in &self.regex_rules {
                if let Some(group) = rule.capture_group {
                    for caps in rule.regex.captures_iter(&line_text) {
                        let Some(m) = caps.get(group) else {
                            continue;
                        };
                        if let Some(interval) = interval_from_match(
                            line_start,
                            &line_text,
                            m.start(),
                            m.end(),
                            rule.style_id,
                        ) {
                            intervals.push(interval);
                        }
                    }
                } else {
                    for m in rule.regex.find_iter(&line_text) {
                        if let Some(interval) = interval_from_match(
                            line_start,
                            &line_text,
                            m.start(),
                            m.end(),
                            rule.style_id,
                        ) {
                            intervals.push(interval);
                        }
                    }
                }
            }
        }

        intervals
    }

    /// A small default Velocity-style grammar (directives, references,
    /// comments, strings).
    pub fn velocity_default(styles: VelocityStyles) -> Result<Self, regex::Error> {
        Ok(Self::new(
            vec![DirectiveRule::new(
                DirectiveDetector::default(),
                styles.directive,
            )],
            vec![
                // Line comment: ##...
                RegexRule::new(r"##.*$", styles.comment)?,
                // Reference: $name, $!name, ${name}, $!{name}
                RegexRule::new(r"\$!?\{?[[:alpha:]][\w-]*\}?", styles.reference)?,
                // Single-line string literals
                RegexRule::new(r#""[^"]*"|'[^']*'"#, styles.string)?,
            ],
        ))
    }
}

/// Scan one line for words delimited by the detector's predicates.
///
/// `line_start` is the char offset of the line's first character; emitted
/// intervals are document-wide char offsets.
fn scan_directive_words(
    line_text: &str,
    line_start: usize,
    detector: &impl WordDetector,
    style_id: StyleId,
    out: &mut Vec<Interval>,
) {
    let mut chars = line_text.chars().enumerate().peekable();

    while let Some((start_col, ch)) = chars.next() {
        if !detector.is_word_start(ch) {
            continue;
        }

        let mut end_col = start_col + 1;
        while let Some(&(_, next)) = chars.peek() {
            if !detector.is_word_part(next) {
                break;
            }
            chars.next();
            end_col += 1;
        }

        out.push(Interval::new(
            line_start + start_col,
            line_start + end_col,
            style_id,
        ));
    }
}

/// Default `StyleId` constants for [`TemplateHighlighter`]-based grammars.
///
/// These are only identifiers. The host's theme layer is expected to map them
/// to actual colors.
pub const SIMPLE_STYLE_DIRECTIVE: StyleId = 0x0200_0001;
pub const SIMPLE_STYLE_REFERENCE: StyleId = 0x0200_0002;
pub const SIMPLE_STYLE_COMMENT: StyleId = 0x0200_0003;
pub const SIMPLE_STYLE_STRING: StyleId = 0x0200_0004;

/// Style ids for the default Velocity-style grammar.
#[derive(Debug, Clone, Copy)]
pub struct VelocityStyles {
    pub directive: StyleId,
    pub reference: StyleId,
    pub comment: StyleId,
    pub string: StyleId,
}

impl Default for VelocityStyles {
    fn default() -> Self {
        Self {
            directive: SIMPLE_STYLE_DIRECTIVE,
            reference: SIMPLE_STYLE_REFERENCE,
            comment: SIMPLE_STYLE_COMMENT,
            string: SIMPLE_STYLE_STRING,
        }
    }
}

fn interval_from_match(
    line_start_offset: usize,
    line_text: &str,
    match_start_byte: usize,
    match_end_byte: usize,
    style_id: StyleId,
) -> Option<Interval> {
    if match_start_byte >= match_end_byte || match_end_byte > line_text.len() {
        return None;
    }

    let start_col = line_text[..match_start_byte].chars().count();
    let end_col = line_text[..match_end_byte].chars().count();
    if start_col >= end_col {
        return None;
    }

    Some(Interval::new(
        line_start_offset + start_col,
        line_start_offset + end_col,
        style_id,
    ))
}
