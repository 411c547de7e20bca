//! Tokenizer for the lines of fenced code blocks.
//!
//! Each language maps to a [`Scanner`] variant. Most languages share the
//! word-classifying [`Scanner::Generic`] path; CSS runs a selector and colour
//! pass on top of it and XML/HTML has a scanner of its own.
//!
//! A scan takes the line's incoming [`CodeState`] and returns the outgoing
//! one, which differs only in whether a multi-line comment is still open.

mod css;
mod generic;
mod line;
mod xml;

pub use css::swatch_foreground;
pub use line::CodeLine;

use crate::format::SpanSink;
use crate::lexemes::{LexemeProvider, LexemeSet};
use crate::state::{CodeState, Language};

use generic::GenericScanner;

#[derive(Debug, Clone, Copy)]
pub enum Scanner<'a> {
    Generic {
        language: Language,
        lexemes: &'a LexemeSet,
    },
    Css {
        lexemes: &'a LexemeSet,
    },
    Xml,
}

impl<'a> Scanner<'a> {
    pub fn new<P>(language: Language, provider: &'a P) -> Self
    where
        P: LexemeProvider + ?Sized,
    {
        match language {
            Language::Xml => Scanner::Xml,
            Language::Css => Scanner::Css {
                lexemes: provider.lexemes(language),
            },
            _ => Scanner::Generic {
                language,
                lexemes: provider.lexemes(language),
            },
        }
    }

    /// Paints `text` into `sink` and returns the state the next line inherits.
    pub fn scan(&self, text: &str, state: CodeState, sink: &mut SpanSink) -> CodeState {
        let line = CodeLine::new(text);
        match *self {
            Scanner::Generic { language, lexemes } => {
                GenericScanner::new(&line, language, lexemes, sink)
                    .scan(state)
                    .state
            }
            Scanner::Css { lexemes } => {
                let scanned = GenericScanner::new(&line, Language::Css, lexemes, sink).scan(state);
                let limit = scanned.trailing_comment.unwrap_or(line.len());
                css::scan(&line, limit, sink);
                scanned.state
            }
            Scanner::Xml => {
                xml::scan(&line, sink);
                state.base()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Format, FormatKey, format_at};
    use crate::lexemes::BuiltinLexemes;

    fn scan(text: &str, state: CodeState) -> (Vec<crate::format::HighlightSpan>, CodeState) {
        let mut sink = SpanSink::new(text.len());
        let next = Scanner::new(state.language, BuiltinLexemes::shared()).scan(text, state, &mut sink);
        (sink.into_spans(), next)
    }

    #[test]
    fn picks_dedicated_scanners() {
        let lexemes = BuiltinLexemes::shared();
        assert!(matches!(Scanner::new(Language::Xml, lexemes), Scanner::Xml));
        assert!(matches!(Scanner::new(Language::Css, lexemes), Scanner::Css { .. }));
        assert!(matches!(
            Scanner::new(Language::Go, lexemes),
            Scanner::Generic {
                language: Language::Go,
                ..
            }
        ));
    }

    #[test]
    fn css_runs_generic_then_colour_pass() {
        let text = "a { color: red; } /* .x";
        let (spans, next) = scan(text, CodeState::new(Language::Css));
        assert!(matches!(format_at(&spans, 11), Some(Format::Swatch { .. })));
        // selectors inside the trailing comment are left as comment
        assert_eq!(format_at(&spans, 21), Some(FormatKey::CodeComment.into()));
        assert!(next.in_comment);
    }

    #[test]
    fn css_comment_carries_to_next_line() {
        let (_, next) = scan(".a { /* open", CodeState::new(Language::Css));
        assert!(next.in_comment);
        let (spans, next) = scan("close */ .b {", next);
        assert!(!next.in_comment);
        assert_eq!(format_at(&spans, 9), Some(FormatKey::CodeKeyword.into()));
    }

    #[test]
    fn xml_never_carries_comment_state() {
        let (spans, next) = scan("<p>", CodeState::new(Language::Xml));
        assert_eq!(next, CodeState::new(Language::Xml));
        assert_eq!(format_at(&spans, 1), Some(FormatKey::CodeKeyword.into()));
    }
}
