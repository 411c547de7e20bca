//! The word-classifying scanner shared by every C-like language.

use log::trace;

use super::line::CodeLine;
use crate::format::{FormatKey, SpanSink};
use crate::lexemes::{Category, LexemeSet};
use crate::state::{CodeState, Language};

/// Result of scanning one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Scanned {
    pub state: CodeState,
    /// Character index where a comment running to the end of the line starts.
    pub trailing_comment: Option<usize>,
}

/// Characters after which a digit starts a number literal.
fn opens_number(c: char) -> bool {
    matches!(c, '[' | '(' | '{' | ' ' | ',' | '=' | '<' | '>')
}

/// Characters that may follow a number literal.
fn closes_number(c: char) -> bool {
    matches!(c, ']' | ')' | '}' | ' ' | ',' | '=' | '>' | '<' | ';')
}

pub(super) struct GenericScanner<'l, 'a> {
    line: &'l CodeLine<'a>,
    language: Language,
    lexemes: &'l LexemeSet,
    sink: &'l mut SpanSink,
}

impl<'l, 'a> GenericScanner<'l, 'a> {
    pub fn new(
        line: &'l CodeLine<'a>,
        language: Language,
        lexemes: &'l LexemeSet,
        sink: &'l mut SpanSink,
    ) -> Self {
        Self {
            line,
            language,
            lexemes,
            sink,
        }
    }

    fn paint(&mut self, start: usize, end: usize, format: FormatKey) {
        let range = self.line.byte_range(start, end);
        self.sink.paint_range(range, format);
    }

    pub fn scan(mut self, state: CodeState) -> Scanned {
        let len = self.line.len();
        let mut state = state;
        if len == 0 {
            return Scanned {
                state,
                trailing_comment: None,
            };
        }

        self.paint(0, len, FormatKey::CodeBlock);

        let mut i = 0;
        if state.in_comment {
            match self.close_block_comment(0, 0) {
                Some(next) => {
                    state.in_comment = false;
                    i = next;
                }
                None => {
                    return Scanned {
                        state,
                        trailing_comment: Some(0),
                    };
                }
            }
        }

        while i < len {
            let Some(c) = self.line.get(i) else { break };

            if c.is_alphabetic() {
                i = if i > 0 && self.line.is_letter(i - 1) {
                    self.line.word_end(i)
                } else {
                    self.classify_word(i)
                };
                continue;
            }

            if c == '/' && self.line.get(i + 1) == Some('/') {
                self.paint(i, len, FormatKey::CodeComment);
                return Scanned {
                    state,
                    trailing_comment: Some(i),
                };
            }

            if let Some((open, _)) = self.language.block_comment()
                && self.line.matches_at(i, open)
            {
                let body = i + open.chars().count();
                match self.close_block_comment(i, body) {
                    Some(next) => i = next,
                    None => {
                        trace!("block comment left open in {:?}", self.language);
                        state.in_comment = true;
                        return Scanned {
                            state,
                            trailing_comment: Some(i),
                        };
                    }
                }
                continue;
            }

            if Some(c) == self.lexemes.line_comment {
                self.paint(i, len, FormatKey::CodeComment);
                return Scanned {
                    state,
                    trailing_comment: Some(i),
                };
            }

            i = match c {
                '0'..='9' => self.number(i),
                '"' | '\'' => self.string(i, c),
                _ => i + 1,
            };
        }

        Scanned {
            state,
            trailing_comment: None,
        }
    }

    /// Paints a block comment from `start`, looking for the close marker from
    /// `search_from`. Returns the index after the close marker, or `None` when
    /// the comment runs past the end of the line.
    fn close_block_comment(&mut self, start: usize, search_from: usize) -> Option<usize> {
        let len = self.line.len();
        let (_, close) = self.language.block_comment().unwrap_or(("/*", "*/"));
        match self.line.find(search_from, close) {
            Some(at) => {
                let next = at + close.chars().count();
                self.paint(start, next, FormatKey::CodeComment);
                Some(next)
            }
            None => {
                self.paint(start, len, FormatKey::CodeComment);
                None
            }
        }
    }

    /// Scans a number starting at digit `i` and returns where scanning resumes.
    ///
    /// Only a digit run in operand position (after a delimiter and before
    /// another) is painted, so `var1` stays plain.
    fn number(&mut self, i: usize) -> usize {
        let len = self.line.len();
        let start = i;
        let after_delimiter = i == 0 || self.line.get(i - 1).is_some_and(opens_number);

        if i + 1 >= len {
            if after_delimiter {
                self.paint(i, i + 1, FormatKey::CodeNumLiteral);
            }
            return i + 1;
        }

        let mut i = i + 1;
        if self.line.get(i) == Some('x') {
            i += 1;
        }
        if !after_delimiter {
            return i;
        }

        while self
            .line
            .get(i)
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            i += 1;
        }

        let before_delimiter = i >= len || self.line.get(i).is_some_and(closes_number);
        if before_delimiter {
            self.paint(start, i, FormatKey::CodeNumLiteral);
        }
        i
    }

    /// Scans a string opened by `quote` at `i` and returns the index after it.
    ///
    /// A backslash paints everything up to the next space (or, without one,
    /// the next quote) as an escape. This is a heuristic rather than an escape
    /// grammar; `"\"x\""` is not tokenized exactly.
    fn string(&mut self, i: usize, quote: char) -> usize {
        let len = self.line.len();
        self.paint(i, i + 1, FormatKey::CodeString);
        let mut i = i + 1;

        while i < len {
            let c = self.line.get(i);
            if c == Some(quote) && self.line.get(i - 1) != Some('\\') {
                self.paint(i, i + 1, FormatKey::CodeString);
                return i + 1;
            }
            if c == Some('\\') {
                let stop = self
                    .line
                    .find_char(i, ' ')
                    .or_else(|| self.line.find_char(i, quote))
                    .unwrap_or(len);
                self.paint(i, stop, FormatKey::CodeNumLiteral);
                i = stop;
            }
            self.paint(i, i + 1, FormatKey::CodeString);
            i += 1;
        }
        i
    }

    /// Classifies the word starting at `i` and returns the index after it.
    fn classify_word(&mut self, i: usize) -> usize {
        let Some(first) = self.line.get(i) else {
            return i + 1;
        };
        let lexemes = self.lexemes;

        for category in Category::PRIORITY {
            let matched = lexemes
                .bucket(category)
                .candidates(first)
                .iter()
                .find_map(|word| {
                    let count = word.chars().count();
                    (self.line.matches_at(i, word) && !self.line.is_letter(i + count))
                        .then_some(count)
                });

            if let Some(count) = matched {
                let start = if category == Category::Other && self.language.paints_directive_prefix()
                {
                    i.saturating_sub(1)
                } else {
                    i
                };
                self.paint(start, i + count, category.format());
                return i + count;
            }
        }

        self.line.word_end(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Format, HighlightSpan, format_at};
    use crate::lexemes::{BuiltinLexemes, LexemeProvider};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scan(text: &str, state: CodeState) -> (Vec<HighlightSpan>, Scanned) {
        let line = CodeLine::new(text);
        let mut sink = SpanSink::new(text.len());
        let lexemes = BuiltinLexemes::shared().lexemes(state.language);
        let scanned = GenericScanner::new(&line, state.language, lexemes, &mut sink).scan(state);
        (sink.into_spans(), scanned)
    }

    fn visible(spans: &[HighlightSpan], offset: usize) -> Option<FormatKey> {
        format_at(spans, offset).and_then(|format| format.key())
    }

    #[rstest]
    #[case("x = 1;", 4, Some(FormatKey::CodeNumLiteral))]
    #[case("f(42)", 2, Some(FormatKey::CodeNumLiteral))]
    #[case("[1.5]", 1, Some(FormatKey::CodeNumLiteral))]
    #[case("7", 0, Some(FormatKey::CodeNumLiteral))]
    #[case("var1", 3, Some(FormatKey::CodeBlock))]
    #[case("a+1;", 2, Some(FormatKey::CodeBlock))]
    #[case("x = 1a", 4, Some(FormatKey::CodeBlock))]
    fn number_boundaries(
        #[case] text: &str,
        #[case] offset: usize,
        #[case] expected: Option<FormatKey>,
    ) {
        let (spans, _) = scan(text, CodeState::new(Language::Js));
        assert_eq!(visible(&spans, offset), expected);
    }

    #[test]
    fn escape_runs_to_next_space() {
        let text = r#"s = "a\ b";"#;
        let (spans, _) = scan(text, CodeState::new(Language::Python));
        assert_eq!(visible(&spans, 4), Some(FormatKey::CodeString));
        assert_eq!(visible(&spans, 5), Some(FormatKey::CodeString));
        assert_eq!(visible(&spans, 6), Some(FormatKey::CodeNumLiteral));
        assert_eq!(visible(&spans, 7), Some(FormatKey::CodeString));
        assert_eq!(visible(&spans, 8), Some(FormatKey::CodeString));
        // closing quote is part of the string, the semicolon is not
        assert_eq!(visible(&spans, 9), Some(FormatKey::CodeString));
        assert_eq!(visible(&spans, 10), Some(FormatKey::CodeBlock));
    }

    #[test]
    fn unterminated_string_runs_to_end_of_line() {
        let text = "x = 'abc";
        let (spans, scanned) = scan(text, CodeState::new(Language::Js));
        assert_eq!(visible(&spans, 7), Some(FormatKey::CodeString));
        assert!(!scanned.state.in_comment);
    }

    #[test]
    fn classifies_words_by_priority() {
        let (spans, _) = scan("let mut v: Vec<u8> = vec![];", CodeState::new(Language::Rust));
        assert_eq!(visible(&spans, 0), Some(FormatKey::CodeKeyword));
        assert_eq!(visible(&spans, 4), Some(FormatKey::CodeKeyword));
        assert_eq!(visible(&spans, 8), Some(FormatKey::CodeBlock));
        assert_eq!(visible(&spans, 11), Some(FormatKey::CodeType));
        assert_eq!(visible(&spans, 15), Some(FormatKey::CodeType));
        assert_eq!(visible(&spans, 21), Some(FormatKey::CodeOther));
    }

    #[test]
    fn unknown_words_are_skipped_whole() {
        // `iffy` starts with the keyword `if` but is not that keyword
        let (spans, _) = scan("iffy if", CodeState::new(Language::Js));
        assert_eq!(visible(&spans, 0), Some(FormatKey::CodeBlock));
        assert_eq!(visible(&spans, 5), Some(FormatKey::CodeKeyword));
    }

    #[test]
    fn cpp_directives_include_the_hash() {
        let (spans, _) = scan("#include <vector>", CodeState::new(Language::Cpp));
        assert_eq!(visible(&spans, 0), Some(FormatKey::CodeOther));
        assert_eq!(visible(&spans, 1), Some(FormatKey::CodeOther));

        let (spans, _) = scan("#include <vector>", CodeState::new(Language::C));
        assert_eq!(visible(&spans, 0), Some(FormatKey::CodeBlock));
        assert_eq!(visible(&spans, 1), Some(FormatKey::CodeOther));
    }

    #[test]
    fn line_comments() {
        let (spans, scanned) = scan("x = 1 // one", CodeState::new(Language::Go));
        assert_eq!(visible(&spans, 6), Some(FormatKey::CodeComment));
        assert_eq!(visible(&spans, 11), Some(FormatKey::CodeComment));
        assert_eq!(scanned.trailing_comment, Some(6));

        let (spans, scanned) = scan("echo hi # greet", CodeState::new(Language::Bash));
        assert_eq!(visible(&spans, 8), Some(FormatKey::CodeComment));
        assert_eq!(scanned.trailing_comment, Some(8));
        assert!(!scanned.state.in_comment);
    }

    #[test]
    fn block_comment_opens_and_closes() {
        let (spans, scanned) = scan("int a; /* start", CodeState::new(Language::Cpp));
        assert_eq!(visible(&spans, 7), Some(FormatKey::CodeComment));
        assert_eq!(visible(&spans, 14), Some(FormatKey::CodeComment));
        assert!(scanned.state.in_comment);

        let (spans, scanned) = scan("end */ int b;", scanned.state);
        assert_eq!(visible(&spans, 0), Some(FormatKey::CodeComment));
        assert_eq!(visible(&spans, 5), Some(FormatKey::CodeComment));
        assert_eq!(visible(&spans, 7), Some(FormatKey::CodeType));
        assert_eq!(scanned.state, CodeState::new(Language::Cpp));
    }

    #[test]
    fn comment_state_survives_lines_without_close_marker() {
        let inside = CodeState {
            language: Language::Java,
            in_comment: true,
        };
        let (spans, scanned) = scan("still commenting", inside);
        assert_eq!(scanned.state, inside);
        assert_eq!(spans.last().map(|s| s.format), Some(Format::Key(FormatKey::CodeComment)));

        // empty lines keep the flag too
        let (spans, scanned) = scan("", inside);
        assert!(spans.is_empty());
        assert_eq!(scanned.state, inside);
    }

    #[test]
    fn inline_block_comment_is_closed_on_the_same_line() {
        let (spans, scanned) = scan("a /* b */ return", CodeState::new(Language::Js));
        assert_eq!(visible(&spans, 2), Some(FormatKey::CodeComment));
        assert_eq!(visible(&spans, 8), Some(FormatKey::CodeComment));
        assert_eq!(visible(&spans, 10), Some(FormatKey::CodeKeyword));
        assert!(!scanned.state.in_comment);
    }

    #[test]
    fn python_has_no_block_comments() {
        let (_, scanned) = scan("x = a /* b", CodeState::new(Language::Python));
        assert!(!scanned.state.in_comment);
    }
}
