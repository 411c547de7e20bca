//! Single-block highlighting.
//!
//! [`Highlighter::highlight_block`] is a pure function of the block text, its
//! neighbours and the highlighter's configuration. It runs, in order:
//!
//! 1. the pre rules, heading detection and the post rules (non-empty text only),
//! 2. multi-line HTML comments,
//! 3. fenced code blocks, including the language tokenizer,
//! 4. front matter.
//!
//! Each step may overwrite the state set by an earlier one.

use std::fmt;

use log::trace;

use crate::format::HighlightSpan;
use crate::lexemes::{BuiltinLexemes, LexemeProvider};
use crate::rules::{HighlightingOptions, Pass, RuleSet};
use crate::state::BlockState;
use crate::structure::{self, BlockPass, NeighborUpdate, Neighbors};

/// Everything produced for one block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockHighlight {
    pub spans: Vec<HighlightSpan>,
    pub state: BlockState,
    pub neighbor_updates: Vec<NeighborUpdate>,
}

pub struct Highlighter {
    options: HighlightingOptions,
    rules: &'static RuleSet,
    lexemes: Box<dyn LexemeProvider + Send + Sync>,
}

impl Highlighter {
    pub fn new(options: HighlightingOptions) -> Self {
        Self::with_lexemes(options, BuiltinLexemes::shared())
    }

    /// A highlighter that takes its code vocabularies from `lexemes`.
    pub fn with_lexemes<P>(options: HighlightingOptions, lexemes: P) -> Self
    where
        P: LexemeProvider + Send + Sync + 'static,
    {
        Self {
            options,
            rules: RuleSet::shared(options),
            lexemes: Box::new(lexemes),
        }
    }

    pub fn options(&self) -> HighlightingOptions {
        self.options
    }

    /// Swaps the rule set. Already highlighted blocks are not touched; the
    /// caller decides what to re-highlight.
    pub fn set_options(&mut self, options: HighlightingOptions) {
        self.options = options;
        self.rules = RuleSet::shared(options);
    }

    pub fn lexemes(&self) -> &dyn LexemeProvider {
        &*self.lexemes
    }

    pub fn highlight_block(&self, text: &str, neighbors: &dyn Neighbors) -> BlockHighlight {
        let mut pass = BlockPass::new(text, neighbors);

        if !text.is_empty() {
            self.rules
                .apply(Pass::Pre, text, &mut pass.state, &mut pass.sink);
            structure::headline(&mut pass);
            self.rules
                .apply(Pass::Post, text, &mut pass.state, &mut pass.sink);
        }

        structure::comment_block(&mut pass);
        structure::code_block(&mut pass, &*self.lexemes);
        structure::frontmatter(&mut pass);

        let (spans, state, neighbor_updates) = pass.finish();
        trace!("highlighted {:?}: {:?}, {} spans", text, state, spans.len());
        BlockHighlight {
            spans,
            state,
            neighbor_updates,
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(HighlightingOptions::default())
    }
}

impl fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Highlighter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Format, FormatKey, format_at};
    use crate::state::{HeadingLevel, Language};
    use crate::structure::Adjacent;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn alone(text: &str) -> BlockHighlight {
        let neighbors = Adjacent {
            previous: None,
            next: None,
            first: text,
        };
        Highlighter::default().highlight_block(text, &neighbors)
    }

    #[rstest]
    #[case("# One", 1)]
    #[case("## Two", 2)]
    #[case("### Three", 3)]
    #[case("#### Four", 4)]
    #[case("##### Five", 5)]
    #[case("###### Six", 6)]
    #[case("####### Seven", 6)]
    fn atx_headings(#[case] text: &str, #[case] level: u8) {
        let result = alone(text);
        assert_eq!(result.state.heading_level().map(HeadingLevel::get), Some(level));
        assert_eq!(
            format_at(&result.spans, text.len() - 1).and_then(|format| format.key()),
            Some(FormatKey::Heading(HeadingLevel::from_count(level as usize)))
        );
    }

    #[test]
    fn emphasis_inside_heading_follows_heading_size() {
        let result = alone("# A **b**");
        assert_eq!(
            format_at(&result.spans, 6),
            Some(Format::InHeading {
                level: HeadingLevel::from_count(1),
                style: FormatKey::Bold,
            })
        );
    }

    #[test]
    fn empty_block_keeps_no_state() {
        let result = alone("");
        assert_eq!(result.state, BlockState::NoState);
        assert!(result.spans.is_empty());
        assert!(result.neighbor_updates.is_empty());
    }

    #[test]
    fn list_markers_set_list_state() {
        assert_eq!(alone("- item").state, BlockState::List);
        assert_eq!(alone("12. item").state, BlockState::List);
    }

    #[test]
    fn fence_overrides_rule_state() {
        let neighbors = Adjacent {
            previous: Some((BlockState::code(Language::Rust), "```rust")),
            next: Some("```"),
            first: "```rust",
        };
        let result = Highlighter::default().highlight_block("- fn main() {}", &neighbors);
        assert_eq!(result.state, BlockState::code(Language::Rust));
        assert_eq!(
            format_at(&result.spans, 2).and_then(|format| format.key()),
            Some(FormatKey::CodeKeyword)
        );
    }

    #[test]
    fn custom_lexemes_are_used() {
        struct NoTags;
        impl LexemeProvider for NoTags {
            fn language_for_tag(&self, _tag: &str) -> Option<Language> {
                None
            }
            fn lexemes(&self, language: Language) -> &crate::lexemes::LexemeSet {
                BuiltinLexemes::shared().lexemes(language)
            }
        }

        let highlighter = Highlighter::with_lexemes(HighlightingOptions::default(), NoTags);
        let neighbors = Adjacent::default();
        let result = highlighter.highlight_block("```rust", &neighbors);
        assert_eq!(result.state, BlockState::CodeBlock);
    }

    #[test]
    fn options_switch_rule_sets() {
        let mut highlighter = Highlighter::default();
        let neighbors = Adjacent::default();
        let before = highlighter.highlight_block("> quoted", &neighbors);
        highlighter.set_options(HighlightingOptions {
            fully_highlighted_block_quote: true,
        });
        let after = highlighter.highlight_block("> quoted", &neighbors);
        assert_eq!(format_at(&before.spans, 4), None);
        assert_eq!(
            format_at(&after.spans, 4).and_then(|format| format.key()),
            Some(FormatKey::BlockQuote)
        );
    }
}
