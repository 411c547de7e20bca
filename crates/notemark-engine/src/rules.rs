//! Declarative regex rules for inline markdown.
//!
//! Rules come in two ordered lists. The "pre" list runs before headings are
//! detected and only holds patterns anchored to the start of the line (list
//! markers, block quotes, rulers). The "post" list runs afterwards and covers
//! emphasis, links, images, inline code and the rest. Later rules paint over
//! earlier ones, so bold lands on top of italic.
//!
//! A rule with a capture group first paints its whole match masked and then
//! the group in the rule's format. Hosts rely on that order to dim the
//! markdown punctuation while keeping the content legible.

use std::sync::OnceLock;

use log::trace;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::format::{Format, FormatKey, SpanSink};
use crate::state::{BlockState, HeadingLevel};

/// Options that change which rules are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightingOptions {
    /// Paint the whole quoted line instead of only the `>` markers.
    pub fully_highlighted_block_quote: bool,
}

#[derive(Debug, Clone)]
pub struct HighlightRule {
    pub pattern: Regex,
    pub format: FormatKey,
    /// Group painted in `format`; 0 paints the whole match.
    pub capture_group: usize,
    /// Group painted masked before the capture group is overlaid.
    pub masked_group: usize,
    /// Block state taken on by any block the rule matches.
    pub block_state: Option<BlockState>,
    /// Skip the rule once an earlier step has set a block state.
    pub disable_if_state_is_set: bool,
}

impl HighlightRule {
    fn new(pattern: &str, format: FormatKey) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid highlighting rule regex"),
            format,
            capture_group: 0,
            masked_group: 0,
            block_state: None,
            disable_if_state_is_set: false,
        }
    }

    fn capture(mut self, group: usize) -> Self {
        self.capture_group = group;
        self
    }

    fn sets_block_state(mut self, state: BlockState) -> Self {
        self.block_state = Some(state);
        self
    }

    fn unless_state_set(mut self) -> Self {
        self.disable_if_state_is_set = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Pre,
    Post,
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    pub pre: Vec<HighlightRule>,
    pub post: Vec<HighlightRule>,
}

impl RuleSet {
    pub fn build(options: HighlightingOptions) -> Self {
        Self {
            pre: pre_rules(options),
            post: post_rules(),
        }
    }

    /// Compiled rules shared by every highlighter with the same options.
    pub fn shared(options: HighlightingOptions) -> &'static RuleSet {
        static PLAIN: OnceLock<RuleSet> = OnceLock::new();
        static FULL_QUOTE: OnceLock<RuleSet> = OnceLock::new();

        let cell = if options.fully_highlighted_block_quote {
            &FULL_QUOTE
        } else {
            &PLAIN
        };
        cell.get_or_init(|| RuleSet::build(options))
    }

    pub fn rules(&self, pass: Pass) -> &[HighlightRule] {
        match pass {
            Pass::Pre => &self.pre,
            Pass::Post => &self.post,
        }
    }

    pub fn apply(&self, pass: Pass, text: &str, state: &mut BlockState, sink: &mut SpanSink) {
        apply_rules(self.rules(pass), text, state, sink);
    }
}

fn pre_rules(options: HighlightingOptions) -> Vec<HighlightRule> {
    let block_quote = if options.fully_highlighted_block_quote {
        r"^\s*(>\s*.+)"
    } else {
        r"^\s*(>\s*)+"
    };

    vec![
        // reference link definitions
        HighlightRule::new(r"^\[.+?\]: \w+://.+$", FormatKey::MaskedSyntax),
        HighlightRule::new(r"^\s*[-*+]\s", FormatKey::List).sets_block_state(BlockState::List),
        HighlightRule::new(r"^\s*\d+\.\s", FormatKey::List).sets_block_state(BlockState::List),
        HighlightRule::new(block_quote, FormatKey::BlockQuote),
        HighlightRule::new(r"^([*\-_]\s?){3,}$", FormatKey::HorizontalRuler),
    ]
}

fn post_rules() -> Vec<HighlightRule> {
    vec![
        // a leading space after `*` would be a list marker, not italic
        HighlightRule::new(
            r"(?:^|[^*\x08])(?:\*([^* ][^*]*?)\*)(?:[^*\x08]|$)",
            FormatKey::Italic,
        )
        .capture(1),
        HighlightRule::new(r"\b_([^_]+)_\b", FormatKey::Italic).capture(1),
        HighlightRule::new(r"\B\*{2}(.+?)\*{2}\B", FormatKey::Bold).capture(1),
        HighlightRule::new(r"\b__(.+?)__\b", FormatKey::Bold).capture(1),
        // strikethrough
        HighlightRule::new(r"~~(.+?)~~", FormatKey::MaskedSyntax).capture(1),
        HighlightRule::new(r"\b\w+?://[^\s>]+", FormatKey::Link),
        HighlightRule::new(r"<(\w+?://[^\s]+)>", FormatKey::Link).capture(1),
        HighlightRule::new(r"<([^\s`][^`]*?\.[^`]*?[^\s`])>", FormatKey::Link).capture(1),
        HighlightRule::new(r"\[([^\[\]]+)\]\((\S+|.+?)\)\B", FormatKey::Link).capture(1),
        HighlightRule::new(r"\[\]\((.+?)\)", FormatKey::Link).capture(1),
        HighlightRule::new(r"<(.+?@.+?)>", FormatKey::Link).capture(1),
        HighlightRule::new(r"\[(.+?)\]\[.+?\]", FormatKey::Link).capture(1),
        HighlightRule::new(r"!\[(.+?)\]\(.+?\)", FormatKey::Image).capture(1),
        HighlightRule::new(r"!\[\]\((.+?)\)", FormatKey::Image).capture(1),
        HighlightRule::new(r"\[!\[(.+?)\]\(.+?\)\]\(.+?\)", FormatKey::Link).capture(1),
        HighlightRule::new(r"\[!\[\]\(.+?\)\]\((.+?)\)", FormatKey::Link).capture(1),
        HighlightRule::new(r"( +)$", FormatKey::TrailingSpace).capture(1),
        HighlightRule::new(r"`(.+?)`", FormatKey::InlineCodeBlock).capture(1),
        // indented code, unless the block is already something else
        HighlightRule::new(r"^((\t)|( {4,})).+$", FormatKey::CodeBlock).unless_state_set(),
        HighlightRule::new(r"<!--(.+?)-->", FormatKey::Comment).capture(1),
        // R Markdown style comment: [label]: # (text)
        HighlightRule::new(r"^\[.+?\]: # \(.+?\)$", FormatKey::Comment),
        HighlightRule::new(r"^\|.+?\|$", FormatKey::Table),
    ]
}

/// Applies `rules` in order to `text`, painting into `sink`.
///
/// `state` is the block state as computed so far. Rules may set it, and
/// inside headings inline styles are resolved against the heading level.
pub fn apply_rules(
    rules: &[HighlightRule],
    text: &str,
    state: &mut BlockState,
    sink: &mut SpanSink,
) {
    for rule in rules {
        if rule.disable_if_state_is_set && *state != BlockState::NoState {
            continue;
        }

        let mut matches = rule.pattern.captures_iter(text).peekable();
        if matches.peek().is_none() {
            continue;
        }
        if let Some(block_state) = rule.block_state {
            trace!("rule {:?} sets block state {:?}", rule.format, block_state);
            *state = block_state;
        }

        for captures in matches {
            let heading = state
                .heading_level()
                .filter(|_| rule.format != FormatKey::InlineCodeBlock);

            match heading {
                Some(level) => paint_in_heading(level, rule, &captures, sink),
                None => {
                    if rule.capture_group > 0
                        && let Some(masked) = captures.get(rule.masked_group)
                    {
                        sink.paint_range(masked.range(), Format::masked_as(rule.format));
                    }
                    if let Some(group) = captures.get(rule.capture_group) {
                        sink.paint_range(group.range(), rule.format);
                    }
                }
            }
        }
    }
}

/// Emphasis and links inside a heading keep the heading's look; anything else
/// is left to the heading format.
fn paint_in_heading(
    level: HeadingLevel,
    rule: &HighlightRule,
    captures: &Captures<'_>,
    sink: &mut SpanSink,
) {
    let paints = match rule.format {
        FormatKey::Italic | FormatKey::Bold => true,
        FormatKey::Link => rule.capture_group == 1,
        _ => false,
    };
    if !paints {
        return;
    }
    if let Some(group) = captures.get(rule.capture_group) {
        sink.paint_range(
            group.range(),
            Format::InHeading {
                level,
                style: rule.format,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{HighlightSpan, format_at};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run(pass: Pass, text: &str, state: BlockState) -> (Vec<HighlightSpan>, BlockState) {
        let mut state = state;
        let mut sink = SpanSink::new(text.len());
        RuleSet::shared(HighlightingOptions::default()).apply(pass, text, &mut state, &mut sink);
        (sink.into_spans(), state)
    }

    #[test]
    fn every_rule_compiles() {
        for fully in [false, true] {
            let rules = RuleSet::build(HighlightingOptions {
                fully_highlighted_block_quote: fully,
            });
            assert_eq!(rules.pre.len(), 5);
            assert_eq!(rules.post.len(), 22);
        }
    }

    #[test]
    fn shared_sets_follow_options() {
        let plain = RuleSet::shared(HighlightingOptions::default());
        let full = RuleSet::shared(HighlightingOptions {
            fully_highlighted_block_quote: true,
        });
        assert!(std::ptr::eq(plain, RuleSet::shared(HighlightingOptions::default())));
        assert_ne!(plain.pre[3].pattern.as_str(), full.pre[3].pattern.as_str());
    }

    #[rstest]
    #[case("- item")]
    #[case("  * item")]
    #[case("+ item")]
    #[case("12. item")]
    fn list_markers_set_block_state(#[case] text: &str) {
        let (spans, state) = run(Pass::Pre, text, BlockState::NoState);
        assert_eq!(state, BlockState::List);
        assert_eq!(spans[0].format, Format::Key(FormatKey::List));
    }

    #[test]
    fn bold_masks_markers_then_overlays_content() {
        let (spans, _) = run(Pass::Post, "**bold**", BlockState::NoState);
        assert_eq!(
            spans,
            vec![
                HighlightSpan {
                    offset: 0,
                    length: 8,
                    format: Format::masked_as(FormatKey::Bold),
                },
                HighlightSpan {
                    offset: 2,
                    length: 4,
                    format: FormatKey::Bold.into(),
                },
            ]
        );
    }

    #[test]
    fn bold_paints_over_italic() {
        let text = "*a* and **b**";
        let (spans, _) = run(Pass::Post, text, BlockState::NoState);
        assert_eq!(format_at(&spans, 1), Some(FormatKey::Italic.into()));
        assert_eq!(format_at(&spans, 10), Some(FormatKey::Bold.into()));
        assert_eq!(format_at(&spans, 8), Some(Format::masked_as(FormatKey::Bold)));
    }

    #[test]
    fn list_marker_is_not_italic() {
        let (spans, _) = run(Pass::Post, "* item", BlockState::List);
        assert!(format_at(&spans, 2).is_none());
    }

    #[test]
    fn titled_link_shows_title() {
        let text = "see [docs](https://example.com) now";
        let (spans, _) = run(Pass::Post, text, BlockState::NoState);
        assert_eq!(format_at(&spans, 5), Some(FormatKey::Link.into()));
        assert_eq!(format_at(&spans, 4), Some(Format::masked_as(FormatKey::Link)));
    }

    #[test]
    fn links_in_headings_take_heading_style() {
        let h2 = BlockState::heading(2);
        let (spans, state) = run(Pass::Post, "## [docs](x) *em* `code`", h2);
        assert_eq!(state, h2);
        let level = HeadingLevel::from_count(2);
        assert_eq!(
            format_at(&spans, 4),
            Some(Format::InHeading {
                level,
                style: FormatKey::Link,
            })
        );
        assert_eq!(
            format_at(&spans, 14),
            Some(Format::InHeading {
                level,
                style: FormatKey::Italic,
            })
        );
        // the brackets are not masked inside a heading
        assert_eq!(format_at(&spans, 3), None);
        // inline code keeps its own look and mask
        assert_eq!(format_at(&spans, 18), Some(Format::masked_as(FormatKey::InlineCodeBlock)));
        assert_eq!(format_at(&spans, 20), Some(FormatKey::InlineCodeBlock.into()));
    }

    #[test]
    fn indented_code_needs_a_free_state() {
        let (spans, _) = run(Pass::Post, "    let x = 1;", BlockState::NoState);
        assert_eq!(format_at(&spans, 6), Some(FormatKey::CodeBlock.into()));

        let (spans, _) = run(Pass::Post, "    let x = 1;", BlockState::List);
        assert_eq!(format_at(&spans, 6), None);
    }

    #[rstest]
    #[case("trailing  ", 8, FormatKey::TrailingSpace)]
    #[case("| a | b |", 4, FormatKey::Table)]
    #[case("x <!-- note --> y", 8, FormatKey::Comment)]
    #[case("[todo]: # (later)", 3, FormatKey::Comment)]
    #[case("![alt](img.png)", 3, FormatKey::Image)]
    #[case("go to https://example.com", 10, FormatKey::Link)]
    #[case("~~gone~~", 3, FormatKey::MaskedSyntax)]
    fn post_rule_formats(#[case] text: &str, #[case] offset: usize, #[case] expected: FormatKey) {
        let (spans, _) = run(Pass::Post, text, BlockState::NoState);
        assert_eq!(format_at(&spans, offset), Some(expected.into()));
    }

    #[rstest]
    #[case(false, 4, None)]
    #[case(true, 4, Some(FormatKey::BlockQuote))]
    fn block_quote_option(
        #[case] fully: bool,
        #[case] offset: usize,
        #[case] expected: Option<FormatKey>,
    ) {
        let mut state = BlockState::NoState;
        let text = "> quoted";
        let mut sink = SpanSink::new(text.len());
        RuleSet::shared(HighlightingOptions {
            fully_highlighted_block_quote: fully,
        })
        .apply(Pass::Pre, text, &mut state, &mut sink);
        let spans = sink.into_spans();
        assert_eq!(format_at(&spans, 0), Some(FormatKey::BlockQuote.into()));
        assert_eq!(format_at(&spans, offset), expected.map(Format::Key));
    }
}
