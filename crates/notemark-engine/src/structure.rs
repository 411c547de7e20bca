//! Block-level structure: headings, fenced code, front matter and multi-line
//! HTML comments.
//!
//! Each step reads the block text and its neighbours and may replace the
//! state computed so far. The steps run in a fixed order (see
//! [`crate::highlighter::Highlighter::highlight_block`]); a later step wins.

use std::borrow::Cow;

use log::debug;

use crate::code::Scanner;
use crate::format::{Format, FormatKey, HighlightSpan, SpanSink};
use crate::lexemes::LexemeProvider;
use crate::state::{BlockState, HeadingLevel};

/// Read-only view of the blocks around the one being highlighted.
pub trait Neighbors {
    /// Stored state of the previous block, `NoState` for the first block.
    fn previous_state(&self) -> BlockState;

    /// Text of the previous block, empty for the first block.
    fn previous_text(&self) -> Cow<'_, str>;

    /// Text of the next block, empty for the last block.
    fn next_text(&self) -> Cow<'_, str>;

    fn is_first_block(&self) -> bool;

    fn first_block_text(&self) -> Cow<'_, str>;
}

/// Neighbour context given by value, for hosts that keep their blocks in a
/// plain list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adjacent<'a> {
    /// State and text of the previous block; `None` for the first block.
    pub previous: Option<(BlockState, &'a str)>,
    pub next: Option<&'a str>,
    /// Text of the document's first block. Ignored when `previous` is `None`.
    pub first: &'a str,
}

impl Neighbors for Adjacent<'_> {
    fn previous_state(&self) -> BlockState {
        self.previous.map(|(state, _)| state).unwrap_or_default()
    }

    fn previous_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.previous.map(|(_, text)| text).unwrap_or(""))
    }

    fn next_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.next.unwrap_or(""))
    }

    fn is_first_block(&self) -> bool {
        self.previous.is_none()
    }

    fn first_block_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.first)
    }
}

/// A change the host must make to another block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborUpdate {
    /// Store `state` on the previous block and queue it for highlighting.
    RestylePrevious(BlockState),
}

/// State of one block while it is being highlighted.
pub(crate) struct BlockPass<'a> {
    pub text: &'a str,
    pub neighbors: &'a dyn Neighbors,
    pub state: BlockState,
    pub sink: SpanSink,
    pub updates: Vec<NeighborUpdate>,
}

impl<'a> BlockPass<'a> {
    pub fn new(text: &'a str, neighbors: &'a dyn Neighbors) -> Self {
        Self {
            text,
            neighbors,
            state: BlockState::NoState,
            sink: SpanSink::new(text.len()),
            updates: Vec::new(),
        }
    }

    pub fn finish(self) -> (Vec<HighlightSpan>, BlockState, Vec<NeighborUpdate>) {
        (self.sink.into_spans(), self.state, self.updates)
    }
}

fn only_char(text: &str, c: char) -> bool {
    !text.is_empty() && text.chars().all(|x| x == c)
}

/// Level of an ATX heading: one or more `#` followed by a space. Runs longer
/// than six still count as level six.
pub fn atx_level(text: &str) -> Option<HeadingLevel> {
    let hashes = text.chars().take_while(|c| *c == '#').count();
    (hashes > 0 && text[hashes..].starts_with(' ')).then(|| HeadingLevel::from_count(hashes))
}

pub(crate) fn headline(pass: &mut BlockPass<'_>) {
    if let Some(level) = atx_level(pass.text) {
        let key = FormatKey::Heading(level);
        pass.sink.paint_all(Format::masked_as(key));
        pass.sink.paint_all(key);
        pass.state = BlockState::Heading(level);
        return;
    }

    // setext underline completing the block above
    for (marker, count) in [('=', 1), ('-', 2)] {
        if !only_char(pass.text, marker) {
            continue;
        }
        let level = HeadingLevel::from_count(count);
        let previous = pass.neighbors.previous_state();
        let joins = matches!(previous, BlockState::NoState)
            || previous == BlockState::Heading(level);
        if joins && !pass.neighbors.previous_text().is_empty() {
            pass.sink
                .paint_all(Format::masked_as(FormatKey::Heading(level)));
            pass.state = BlockState::HeadlineEnd;
            pass.updates
                .push(NeighborUpdate::RestylePrevious(BlockState::Heading(level)));
            debug!("setext underline promotes previous block to H{}", level.get());
        }
        return;
    }

    // setext title, decided by the underline below it
    let next = pass.neighbors.next_text();
    for (marker, count) in [('=', 1), ('-', 2)] {
        if only_char(&next, marker) {
            let level = HeadingLevel::from_count(count);
            pass.sink.paint_all(FormatKey::Heading(level));
            pass.state = BlockState::Heading(level);
        }
    }
}

pub(crate) fn comment_block(pass: &mut BlockPass<'_>) {
    const OPEN: &str = "<!--";
    const CLOSE: &str = "-->";

    let trimmed = pass.text.trim();
    // one-line comments are left to the inline rule
    if trimmed.starts_with(OPEN) && trimmed.contains(CLOSE) {
        return;
    }

    let continues = pass.neighbors.previous_state() == BlockState::Comment;
    if trimmed.starts_with(OPEN) || (!trimmed.ends_with(CLOSE) && continues) {
        pass.state = BlockState::Comment;
        pass.sink.paint_all(FormatKey::Comment);
    } else if trimmed.ends_with(CLOSE) {
        pass.sink.paint_all(FormatKey::Comment);
    }
}

pub(crate) fn code_block(pass: &mut BlockPass<'_>, lexemes: &dyn LexemeProvider) {
    const FENCE: &str = "```";

    let previous = pass.neighbors.previous_state();

    if let Some(tag) = pass.text.strip_prefix(FENCE) {
        pass.state = if previous.is_fenced() {
            debug!("fence closes {:?}", previous);
            BlockState::CodeBlockEnd
        } else {
            let opened = lexemes
                .language_for_tag(tag.trim())
                .map(BlockState::code)
                .unwrap_or(BlockState::CodeBlock);
            debug!("fence opens {:?}", opened);
            opened
        };
        pass.sink
            .paint_all(Format::masked_as(FormatKey::CodeBlock));
        return;
    }

    match previous {
        BlockState::Code(code) => {
            let scanner = Scanner::new(code.language, lexemes);
            let next = scanner.scan(pass.text, code, &mut pass.sink);
            pass.state = BlockState::Code(next);
        }
        BlockState::CodeBlock => {
            pass.sink.paint_all(FormatKey::CodeBlock);
            pass.state = BlockState::CodeBlock;
        }
        _ => {}
    }
}

pub(crate) fn frontmatter(pass: &mut BlockPass<'_>) {
    const DELIMITER: &str = "---";

    if pass.neighbors.first_block_text() != DELIMITER {
        return;
    }

    let open = pass.neighbors.previous_state() == BlockState::FrontmatterBlock;
    if pass.text == DELIMITER {
        // only the first block may open front matter
        if !open && !pass.neighbors.is_first_block() {
            return;
        }
        pass.state = if open {
            BlockState::FrontmatterBlockEnd
        } else {
            BlockState::FrontmatterBlock
        };
        pass.sink.paint_all(Format::masked());
    } else if open {
        pass.state = BlockState::FrontmatterBlock;
        pass.sink.paint_all(Format::masked());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_at;
    use crate::lexemes::BuiltinLexemes;
    use crate::state::{CodeState, Language};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pass_with<'a>(text: &'a str, neighbors: &'a Adjacent<'a>) -> BlockPass<'a> {
        BlockPass::new(text, neighbors)
    }

    #[rstest]
    #[case("# A", Some(1))]
    #[case("###### A", Some(6))]
    #[case("####### A", Some(6))]
    #[case("#A", None)]
    #[case("#", None)]
    #[case(" # A", None)]
    #[case("", None)]
    fn atx_levels(#[case] text: &str, #[case] expected: Option<u8>) {
        assert_eq!(atx_level(text).map(HeadingLevel::get), expected);
    }

    #[test]
    fn setext_underline_promotes_previous_block() {
        let neighbors = Adjacent {
            previous: Some((BlockState::NoState, "Title")),
            next: None,
            first: "Title",
        };
        let mut pass = pass_with("===", &neighbors);
        headline(&mut pass);
        assert_eq!(pass.state, BlockState::HeadlineEnd);
        assert_eq!(
            pass.updates,
            vec![NeighborUpdate::RestylePrevious(BlockState::heading(1))]
        );
        let (spans, _, _) = pass.finish();
        assert_eq!(
            format_at(&spans, 0),
            Some(Format::masked_as(FormatKey::Heading(HeadingLevel::from_count(1))))
        );
    }

    #[rstest]
    #[case(BlockState::List, "- item")]
    #[case(BlockState::NoState, "")]
    #[case(BlockState::heading(1), "Title")]
    fn setext_underline_needs_plain_title(#[case] previous: BlockState, #[case] text: &str) {
        let neighbors = Adjacent {
            previous: Some((previous, text)),
            next: None,
            first: text,
        };
        let mut pass = pass_with("---", &neighbors);
        headline(&mut pass);
        assert_eq!(pass.state, BlockState::NoState);
        assert!(pass.updates.is_empty());
    }

    #[test]
    fn setext_title_looks_ahead() {
        let neighbors = Adjacent {
            previous: None,
            next: Some("-----"),
            first: "Title",
        };
        let mut pass = pass_with("Title", &neighbors);
        headline(&mut pass);
        assert_eq!(pass.state, BlockState::heading(2));
    }

    #[rstest]
    #[case("```rust", BlockState::NoState, BlockState::code(Language::Rust))]
    #[case("``` py ", BlockState::NoState, BlockState::code(Language::Python))]
    #[case("```", BlockState::NoState, BlockState::CodeBlock)]
    #[case("```nope", BlockState::NoState, BlockState::CodeBlock)]
    #[case("```", BlockState::CodeBlock, BlockState::CodeBlockEnd)]
    #[case("```", BlockState::code(Language::Go), BlockState::CodeBlockEnd)]
    #[case("```rust", BlockState::code(Language::Go), BlockState::CodeBlockEnd)]
    #[case("```", BlockState::CodeBlockEnd, BlockState::CodeBlock)]
    fn fence_lines(#[case] text: &str, #[case] previous: BlockState, #[case] expected: BlockState) {
        let neighbors = Adjacent {
            previous: Some((previous, "")),
            next: None,
            first: "",
        };
        let mut pass = pass_with(text, &neighbors);
        code_block(&mut pass, BuiltinLexemes::shared());
        assert_eq!(pass.state, expected);
        let (spans, _, _) = pass.finish();
        assert_eq!(format_at(&spans, 0), Some(Format::masked_as(FormatKey::CodeBlock)));
    }

    #[test]
    fn interior_lines_inherit_the_fence() {
        let inside = BlockState::Code(CodeState {
            language: Language::Rust,
            in_comment: true,
        });
        let neighbors = Adjacent {
            previous: Some((inside, "/* open")),
            next: None,
            first: "",
        };
        let mut pass = pass_with("still */ fn", &neighbors);
        code_block(&mut pass, BuiltinLexemes::shared());
        assert_eq!(pass.state, BlockState::code(Language::Rust));

        let neighbors = Adjacent {
            previous: Some((BlockState::CodeBlock, "")),
            next: None,
            first: "",
        };
        let mut pass = pass_with("# not a heading", &neighbors);
        code_block(&mut pass, BuiltinLexemes::shared());
        assert_eq!(pass.state, BlockState::CodeBlock);
    }

    #[rstest]
    #[case("<!-- start", BlockState::NoState, BlockState::Comment)]
    #[case("<!-- whole -->", BlockState::NoState, BlockState::NoState)]
    #[case("middle", BlockState::Comment, BlockState::Comment)]
    #[case("", BlockState::Comment, BlockState::Comment)]
    #[case("end -->", BlockState::Comment, BlockState::NoState)]
    #[case("plain", BlockState::NoState, BlockState::NoState)]
    fn comment_blocks(#[case] text: &str, #[case] previous: BlockState, #[case] expected: BlockState) {
        let neighbors = Adjacent {
            previous: Some((previous, "")),
            next: None,
            first: "",
        };
        let mut pass = pass_with(text, &neighbors);
        comment_block(&mut pass);
        assert_eq!(pass.state, expected);
    }

    #[test]
    fn frontmatter_opens_only_on_first_block() {
        let first = Adjacent {
            previous: None,
            next: Some("title: x"),
            first: "---",
        };
        let mut pass = pass_with("---", &first);
        frontmatter(&mut pass);
        assert_eq!(pass.state, BlockState::FrontmatterBlock);

        let later = Adjacent {
            previous: Some((BlockState::NoState, "text")),
            next: None,
            first: "---",
        };
        let mut pass = pass_with("---", &later);
        frontmatter(&mut pass);
        assert_eq!(pass.state, BlockState::NoState);

        let closing = Adjacent {
            previous: Some((BlockState::FrontmatterBlock, "title: x")),
            next: None,
            first: "---",
        };
        let mut pass = pass_with("---", &closing);
        frontmatter(&mut pass);
        assert_eq!(pass.state, BlockState::FrontmatterBlockEnd);
    }

    #[test]
    fn no_frontmatter_without_leading_delimiter() {
        let neighbors = Adjacent {
            previous: Some((BlockState::FrontmatterBlock, "x")),
            next: None,
            first: "# Title",
        };
        let mut pass = pass_with("title: x", &neighbors);
        frontmatter(&mut pass);
        assert_eq!(pass.state, BlockState::NoState);
    }
}
