//! Persisted per-block classification.
//!
//! Every block carries exactly one [`BlockState`] between passes. The state of
//! the previous block is the only context a pass inherits, so anything that
//! spans several blocks (fenced code, block comments inside code, front
//! matter, HTML comments) is encoded here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Heading level, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct HeadingLevel(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("heading level {0} is outside 1..=6")]
pub struct InvalidHeadingLevel(pub u8);

impl HeadingLevel {
    pub const MAX: u8 = 6;

    /// Builds a level from a count of heading markers, clamping to `1..=6`.
    pub fn from_count(count: usize) -> Self {
        Self(count.clamp(1, Self::MAX as usize) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (1..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidHeadingLevel(level))
        }
    }
}

/// Languages the code tokenizer knows how to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Cpp,
    C,
    Js,
    TypeScript,
    Bash,
    Php,
    Qml,
    Python,
    Rust,
    Java,
    CSharp,
    Go,
    V,
    Sql,
    Json,
    Xml,
    Css,
}

impl Language {
    pub const ALL: [Language; 17] = [
        Language::Cpp,
        Language::C,
        Language::Js,
        Language::TypeScript,
        Language::Bash,
        Language::Php,
        Language::Qml,
        Language::Python,
        Language::Rust,
        Language::Java,
        Language::CSharp,
        Language::Go,
        Language::V,
        Language::Sql,
        Language::Json,
        Language::Xml,
        Language::Css,
    ];

    /// Open and close markers of the language's multi-line comment, if any.
    pub fn block_comment(self) -> Option<(&'static str, &'static str)> {
        match self {
            Language::Bash | Language::Python | Language::Json | Language::Xml => None,
            _ => Some(("/*", "*/")),
        }
    }

    /// C++ preprocessor directives are painted together with their leading `#`.
    pub(crate) fn paints_directive_prefix(self) -> bool {
        matches!(self, Language::Cpp)
    }
}

/// State of a block inside a fenced code region with a known language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeState {
    pub language: Language,
    /// The block ends inside an unterminated multi-line comment.
    pub in_comment: bool,
}

impl CodeState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            in_comment: false,
        }
    }

    /// The same language with the comment flag cleared.
    pub fn base(self) -> Self {
        Self::new(self.language)
    }
}

/// The persisted classification of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockState {
    #[default]
    NoState,
    Heading(HeadingLevel),
    /// A setext underline (`===` or `---`) completing the heading above it.
    HeadlineEnd,
    List,
    BlockQuote,
    HorizontalRuler,
    Table,
    /// Inside (or opening) a fence without a recognised language.
    CodeBlock,
    /// The closing fence line.
    CodeBlockEnd,
    /// Inside (or opening) a fence with a recognised language.
    Code(CodeState),
    FrontmatterBlock,
    FrontmatterBlockEnd,
    /// Inside a multi-line `<!-- ... -->` comment.
    Comment,
    MaskedSyntax,
    TrailingSpace,
}

impl BlockState {
    pub fn heading(count: usize) -> Self {
        BlockState::Heading(HeadingLevel::from_count(count))
    }

    pub fn code(language: Language) -> Self {
        BlockState::Code(CodeState::new(language))
    }

    pub fn heading_level(self) -> Option<HeadingLevel> {
        match self {
            BlockState::Heading(level) => Some(level),
            _ => None,
        }
    }

    /// True when a following line belongs to an open fenced code region.
    pub fn is_fenced(self) -> bool {
        matches!(self, BlockState::CodeBlock | BlockState::Code(_))
    }

    pub fn code_state(self) -> Option<CodeState> {
        match self {
            BlockState::Code(code) => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(6, 6)]
    #[case(7, 6)]
    #[case(42, 6)]
    fn heading_level_is_clamped(#[case] count: usize, #[case] expected: u8) {
        assert_eq!(HeadingLevel::from_count(count).get(), expected);
    }

    #[rstest]
    #[case(0, None)]
    #[case(1, Some(1))]
    #[case(6, Some(6))]
    #[case(9, None)]
    fn stored_heading_levels_are_validated(#[case] stored: u8, #[case] expected: Option<u8>) {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error as ValueError, U8Deserializer};

        let deserializer: U8Deserializer<ValueError> = stored.into_deserializer();
        let level = HeadingLevel::deserialize(deserializer).ok().map(HeadingLevel::get);
        assert_eq!(level, expected);
        assert_eq!(HeadingLevel::try_from(stored).ok().map(HeadingLevel::get), expected);
    }

    #[test]
    fn base_clears_comment_flag() {
        let inside = CodeState {
            language: Language::Rust,
            in_comment: true,
        };
        assert_eq!(inside.base(), CodeState::new(Language::Rust));
        assert_eq!(inside.base().language, Language::Rust);
    }

    #[test]
    fn fenced_states() {
        assert!(BlockState::CodeBlock.is_fenced());
        assert!(BlockState::code(Language::Python).is_fenced());
        assert!(!BlockState::CodeBlockEnd.is_fenced());
        assert!(!BlockState::NoState.is_fenced());
        assert!(!BlockState::heading(1).is_fenced());
    }

    #[test]
    fn block_comment_markers() {
        assert_eq!(Language::Rust.block_comment(), Some(("/*", "*/")));
        assert_eq!(Language::Css.block_comment(), Some(("/*", "*/")));
        assert_eq!(Language::Python.block_comment(), None);
        assert_eq!(Language::Bash.block_comment(), None);
    }

    #[test]
    fn default_state_is_no_state() {
        assert_eq!(BlockState::default(), BlockState::NoState);
    }
}
