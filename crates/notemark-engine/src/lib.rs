//! Incremental syntax highlighting for markdown notes.
//!
//! The engine works one block (line) at a time. Each pass reads the block's
//! text plus a read-only view of its neighbours and yields a list of
//! [`HighlightSpan`]s and the [`BlockState`] the next block starts from.
//! Fenced code blocks are handed to a per-language [`Scanner`].
//!
//! [`Document`] is a reference host: it owns the text, applies edits and keeps
//! stale blocks in a [`DirtyQueue`] until the next drain.

pub mod code;
pub mod dirty;
pub mod document;
pub mod format;
pub mod highlighter;
pub mod lexemes;
pub mod rules;
pub mod state;
pub mod structure;

// Re-export key types for easier usage
pub use code::Scanner;
pub use dirty::{DirtyQueue, RehighlightTimer};
pub use document::{Block, BlockId, Cmd, Document, DocumentError, Patch};
pub use format::{Format, FormatKey, HighlightSpan, Rgb, SpanSink};
pub use highlighter::{BlockHighlight, Highlighter};
pub use lexemes::{BuiltinLexemes, LexemeProvider, LexemeSet};
pub use rules::HighlightingOptions;
pub use state::{BlockState, CodeState, HeadingLevel, InvalidHeadingLevel, Language};
pub use structure::{Adjacent, NeighborUpdate, Neighbors};
