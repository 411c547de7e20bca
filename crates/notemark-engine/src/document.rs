//! Reference host for the highlighter.
//!
//! A [`Document`] keeps the note in a single `xi_rope::Rope` and one [`Block`]
//! per line. Edits are expressed as [`Cmd`]s, compiled to rope deltas and
//! applied immediately; the blocks they touch are queued in the document's
//! [`DirtyQueue`] and re-highlighted on the next [`Document::tick`] or
//! [`Document::drain`].
//!
//! ```rust
//! use notemark_engine::{BlockState, Cmd, Document};
//!
//! let mut doc = Document::from_text("Title\n");
//! doc.apply(Cmd::InsertText { at: 6, text: "=====".to_string() }).unwrap();
//! doc.settle();
//!
//! assert_eq!(doc.blocks()[0].state, BlockState::heading(1));
//! assert_eq!(doc.blocks()[1].state, BlockState::HeadlineEnd);
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::Range;
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;
use xi_rope::delta::Builder;
use xi_rope::{Delta, Rope, RopeInfo};

use crate::dirty::{DirtyQueue, RehighlightTimer};
use crate::format::HighlightSpan;
use crate::highlighter::{BlockHighlight, Highlighter};
use crate::rules::HighlightingOptions;
use crate::state::BlockState;
use crate::structure::{NeighborUpdate, Neighbors};

/// Upper bound on drain rounds in [`Document::settle`].
const MAX_SETTLE_ROUNDS: usize = 16;

/// Stable identity of a block across edits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct BlockId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    /// State carried into the next block's pass.
    pub state: BlockState,
    pub spans: Vec<HighlightSpan>,
}

/// Edit commands. Offsets are byte offsets into the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: Range<usize> },
    ReplaceRange { range: Range<usize>, text: String },
    /// Replaces the whole text and re-highlights it synchronously.
    ReplaceAll { text: String },
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Indexes of the blocks that now hold edited text.
    pub changed: Range<usize>,
    pub version: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("edit range {start}..{end} is outside the document (length {len})")]
    OutOfRange { start: usize, end: usize, len: usize },
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
    #[error("document is not valid UTF-8")]
    NotUtf8(#[from] std::str::Utf8Error),
}

pub struct Document {
    buffer: Rope,
    blocks: Vec<Block>,
    next_id: u64,
    version: u64,
    highlighter: Highlighter,
    dirty: DirtyQueue<BlockId>,
    timer: RehighlightTimer,
    highlighting_finished: bool,
}

impl Document {
    /// Creates a fully highlighted document.
    pub fn from_text(text: &str) -> Self {
        Self::with_highlighter(text, Highlighter::default(), RehighlightTimer::default())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        Ok(Self::from_text(std::str::from_utf8(bytes)?))
    }

    pub fn with_highlighter(text: &str, highlighter: Highlighter, timer: RehighlightTimer) -> Self {
        let mut doc = Self {
            buffer: Rope::from(""),
            blocks: Vec::new(),
            next_id: 0,
            version: 0,
            highlighter,
            dirty: DirtyQueue::new(),
            timer,
            highlighting_finished: false,
        };
        doc.replace_all(text);
        doc
    }

    pub fn with_options(text: &str, options: HighlightingOptions, interval: Duration) -> Self {
        Self::with_highlighter(text, Highlighter::new(options), RehighlightTimer::new(interval))
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn options(&self) -> HighlightingOptions {
        self.highlighter.options()
    }

    /// Number of blocks waiting for the next drain.
    pub fn pending(&self) -> usize {
        self.dirty.len()
    }

    /// Text of block `index` without its line break.
    pub fn line_text(&self, index: usize) -> Cow<'_, str> {
        if index >= self.blocks.len() {
            return Cow::Borrowed("");
        }
        let start = self.buffer.offset_of_line(index);
        let end = self.buffer.offset_of_line(index + 1);
        match self.buffer.slice_to_cow(start..end) {
            Cow::Borrowed(line) => Cow::Borrowed(strip_line_break(line)),
            Cow::Owned(line) => Cow::Owned(strip_line_break(&line).to_string()),
        }
    }

    /// Byte range of block `index`, excluding its line break.
    pub fn line_range(&self, index: usize) -> Range<usize> {
        let start = self.buffer.offset_of_line(index);
        start..start + self.line_text(index).len()
    }

    /// Applies `cmd` and queues the affected blocks.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, DocumentError> {
        let (range, text) = match cmd {
            Cmd::ReplaceAll { text } => {
                self.replace_all(&text);
                return Ok(Patch {
                    changed: 0..self.blocks.len(),
                    version: self.version,
                });
            }
            Cmd::InsertText { at, text } => (at..at, text),
            Cmd::DeleteRange { range } => (range, String::new()),
            Cmd::ReplaceRange { range, text } => (range, text),
        };
        self.check_range(&range)?;

        let first = self.buffer.line_of_offset(range.start);
        let last = self.buffer.line_of_offset(range.end);
        let added = text.matches('\n').count();

        let delta = compile_edit(self.buffer.len(), range, &text);
        self.buffer = delta.apply(&self.buffer);

        // the first block keeps its identity, lines past it are new
        let fresh: Vec<Block> = (0..added).map(|_| self.new_block()).collect();
        self.blocks.splice(first + 1..=last, fresh);

        let changed = first..first + added + 1;
        // the block above may be a setext title whose underline changed
        for index in first.saturating_sub(1)..changed.end {
            self.dirty.mark_dirty(self.blocks[index].id);
        }

        self.version += 1;
        debug!(
            "edit v{} touched blocks {:?}, {} pending",
            self.version,
            changed,
            self.dirty.len()
        );
        Ok(Patch {
            changed,
            version: self.version,
        })
    }

    /// Drains the dirty queue if the timer is due. Returns whether any block
    /// was re-highlighted.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.timer.poll(now) && self.drain() > 0
    }

    /// Time until the next [`Document::tick`] would drain.
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.timer.remaining(now)
    }

    /// Re-highlights every block queued so far, including the blocks each
    /// pass cascades into. Blocks queued while draining wait for the next
    /// drain. Returns how many passes ran.
    pub fn drain(&mut self) -> usize {
        if self.dirty.is_empty() {
            return 0;
        }
        let index: HashMap<BlockId, usize> = self
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| (block.id, i))
            .collect();

        let batch = self.dirty.take_batch();
        let queued = batch.len();
        let passes: usize = batch
            .into_iter()
            .filter_map(|id| index.get(&id).copied())
            .map(|i| self.rehighlight_from(i))
            .sum();

        debug!("drained {} queued blocks in {} passes", queued, passes);
        if passes > 0 {
            self.highlighting_finished = true;
        }
        passes
    }

    /// Drains until no block is queued, or a fixed number of rounds passed.
    pub fn settle(&mut self) -> usize {
        let mut passes = 0;
        for _ in 0..MAX_SETTLE_ROUNDS {
            if self.dirty.is_empty() {
                break;
            }
            passes += self.drain();
        }
        passes
    }

    /// Returns true once after any drain or full pass that did work.
    pub fn take_highlighting_finished(&mut self) -> bool {
        std::mem::take(&mut self.highlighting_finished)
    }

    /// Switches rule options and re-highlights the whole document.
    pub fn set_options(&mut self, options: HighlightingOptions) {
        self.highlighter.set_options(options);
        self.dirty.clear();
        self.highlight_all();
    }

    fn replace_all(&mut self, text: &str) {
        self.buffer = Rope::from(text);
        let count = text.matches('\n').count() + 1;
        self.blocks = (0..count).map(|_| self.new_block()).collect();
        self.dirty.clear();
        self.version += 1;
        self.highlight_all();
    }

    fn highlight_all(&mut self) {
        for i in 0..self.blocks.len() {
            let result = self.highlight(i);
            self.store(i, result);
        }
        debug!("highlighted all {} blocks", self.blocks.len());
        self.highlighting_finished = true;
    }

    /// Highlights block `i` and keeps going while the stored state changes.
    fn rehighlight_from(&mut self, mut i: usize) -> usize {
        let mut passes = 0;
        loop {
            let result = self.highlight(i);
            let changed = self.store(i, result);
            passes += 1;
            if !changed || i + 1 >= self.blocks.len() {
                return passes;
            }
            i += 1;
        }
    }

    fn highlight(&self, i: usize) -> BlockHighlight {
        let text = self.line_text(i);
        let neighbors = DocumentNeighbors { doc: self, index: i };
        self.highlighter.highlight_block(&text, &neighbors)
    }

    /// Stores a pass result and applies its neighbour updates. Returns
    /// whether the block's state changed.
    fn store(&mut self, i: usize, result: BlockHighlight) -> bool {
        for update in result.neighbor_updates {
            match update {
                NeighborUpdate::RestylePrevious(state) if i > 0 => {
                    let previous = &mut self.blocks[i - 1];
                    previous.state = state;
                    self.dirty.mark_dirty(previous.id);
                }
                NeighborUpdate::RestylePrevious(_) => {}
            }
        }

        let block = &mut self.blocks[i];
        block.spans = result.spans;
        std::mem::replace(&mut block.state, result.state) != result.state
    }

    fn new_block(&mut self) -> Block {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        Block {
            id,
            state: BlockState::NoState,
            spans: Vec::new(),
        }
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), DocumentError> {
        let len = self.buffer.len();
        if range.start > range.end || range.end > len {
            return Err(DocumentError::OutOfRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        for offset in [range.start, range.end] {
            if !self.is_char_boundary(offset) {
                return Err(DocumentError::NotCharBoundary(offset));
            }
        }
        Ok(())
    }

    /// Line and offset conversions assert char boundaries, so this must only
    /// look at the leaf bytes.
    fn is_char_boundary(&self, offset: usize) -> bool {
        offset == 0 || offset == self.buffer.len() || self.buffer.is_codepoint_boundary(offset)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("version", &self.version)
            .field("blocks", &self.blocks.len())
            .field("pending", &self.dirty.len())
            .finish_non_exhaustive()
    }
}

fn strip_line_break(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn compile_edit(len: usize, range: Range<usize>, text: &str) -> Delta<RopeInfo> {
    let mut builder = Builder::new(len);
    if text.is_empty() {
        builder.delete(range);
    } else {
        builder.replace(range, Rope::from(text));
    }
    builder.build()
}

struct DocumentNeighbors<'d> {
    doc: &'d Document,
    index: usize,
}

impl Neighbors for DocumentNeighbors<'_> {
    fn previous_state(&self) -> BlockState {
        self.index
            .checked_sub(1)
            .map(|i| self.doc.blocks[i].state)
            .unwrap_or_default()
    }

    fn previous_text(&self) -> Cow<'_, str> {
        match self.index.checked_sub(1) {
            Some(i) => self.doc.line_text(i),
            None => Cow::Borrowed(""),
        }
    }

    fn next_text(&self) -> Cow<'_, str> {
        self.doc.line_text(self.index + 1)
    }

    fn is_first_block(&self) -> bool {
        self.index == 0
    }

    fn first_block_text(&self) -> Cow<'_, str> {
        self.doc.line_text(0)
    }
}
