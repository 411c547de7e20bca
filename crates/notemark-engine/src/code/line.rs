use std::ops::Range;

/// A line of code indexed by character, with the byte offset of every
/// character kept alongside for painting.
///
/// Scanners walk character indices; every accessor is bounds-checked so a
/// scan that runs off the end of the line sees `None` instead of panicking.
#[derive(Debug, Clone)]
pub struct CodeLine<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each char, followed by `text.len()`.
    offsets: Vec<usize>,
}

impl<'a> CodeLine<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);
        for (offset, c) in text.char_indices() {
            chars.push(c);
            offsets.push(offset);
        }
        offsets.push(text.len());
        Self {
            text,
            chars,
            offsets,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    pub fn is_letter(&self, i: usize) -> bool {
        self.get(i).is_some_and(char::is_alphabetic)
    }

    /// Byte offset of character `i`, clamped to the end of the line.
    pub fn byte(&self, i: usize) -> usize {
        self.offsets
            .get(i)
            .copied()
            .unwrap_or(self.text.len())
    }

    /// Byte range of the characters `start..end`, clamped to the line.
    pub fn byte_range(&self, start: usize, end: usize) -> Range<usize> {
        let start = self.byte(start);
        start..self.byte(end).max(start)
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let range = self.byte_range(start, end);
        &self.text[range]
    }

    /// True when the characters at `i` spell out `pat`.
    pub fn matches_at(&self, i: usize, pat: &str) -> bool {
        let mut at = i;
        for c in pat.chars() {
            if self.get(at) != Some(c) {
                return false;
            }
            at += 1;
        }
        true
    }

    /// Index of the first occurrence of `pat` starting at or after `from`.
    pub fn find(&self, from: usize, pat: &str) -> Option<usize> {
        if from > self.len() {
            return None;
        }
        let base = self.byte(from);
        let found = self.text[base..].find(pat)? + base;
        self.offsets.binary_search(&found).ok()
    }

    pub fn find_char(&self, from: usize, c: char) -> Option<usize> {
        self.chars
            .get(from..)?
            .iter()
            .position(|&x| x == c)
            .map(|pos| pos + from)
    }

    /// Index of the last `c` at or before `upto`.
    pub fn rfind_char(&self, upto: usize, c: char) -> Option<usize> {
        let end = upto.checked_add(1)?.min(self.len());
        self.chars[..end].iter().rposition(|&x| x == c)
    }

    /// Index of the first non-letter at or after `from`, or the line length.
    pub fn word_end(&self, from: usize) -> usize {
        let mut i = from;
        while self.is_letter(i) {
            i += 1;
        }
        i
    }
}
