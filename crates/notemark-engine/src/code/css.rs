//! Selector and colour pass run after the generic scan of a CSS line.

use super::line::CodeLine;
use crate::format::{Format, FormatKey, Rgb, SpanSink};

/// Picks a readable text colour for a swatch painted in `background`.
pub fn swatch_foreground(background: Rgb) -> Rgb {
    let lightness = background.lightness() as u32;
    match lightness {
        0..=20 => Rgb::WHITE,
        21..=51 => Rgb::new(0xcc, 0xcc, 0xcc),
        52..=110 => Rgb::new(0xbb, 0xbb, 0xbb),
        128.. => background.darker(lightness + 100),
        _ => background.lighter(lightness + 100),
    }
}

/// Paints `.class`/`#id` selectors and `color:` swatches in `line[..limit]`.
pub(super) fn scan(line: &CodeLine<'_>, limit: usize, sink: &mut SpanSink) {
    let len = line.len();
    let limit = limit.min(len);
    let mut i = 0;

    while i < limit {
        match line.get(i) {
            Some('.' | '#') => {
                let Some(next) = line.get(i + 1) else { return };
                if next.is_whitespace() || next.is_ascii_digit() {
                    i += 1;
                    continue;
                }
                let end = line
                    .find_char(i, ' ')
                    .or_else(|| line.find_char(i, '{'))
                    .unwrap_or(len);
                sink.paint_range(line.byte_range(i, end), FormatKey::CodeKeyword);
                i = end;
            }
            Some('c') if line.matches_at(i, "color") => {
                i = colour_declaration(line, i + "color".len(), sink);
            }
            _ => i += 1,
        }
    }
}

/// Handles the value of a `color` property whose name ends before `i`.
/// Returns where scanning resumes.
fn colour_declaration(line: &CodeLine<'_>, i: usize, sink: &mut SpanSink) -> usize {
    let len = line.len();
    let Some(colon) = line.find_char(i, ':') else {
        return i;
    };
    let mut start = colon + 1;
    while line.get(start).is_some_and(char::is_whitespace) {
        start += 1;
    }
    let end = line.find_char(start, ';').unwrap_or(len);

    match Rgb::parse(line.slice(start, end)) {
        Some(background) => {
            let swatch = Format::Swatch {
                foreground: swatch_foreground(background),
                background,
            };
            sink.paint_range(line.byte_range(start, end), swatch);
            end
        }
        None => start,
    }
}
