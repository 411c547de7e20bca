//! Tag, attribute and attribute-value scanner for XML and HTML blocks.

use super::line::CodeLine;
use crate::format::{FormatKey, SpanSink};

pub(super) fn scan(line: &CodeLine<'_>, sink: &mut SpanSink) {
    let len = line.len();
    if len == 0 {
        return;
    }
    let mut paint = |start: usize, end: usize, format: FormatKey| {
        sink.paint_range(line.byte_range(start, end), format);
    };

    paint(0, len, FormatKey::CodeBlock);

    let mut i = 0;
    while i < len {
        match line.get(i) {
            Some('<') if line.get(i + 1) != Some('!') => {
                if let Some(close) = line.find_char(i, '>') {
                    let mut name = i + 1;
                    if line.get(name) == Some('/') {
                        name += 1;
                    }
                    paint(name, close, FormatKey::CodeKeyword);
                    i = name;
                    continue;
                }
            }
            Some('=') => {
                // attribute name: back to the space before it, skipping `name =`
                let mut space = line.rfind_char(i, ' ');
                if i > 0 && space == Some(i - 1) {
                    space = i.checked_sub(2).and_then(|from| line.rfind_char(from, ' '));
                }
                if let Some(space) = space.filter(|at| *at > 0) {
                    paint(space, i, FormatKey::CodeBuiltIn);
                }
            }
            Some('"') => {
                let start = i;
                if start + 2 >= len {
                    return;
                }
                let mut end = start + 1;
                while end < len {
                    if line.get(end) == Some('"') {
                        end += 1;
                        break;
                    }
                    end += 1;
                    if end + 1 >= len {
                        end = len;
                        break;
                    }
                }
                paint(start, end, FormatKey::CodeString);
                i = end;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
}
