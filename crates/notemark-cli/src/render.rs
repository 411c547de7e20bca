//! Maps engine formats to terminal styles.

use notemark_engine::format::resolve_runs;
use notemark_engine::{Document, Format, FormatKey, HighlightSpan, Rgb};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

fn rgb(colour: Rgb) -> Color {
    Color::Rgb(colour.r, colour.g, colour.b)
}

fn key_style(key: FormatKey) -> Style {
    let style = Style::default();
    match key {
        FormatKey::Heading(level) if level.get() <= 2 => style
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        FormatKey::Heading(_) => style.fg(Color::Cyan).add_modifier(Modifier::BOLD),
        FormatKey::List => style.fg(Color::Yellow),
        FormatKey::BlockQuote => style.fg(Color::Green).add_modifier(Modifier::ITALIC),
        FormatKey::HorizontalRuler => style.fg(Color::DarkGray),
        FormatKey::Table => style.fg(Color::Blue),
        FormatKey::CodeBlock | FormatKey::InlineCodeBlock => style.fg(Color::LightYellow),
        FormatKey::Comment | FormatKey::CodeComment => {
            style.fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
        }
        FormatKey::MaskedSyntax => style
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        FormatKey::TrailingSpace => style.bg(Color::Red),
        FormatKey::Bold => style.add_modifier(Modifier::BOLD),
        FormatKey::Italic => style.add_modifier(Modifier::ITALIC),
        FormatKey::Link => style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        FormatKey::Image => style.fg(Color::Magenta).add_modifier(Modifier::UNDERLINED),
        FormatKey::CodeKeyword => style.fg(Color::Magenta),
        FormatKey::CodeString => style.fg(Color::Green),
        FormatKey::CodeType => style.fg(Color::Yellow),
        FormatKey::CodeOther => style.fg(Color::LightRed),
        FormatKey::CodeNumLiteral => style.fg(Color::LightBlue),
        FormatKey::CodeBuiltIn => style.fg(Color::LightCyan),
    }
}

pub fn style_for(format: &Format) -> Style {
    match *format {
        Format::Key(key) => key_style(key),
        Format::Masked { .. } => Style::default().fg(Color::DarkGray),
        // keep the heading colour, borrow only the emphasis
        Format::InHeading { level, style } => {
            key_style(FormatKey::Heading(level)).add_modifier(key_style(style).add_modifier)
        }
        Format::Swatch {
            foreground,
            background,
        } => Style::default().fg(rgb(foreground)).bg(rgb(background)),
    }
}

/// One terminal line for a block, painted with its resolved spans.
pub fn block_line(text: &str, spans: &[HighlightSpan]) -> Line<'static> {
    let runs = resolve_runs(spans, text.len());
    let mut pieces = Vec::with_capacity(runs.len());
    for (range, format) in runs {
        let Some(piece) = text.get(range) else {
            continue;
        };
        let style = format.as_ref().map(style_for).unwrap_or_default();
        pieces.push(Span::styled(piece.to_string(), style));
    }
    Line::from(pieces)
}

/// Plain-text listing of every block, its state and its spans.
pub fn dump(doc: &Document) -> String {
    let mut out = Vec::new();
    for (i, block) in doc.blocks().iter().enumerate() {
        out.push(format!("{i} {:?} | {}", block.state, doc.line_text(i)));
        for span in &block.spans {
            out.push(format!("    {}+{} {:?}", span.offset, span.length, span.format));
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use notemark_engine::HeadingLevel;
    use pretty_assertions::assert_eq;

    #[test]
    fn dump_lists_states_and_spans() {
        let doc = Document::from_text("# A\n- b");
        insta::assert_snapshot!(dump(&doc), @r"
        0 Heading(HeadingLevel(1)) | # A
            0+3 Masked { sized_as: Some(Heading(HeadingLevel(1))) }
            0+3 Key(Heading(HeadingLevel(1)))
        1 List | - b
            0+2 Key(List)
        ");
    }

    #[test]
    fn block_line_keeps_every_character() {
        let doc = Document::from_text("see **bold** and `code`");
        let line = block_line(&doc.line_text(0), &doc.blocks()[0].spans);
        let rendered: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(rendered, "see **bold** and `code`");
        assert!(line.spans.len() > 1);
    }

    #[test]
    fn emphasis_in_heading_keeps_heading_colour() {
        let style = style_for(&Format::InHeading {
            level: HeadingLevel::from_count(3),
            style: FormatKey::Italic,
        });
        assert_eq!(style.fg, Some(Color::Cyan));
        assert!(style.add_modifier.contains(Modifier::ITALIC | Modifier::BOLD));
    }

    #[test]
    fn swatches_use_literal_colours() {
        let style = style_for(&Format::Swatch {
            foreground: Rgb::WHITE,
            background: Rgb::new(1, 2, 3),
        });
        assert_eq!(style.fg, Some(Color::Rgb(255, 255, 255)));
        assert_eq!(style.bg, Some(Color::Rgb(1, 2, 3)));
    }
}
