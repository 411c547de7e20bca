//! Format tags and the spans that carry them.
//!
//! The engine never decides what a format looks like. It tags byte ranges of
//! a block with a [`Format`] and leaves colours and fonts to the host. Spans
//! are ordered: a later span is painted over an earlier one, which is how a
//! masked `**` gets its bold content laid on top.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::state::HeadingLevel;

/// Style keys the host resolves to a visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatKey {
    Heading(HeadingLevel),
    List,
    BlockQuote,
    HorizontalRuler,
    Table,
    CodeBlock,
    Comment,
    MaskedSyntax,
    TrailingSpace,
    Bold,
    Italic,
    Link,
    Image,
    InlineCodeBlock,
    CodeKeyword,
    CodeString,
    CodeComment,
    CodeType,
    CodeOther,
    CodeNumLiteral,
    CodeBuiltIn,
}

/// What a span is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Key(FormatKey),
    /// Low-emphasis syntax characters, using the font size of `sized_as`.
    Masked { sized_as: Option<FormatKey> },
    /// An inline style resolved against the heading it appears in.
    InHeading { level: HeadingLevel, style: FormatKey },
    /// A literal colour sample, as painted over CSS colour values.
    Swatch { foreground: Rgb, background: Rgb },
}

impl Format {
    pub fn masked() -> Self {
        Format::Masked { sized_as: None }
    }

    pub fn masked_as(key: FormatKey) -> Self {
        Format::Masked {
            sized_as: Some(key),
        }
    }

    /// The plain key, if this is a plain key format.
    pub fn key(&self) -> Option<FormatKey> {
        match self {
            Format::Key(key) => Some(*key),
            _ => None,
        }
    }
}

impl From<FormatKey> for Format {
    fn from(key: FormatKey) -> Self {
        Format::Key(key)
    }
}

/// A formatted byte range of one block's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub offset: usize,
    pub length: usize,
    pub format: Format,
}

impl HighlightSpan {
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }
}

/// Collects spans for one block in emission order.
///
/// Every span is clamped to the block length and empty spans are dropped, so
/// scanners can hand over ranges computed near the end of a line without
/// checking them first.
#[derive(Debug, Clone, Default)]
pub struct SpanSink {
    len: usize,
    spans: Vec<HighlightSpan>,
}

impl SpanSink {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            spans: Vec::new(),
        }
    }

    pub fn paint(&mut self, offset: usize, length: usize, format: impl Into<Format>) {
        if offset >= self.len {
            return;
        }
        let length = length.min(self.len - offset);
        if length == 0 {
            return;
        }
        self.spans.push(HighlightSpan {
            offset,
            length,
            format: format.into(),
        });
    }

    pub fn paint_range(&mut self, range: Range<usize>, format: impl Into<Format>) {
        self.paint(range.start, range.end.saturating_sub(range.start), format);
    }

    pub fn paint_all(&mut self, format: impl Into<Format>) {
        self.paint(0, self.len, format);
    }

    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<HighlightSpan> {
        self.spans
    }
}

/// The format visible at `offset` once all spans are painted in order.
pub fn format_at(spans: &[HighlightSpan], offset: usize) -> Option<Format> {
    spans
        .iter()
        .rev()
        .find(|span| span.range().contains(&offset))
        .map(|span| span.format)
}

/// Flattens layered spans into consecutive runs of the visible format.
///
/// Runs cover `0..len` without gaps; unformatted stretches carry `None`.
pub fn resolve_runs(spans: &[HighlightSpan], len: usize) -> Vec<(Range<usize>, Option<Format>)> {
    let mut layer: Vec<Option<Format>> = vec![None; len];
    for span in spans {
        let end = (span.offset + span.length).min(len);
        for slot in layer.iter_mut().take(end).skip(span.offset) {
            *slot = Some(span.format);
        }
    }

    let mut runs: Vec<(Range<usize>, Option<Format>)> = Vec::new();
    for (offset, format) in layer.into_iter().enumerate() {
        match runs.last_mut() {
            Some((range, current)) if *current == format => range.end = offset + 1,
            _ => runs.push((offset..offset + 1, format)),
        }
    }
    runs
}

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// SVG colour keywords, sorted by name.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("aliceblue", Rgb::new(240, 248, 255)),
    ("antiquewhite", Rgb::new(250, 235, 215)),
    ("aqua", Rgb::new(0, 255, 255)),
    ("aquamarine", Rgb::new(127, 255, 212)),
    ("azure", Rgb::new(240, 255, 255)),
    ("beige", Rgb::new(245, 245, 220)),
    ("bisque", Rgb::new(255, 228, 196)),
    ("black", Rgb::new(0, 0, 0)),
    ("blanchedalmond", Rgb::new(255, 235, 205)),
    ("blue", Rgb::new(0, 0, 255)),
    ("blueviolet", Rgb::new(138, 43, 226)),
    ("brown", Rgb::new(165, 42, 42)),
    ("burlywood", Rgb::new(222, 184, 135)),
    ("cadetblue", Rgb::new(95, 158, 160)),
    ("chartreuse", Rgb::new(127, 255, 0)),
    ("chocolate", Rgb::new(210, 105, 30)),
    ("coral", Rgb::new(255, 127, 80)),
    ("cornflowerblue", Rgb::new(100, 149, 237)),
    ("cornsilk", Rgb::new(255, 248, 220)),
    ("crimson", Rgb::new(220, 20, 60)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("darkblue", Rgb::new(0, 0, 139)),
    ("darkcyan", Rgb::new(0, 139, 139)),
    ("darkgoldenrod", Rgb::new(184, 134, 11)),
    ("darkgray", Rgb::new(169, 169, 169)),
    ("darkgreen", Rgb::new(0, 100, 0)),
    ("darkgrey", Rgb::new(169, 169, 169)),
    ("darkkhaki", Rgb::new(189, 183, 107)),
    ("darkmagenta", Rgb::new(139, 0, 139)),
    ("darkolivegreen", Rgb::new(85, 107, 47)),
    ("darkorange", Rgb::new(255, 140, 0)),
    ("darkorchid", Rgb::new(153, 50, 204)),
    ("darkred", Rgb::new(139, 0, 0)),
    ("darksalmon", Rgb::new(233, 150, 122)),
    ("darkseagreen", Rgb::new(143, 188, 143)),
    ("darkslateblue", Rgb::new(72, 61, 139)),
    ("darkslategray", Rgb::new(47, 79, 79)),
    ("darkslategrey", Rgb::new(47, 79, 79)),
    ("darkturquoise", Rgb::new(0, 206, 209)),
    ("darkviolet", Rgb::new(148, 0, 211)),
    ("deeppink", Rgb::new(255, 20, 147)),
    ("deepskyblue", Rgb::new(0, 191, 255)),
    ("dimgray", Rgb::new(105, 105, 105)),
    ("dimgrey", Rgb::new(105, 105, 105)),
    ("dodgerblue", Rgb::new(30, 144, 255)),
    ("firebrick", Rgb::new(178, 34, 34)),
    ("floralwhite", Rgb::new(255, 250, 240)),
    ("forestgreen", Rgb::new(34, 139, 34)),
    ("fuchsia", Rgb::new(255, 0, 255)),
    ("gainsboro", Rgb::new(220, 220, 220)),
    ("ghostwhite", Rgb::new(248, 248, 255)),
    ("gold", Rgb::new(255, 215, 0)),
    ("goldenrod", Rgb::new(218, 165, 32)),
    ("gray", Rgb::new(128, 128, 128)),
    ("green", Rgb::new(0, 128, 0)),
    ("greenyellow", Rgb::new(173, 255, 47)),
    ("grey", Rgb::new(128, 128, 128)),
    ("honeydew", Rgb::new(240, 255, 240)),
    ("hotpink", Rgb::new(255, 105, 180)),
    ("indianred", Rgb::new(205, 92, 92)),
    ("indigo", Rgb::new(75, 0, 130)),
    ("ivory", Rgb::new(255, 255, 240)),
    ("khaki", Rgb::new(240, 230, 140)),
    ("lavender", Rgb::new(230, 230, 250)),
    ("lavenderblush", Rgb::new(255, 240, 245)),
    ("lawngreen", Rgb::new(124, 252, 0)),
    ("lemonchiffon", Rgb::new(255, 250, 205)),
    ("lightblue", Rgb::new(173, 216, 230)),
    ("lightcoral", Rgb::new(240, 128, 128)),
    ("lightcyan", Rgb::new(224, 255, 255)),
    ("lightgoldenrodyellow", Rgb::new(250, 250, 210)),
    ("lightgray", Rgb::new(211, 211, 211)),
    ("lightgreen", Rgb::new(144, 238, 144)),
    ("lightgrey", Rgb::new(211, 211, 211)),
    ("lightpink", Rgb::new(255, 182, 193)),
    ("lightsalmon", Rgb::new(255, 160, 122)),
    ("lightseagreen", Rgb::new(32, 178, 170)),
    ("lightskyblue", Rgb::new(135, 206, 250)),
    ("lightslategray", Rgb::new(119, 136, 153)),
    ("lightslategrey", Rgb::new(119, 136, 153)),
    ("lightsteelblue", Rgb::new(176, 196, 222)),
    ("lightyellow", Rgb::new(255, 255, 224)),
    ("lime", Rgb::new(0, 255, 0)),
    ("limegreen", Rgb::new(50, 205, 50)),
    ("linen", Rgb::new(250, 240, 230)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("mediumaquamarine", Rgb::new(102, 205, 170)),
    ("mediumblue", Rgb::new(0, 0, 205)),
    ("mediumorchid", Rgb::new(186, 85, 211)),
    ("mediumpurple", Rgb::new(147, 112, 219)),
    ("mediumseagreen", Rgb::new(60, 179, 113)),
    ("mediumslateblue", Rgb::new(123, 104, 238)),
    ("mediumspringgreen", Rgb::new(0, 250, 154)),
    ("mediumturquoise", Rgb::new(72, 209, 204)),
    ("mediumvioletred", Rgb::new(199, 21, 133)),
    ("midnightblue", Rgb::new(25, 25, 112)),
    ("mintcream", Rgb::new(245, 255, 250)),
    ("mistyrose", Rgb::new(255, 228, 225)),
    ("moccasin", Rgb::new(255, 228, 181)),
    ("navajowhite", Rgb::new(255, 222, 173)),
    ("navy", Rgb::new(0, 0, 128)),
    ("oldlace", Rgb::new(253, 245, 230)),
    ("olive", Rgb::new(128, 128, 0)),
    ("olivedrab", Rgb::new(107, 142, 35)),
    ("orange", Rgb::new(255, 165, 0)),
    ("orangered", Rgb::new(255, 69, 0)),
    ("orchid", Rgb::new(218, 112, 214)),
    ("palegoldenrod", Rgb::new(238, 232, 170)),
    ("palegreen", Rgb::new(152, 251, 152)),
    ("paleturquoise", Rgb::new(175, 238, 238)),
    ("palevioletred", Rgb::new(219, 112, 147)),
    ("papayawhip", Rgb::new(255, 239, 213)),
    ("peachpuff", Rgb::new(255, 218, 185)),
    ("peru", Rgb::new(205, 133, 63)),
    ("pink", Rgb::new(255, 192, 203)),
    ("plum", Rgb::new(221, 160, 221)),
    ("powderblue", Rgb::new(176, 224, 230)),
    ("purple", Rgb::new(128, 0, 128)),
    ("red", Rgb::new(255, 0, 0)),
    ("rosybrown", Rgb::new(188, 143, 143)),
    ("royalblue", Rgb::new(65, 105, 225)),
    ("saddlebrown", Rgb::new(139, 69, 19)),
    ("salmon", Rgb::new(250, 128, 114)),
    ("sandybrown", Rgb::new(244, 164, 96)),
    ("seagreen", Rgb::new(46, 139, 87)),
    ("seashell", Rgb::new(255, 245, 238)),
    ("sienna", Rgb::new(160, 82, 45)),
    ("silver", Rgb::new(192, 192, 192)),
    ("skyblue", Rgb::new(135, 206, 235)),
    ("slateblue", Rgb::new(106, 90, 205)),
    ("slategray", Rgb::new(112, 128, 144)),
    ("slategrey", Rgb::new(112, 128, 144)),
    ("snow", Rgb::new(255, 250, 250)),
    ("springgreen", Rgb::new(0, 255, 127)),
    ("steelblue", Rgb::new(70, 130, 180)),
    ("tan", Rgb::new(210, 180, 140)),
    ("teal", Rgb::new(0, 128, 128)),
    ("thistle", Rgb::new(216, 191, 216)),
    ("tomato", Rgb::new(255, 99, 71)),
    ("turquoise", Rgb::new(64, 224, 208)),
    ("violet", Rgb::new(238, 130, 238)),
    ("wheat", Rgb::new(245, 222, 179)),
    ("white", Rgb::new(255, 255, 255)),
    ("whitesmoke", Rgb::new(245, 245, 245)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("yellowgreen", Rgb::new(154, 205, 50)),
];

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a CSS colour value: a name, `#rgb`, `#rrggbb` or `rgb(r, g, b)`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::from_hex(hex);
        }
        if let Some(args) = value
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::from_components(args);
        }
        let name = value.to_ascii_lowercase();
        NAMED_COLORS
            .binary_search_by(|(known, _)| (*known).cmp(name.as_str()))
            .ok()
            .map(|index| NAMED_COLORS[index].1)
    }

    /// Parses three comma separated decimal components.
    pub fn from_components(args: &str) -> Option<Self> {
        let mut parts = args.split(',').map(|part| part.trim().parse::<u8>());
        let r = parts.next()?.ok()?;
        let g = parts.next()?.ok()?;
        let b = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(r, g, b))
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
                Self::from_hex(&doubled)
            }
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// HSL lightness, `0..=255`.
    pub fn lightness(self) -> u8 {
        let max = self.r.max(self.g).max(self.b) as u16;
        let min = self.r.min(self.g).min(self.b) as u16;
        ((max + min) / 2) as u8
    }

    /// Divides the HSV value by `factor` percent. Factors below 100 lighten.
    pub fn darker(self, factor: u32) -> Self {
        if factor == 0 {
            return self;
        }
        if factor < 100 {
            return self.lighter(10_000 / factor);
        }
        let (h, s, v) = self.to_hsv();
        Self::from_hsv(h, s, v * 100 / factor as i32)
    }

    /// Multiplies the HSV value by `factor` percent, spilling into saturation
    /// once the value saturates. Factors below 100 darken.
    pub fn lighter(self, factor: u32) -> Self {
        if factor == 0 {
            return self;
        }
        if factor < 100 {
            return self.darker(10_000 / factor);
        }
        let (h, mut s, v) = self.to_hsv();
        let mut v = v * factor as i32 / 100;
        if v > 255 {
            s = (s - (v - 255)).max(0);
            v = 255;
        }
        Self::from_hsv(h, s, v)
    }

    /// Hue in degrees, saturation and value in `0..=255`.
    fn to_hsv(self) -> (f64, i32, i32) {
        let (r, g, b) = (self.r as i32, self.g as i32, self.b as i32);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let s = if max == 0 { 0 } else { delta * 255 / max };
        let h = if delta == 0 {
            0.0
        } else {
            let d = delta as f64;
            let h = if max == r {
                ((g - b) as f64 / d).rem_euclid(6.0)
            } else if max == g {
                (b - r) as f64 / d + 2.0
            } else {
                (r - g) as f64 / d + 4.0
            };
            h * 60.0
        };
        (h, s, max)
    }

    fn from_hsv(h: f64, s: i32, v: i32) -> Self {
        let v = v.clamp(0, 255) as f64;
        let s = s.clamp(0, 255) as f64 / 255.0;
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_u8 = |channel: f64| (channel + m).round().clamp(0.0, 255.0) as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }
}
