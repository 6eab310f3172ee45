//! Named colors and palette lookup for brush color tokens.

use crate::error::{CanvasError, CanvasResult};
use tiny_skia::Color;

/// The swatches offered by the color chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Skin,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Lollipop,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Skin,
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Lollipop,
        NamedColor::White,
    ];

    /// Symbolic token for this swatch.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Skin => "skin",
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
            NamedColor::Lollipop => "lollipop",
            NamedColor::White => "white",
        }
    }

    /// Opaque RGBA value of this swatch.
    pub fn color(self) -> Color {
        let (r, g, b) = match self {
            NamedColor::Skin => (0xFF, 0xE0, 0xC6),
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::Red => (0xFF, 0x00, 0x00),
            NamedColor::Green => (0x3D, 0xFF, 0x00),
            NamedColor::Blue => (0x00, 0x00, 0xFF),
            NamedColor::Yellow => (0xFF, 0xE5, 0x00),
            NamedColor::Lollipop => (0xFF, 0x00, 0xDD),
            NamedColor::White => (0xFF, 0xFF, 0xFF),
        };
        Color::from_rgba8(r, g, b, 0xFF)
    }
}

impl std::str::FromStr for NamedColor {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CanvasError::InvalidColor(s.to_string()))
    }
}

/// A fixed set of named colors that color tokens resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<(String, Color)>,
}

impl Palette {
    /// Build a palette from `(name, color)` pairs. Later duplicates of a
    /// name are ignored.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Color)>,
        S: Into<String>,
    {
        let mut palette = Self {
            entries: Vec::new(),
        };
        for (name, color) in entries {
            let name = name.into();
            if palette.by_name(&name).is_none() {
                palette.entries.push((name, color));
            }
        }
        palette
    }

    /// Resolve a color token to its palette color.
    ///
    /// A token is either the name of an entry (ASCII case-insensitive) or a
    /// CSS color string (`#f00`, `#FF0000`, ...) equal to one of the entries.
    /// Colors that are not in the palette are rejected.
    pub fn resolve(&self, token: &str) -> CanvasResult<Color> {
        if let Some(color) = self.by_name(token.trim()) {
            return Ok(color);
        }

        let invalid = || CanvasError::InvalidColor(token.to_string());
        let parsed = parse_color(token).map_err(|_| invalid())?.to_color_u8();
        self.entries
            .iter()
            .map(|(_, color)| *color)
            .find(|color| color.to_color_u8() == parsed)
            .ok_or_else(invalid)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn by_name(&self, name: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_entries(NamedColor::ALL.iter().map(|c| (c.name(), c.color())))
    }
}

/// Parse a CSS color string into a tiny_skia::Color.
///
/// Accepts anything `csscolorparser` does. This does not consult a palette;
/// use [`Palette::resolve`] for brush colors.
pub fn parse_color(s: &str) -> CanvasResult<Color> {
    let parsed = csscolorparser::parse(s.trim())
        .map_err(|e| CanvasError::InvalidColor(format!("{}: {}", s, e)))?;

    let [r, g, b, a] = parsed.to_rgba8();
    Ok(Color::from_rgba8(r, g, b, a))
}
