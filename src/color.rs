//! tmux colour values.
//!
//! A colour is fixed to one of three representations at construction and
//! is compared by its wire string, which is what tmux sees inside
//! `#[fg=...,bg=...]`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static hex regex"));

/// Fixed set of named terminal colours.
///
/// `Terminal` shows through as the terminal's own colour (transparent when
/// used as a background), `Default` inherits the status line default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Terminal,
    Default,
}

impl NamedColor {
    pub const ALL: [NamedColor; 10] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::Terminal,
        NamedColor::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::Terminal => "terminal",
            NamedColor::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Named(NamedColor),
    /// xterm 256-colour palette index.
    Indexed256(u8),
    /// `#RRGGBB`, stored as written.
    Hex(String),
}

impl Color {
    pub const DEFAULT: Color = Color::Named(NamedColor::Default);
    pub const TERMINAL: Color = Color::Named(NamedColor::Terminal);

    /// Palette colour; fails outside `0..=255`.
    pub fn indexed(value: i64) -> Result<Color, ColorError> {
        u8::try_from(value)
            .map(Color::Indexed256)
            .map_err(|_| ColorError::IndexOutOfRange(value))
    }

    pub fn hex(value: &str) -> Result<Color, ColorError> {
        if HEX_COLOR.is_match(value) {
            Ok(Color::Hex(value.to_string()))
        } else {
            Err(ColorError::MalformedHex(value.to_string()))
        }
    }

    /// Two colours are the same for separator purposes iff tmux would see
    /// the same string.
    pub fn same_as(&self, other: &Color) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::DEFAULT
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.as_str()),
            Color::Indexed256(idx) => write!(f, "colour{idx}"),
            Color::Hex(hex) => f.write_str(hex),
        }
    }
}

/// Parse a tmux colour: a name, `colourN`/`colorN`, or `#RRGGBB`.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.starts_with('#') {
            return Color::hex(name);
        }
        let lower = name.to_lowercase();
        if let Some(idx_str) =
            lower.strip_prefix("colour").or_else(|| lower.strip_prefix("color"))
        {
            let idx = idx_str
                .parse::<i64>()
                .map_err(|_| ColorError::UnknownName(name.to_string()))?;
            return Color::indexed(idx);
        }
        NamedColor::ALL
            .into_iter()
            .find(|named| named.as_str() == lower)
            .map(Color::Named)
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(Color::Indexed256(220).to_string(), "colour220");
        assert_eq!(Color::hex("#55aaFF").unwrap().to_string(), "#55aaFF");
        assert_eq!(Color::Named(NamedColor::White).to_string(), "white");
        assert_eq!(Color::default().to_string(), "default");
        assert_eq!(Color::TERMINAL.to_string(), "terminal");
    }

    #[test]
    fn test_indexed_range() {
        assert_eq!(Color::indexed(0).unwrap(), Color::Indexed256(0));
        assert_eq!(Color::indexed(255).unwrap(), Color::Indexed256(255));
        assert_eq!(Color::indexed(256), Err(ColorError::IndexOutOfRange(256)));
        assert_eq!(Color::indexed(-1), Err(ColorError::IndexOutOfRange(-1)));
    }

    #[test]
    fn test_hex_validation() {
        assert!(Color::hex("#555555").is_ok());
        assert!(Color::hex("555555").is_err());
        assert!(Color::hex("#55555").is_err());
        assert!(Color::hex("#5555555").is_err());
        assert!(Color::hex("#gggggg").is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("colour105".parse::<Color>().unwrap(), Color::Indexed256(105));
        assert_eq!("color7".parse::<Color>().unwrap(), Color::Indexed256(7));
        assert_eq!("Cyan".parse::<Color>().unwrap(), Color::Named(NamedColor::Cyan));
        assert_eq!("#00ff00".parse::<Color>().unwrap(), Color::Hex("#00ff00".into()));
        assert_eq!("colour300".parse::<Color>(), Err(ColorError::IndexOutOfRange(300)));
        assert!(matches!("chartreuse".parse::<Color>(), Err(ColorError::UnknownName(_))));
    }

    #[test]
    fn test_same_as_compares_wire_strings() {
        assert!(Color::Indexed256(220).same_as(&"colour220".parse().unwrap()));
        assert!(!Color::Indexed256(220).same_as(&Color::Indexed256(105)));
        assert!(!Color::DEFAULT.same_as(&Color::TERMINAL));
    }

    #[test]
    fn test_serde_as_wire_string() {
        let json = serde_json::to_string(&Color::Indexed256(42)).unwrap();
        assert_eq!(json, "\"colour42\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Indexed256(42));
        assert!(serde_json::from_str::<Color>("\"#12\"").is_err());
    }
}
