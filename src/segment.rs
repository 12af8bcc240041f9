//! Segments and the window list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::SegmentError;
use crate::style::Style;

/// Where a segment's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Shown as written. May contain tmux format syntax.
    Literal(String),
    /// Looked up in the provider registry by name. Names qualified with a
    /// module prefix (`module.name`) are user providers.
    Provider(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSegment", into = "RawSegment")]
pub struct Segment {
    pub kind: SegmentKind,
    bg: Color,
    fg: Color,
    pub style: Option<Style>,
    /// Replaces the computed separator after this segment.
    pub separator: Option<String>,
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::with_kind(SegmentKind::Literal(text.into()))
    }

    pub fn provider(name: impl Into<String>) -> Self {
        Self::with_kind(SegmentKind::Provider(name.into()))
    }

    fn with_kind(kind: SegmentKind) -> Self {
        Self { kind, bg: Color::DEFAULT, fg: Color::DEFAULT, style: None, separator: None }
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Background in effect: the style's, if it sets one.
    pub fn bg(&self) -> &Color {
        self.style.as_ref().and_then(|s| s.bg.as_ref()).unwrap_or(&self.bg)
    }

    /// Foreground in effect: the style's, if it sets one.
    pub fn fg(&self) -> &Color {
        self.style.as_ref().and_then(|s| s.fg.as_ref()).unwrap_or(&self.fg)
    }
}

/// Serialized shape of a segment: exactly one of `text` or `provider`.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
    #[serde(default)]
    bg: Color,
    #[serde(default)]
    fg: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    separator: Option<String>,
}

impl TryFrom<RawSegment> for Segment {
    type Error = SegmentError;

    fn try_from(raw: RawSegment) -> Result<Self, Self::Error> {
        let kind = match (raw.text, raw.provider) {
            (Some(text), None) => SegmentKind::Literal(text),
            (None, Some(name)) => SegmentKind::Provider(name),
            (Some(_), Some(_)) => return Err(SegmentError::Ambiguous),
            (None, None) => return Err(SegmentError::Empty),
        };
        Ok(Segment { kind, bg: raw.bg, fg: raw.fg, style: raw.style, separator: raw.separator })
    }
}

impl From<Segment> for RawSegment {
    fn from(seg: Segment) -> Self {
        let (text, provider) = match seg.kind {
            SegmentKind::Literal(text) => (Some(text), None),
            SegmentKind::Provider(name) => (None, Some(name)),
        };
        RawSegment {
            text,
            provider,
            bg: seg.bg,
            fg: seg.fg,
            style: seg.style,
            separator: seg.separator,
        }
    }
}

// ─── Window list ────────────────────────────────────────────────────────────

/// `status-justify` of the window list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Right,
    /// Centred between the left and right sides.
    Center,
    /// Centred on the whole status line.
    AbsoluteCenter,
}

impl Alignment {
    /// Whether the window list sits directly against `side`.
    pub fn adjoins(self, side: Side) -> bool {
        matches!((self, side), (Alignment::Left, Side::Left) | (Alignment::Right, Side::Right))
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "centre",
            Alignment::AbsoluteCenter => "absolute-centre",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowListConfig {
    pub active: Segment,
    pub inactive: Segment,
    #[serde(default)]
    pub alignment: Alignment,
}

impl WindowListConfig {
    pub fn new(active: Segment, inactive: Segment) -> Self {
        Self { active, inactive, alignment: Alignment::default() }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn segment(&self, kind: WindowKind) -> &Segment {
        match kind {
            WindowKind::Active => &self.active,
            WindowKind::Inactive => &self.inactive,
        }
    }
}
