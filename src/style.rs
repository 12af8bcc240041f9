//! tmux style values and style-string parsing.
//!
//! A [`Style`] is rendered in two shapes: the full option form used for
//! `status-style` and friends (`fg=..,bg=..,bold`), and the attribute-only
//! form embedded in `#[...]` around segment content.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::StyleError;

// ─── Attributes ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAttribute {
    /// Terminal alternate character set.
    Acs,
    Bright,
    Bold,
    Dim,
    Underscore,
    Blink,
    Reverse,
    Hidden,
    Italics,
    Overline,
    Strikethrough,
    DoubleUnderscore,
    CurlyUnderscore,
    DottedUnderscore,
    DashedUnderscore,
}

impl TextAttribute {
    pub const ALL: [TextAttribute; 15] = [
        TextAttribute::Acs,
        TextAttribute::Bright,
        TextAttribute::Bold,
        TextAttribute::Dim,
        TextAttribute::Underscore,
        TextAttribute::Blink,
        TextAttribute::Reverse,
        TextAttribute::Hidden,
        TextAttribute::Italics,
        TextAttribute::Overline,
        TextAttribute::Strikethrough,
        TextAttribute::DoubleUnderscore,
        TextAttribute::CurlyUnderscore,
        TextAttribute::DottedUnderscore,
        TextAttribute::DashedUnderscore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextAttribute::Acs => "acs",
            TextAttribute::Bright => "bright",
            TextAttribute::Bold => "bold",
            TextAttribute::Dim => "dim",
            TextAttribute::Underscore => "underscore",
            TextAttribute::Blink => "blink",
            TextAttribute::Reverse => "reverse",
            TextAttribute::Hidden => "hidden",
            TextAttribute::Italics => "italics",
            TextAttribute::Overline => "overline",
            TextAttribute::Strikethrough => "strikethrough",
            TextAttribute::DoubleUnderscore => "double-underscore",
            TextAttribute::CurlyUnderscore => "curly-underscore",
            TextAttribute::DottedUnderscore => "dotted-underscore",
            TextAttribute::DashedUnderscore => "dashed-underscore",
        }
    }
}

impl fmt::Display for TextAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAttribute {
    type Err = StyleError;

    /// Accepts tmux's aliases `italic` and `underline` as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s.trim() {
            "italic" => "italics",
            "underline" => "underscore",
            other => other,
        };
        TextAttribute::ALL
            .into_iter()
            .find(|attr| attr.as_str() == token)
            .ok_or_else(|| StyleError::UnknownAttribute(s.trim().to_string()))
    }
}

// ─── Style ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StyleRepr")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<Color>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<TextAttribute>,
    /// Attributes switched off. Wins over `attrs` for the same attribute.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unset_attrs: Vec<TextAttribute>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn attr(mut self, attr: TextAttribute) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn unset(mut self, attr: TextAttribute) -> Self {
        self.unset_attrs.push(attr);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && self.attrs.is_empty()
            && self.unset_attrs.is_empty()
    }

    /// Attributes actually switched on: `attrs` minus anything unset.
    fn effective_attrs(&self) -> impl Iterator<Item = TextAttribute> + '_ {
        self.attrs.iter().copied().filter(|a| !self.unset_attrs.contains(a))
    }

    fn attr_parts(&self) -> Vec<String> {
        let mut parts: Vec<String> =
            self.effective_attrs().map(|a| a.as_str().to_string()).collect();
        parts.extend(self.unset_attrs.iter().map(|a| format!("no{a}")));
        parts
    }

    /// Attribute-only form for an inline `#[...]` token. Colours are left to
    /// the segment's own colour token.
    pub fn apply(&self) -> String {
        self.attr_parts().join(",")
    }
}

/// Full option form: `fg=..,bg=..,attrs,noattrs`. Empty for an empty style.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(fg) = &self.fg {
            parts.push(format!("fg={fg}"));
        }
        if let Some(bg) = &self.bg {
            parts.push(format!("bg={bg}"));
        }
        parts.extend(self.attr_parts());
        f.write_str(&parts.join(","))
    }
}

/// Parse a tmux style string such as `"bg=green,fg=black,bold,noitalics"`.
///
/// Parts may be separated by commas or spaces. `default` and `none` are
/// accepted and ignored.
impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Style::default();
        for part in s.split([',', ' ']).map(str::trim).filter(|p| !p.is_empty()) {
            if let Some(val) = part.strip_prefix("fg=") {
                style.fg = Some(val.parse()?);
            } else if let Some(val) = part.strip_prefix("bg=") {
                style.bg = Some(val.parse()?);
            } else if part == "default" || part == "none" {
                continue;
            } else if let Some(attr) = part.strip_prefix("no").and_then(|a| a.parse().ok()) {
                style.unset_attrs.push(attr);
            } else {
                style.attrs.push(part.parse()?);
            }
        }
        Ok(style)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StyleRepr {
    Text(String),
    Table(StyleTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleTable {
    #[serde(default)]
    fg: Option<Color>,
    #[serde(default)]
    bg: Option<Color>,
    #[serde(default)]
    attrs: Vec<TextAttribute>,
    #[serde(default)]
    unset_attrs: Vec<TextAttribute>,
}

impl TryFrom<StyleRepr> for Style {
    type Error = StyleError;

    fn try_from(repr: StyleRepr) -> Result<Self, Self::Error> {
        match repr {
            StyleRepr::Text(text) => text.parse(),
            StyleRepr::Table(t) => Ok(Style {
                fg: t.fg,
                bg: t.bg,
                attrs: t.attrs,
                unset_attrs: t.unset_attrs,
            }),
        }
    }
}
