//! Separator glyph sets.
//!
//! "left"/"right" name the direction a glyph points, not the side of the
//! status line it appears on. The left side of the status line points
//! right (toward the window list) and the right side points left.
//!
//! Presets use the nerd-font powerline-extra symbols.

use serde::{Deserialize, Serialize};

use crate::error::SeparatorError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeparatorSpec")]
pub struct SeparatorSet {
    pub thick_left: String,
    pub thick_right: String,
    pub thin_left: String,
    pub thin_right: String,
}

impl SeparatorSet {
    pub fn new(
        thick_left: impl Into<String>,
        thick_right: impl Into<String>,
        thin_left: impl Into<String>,
        thin_right: impl Into<String>,
    ) -> Self {
        Self {
            thick_left: thick_left.into(),
            thick_right: thick_right.into(),
            thin_left: thin_left.into(),
            thin_right: thin_right.into(),
        }
    }

    /// Thick glyph pointing in `dir`.
    pub fn thick(&self, dir: Direction) -> &str {
        match dir {
            Direction::Left => &self.thick_left,
            Direction::Right => &self.thick_right,
        }
    }

    /// Thin glyph pointing in `dir`.
    pub fn thin(&self, dir: Direction) -> &str {
        match dir {
            Direction::Left => &self.thin_left,
            Direction::Right => &self.thin_right,
        }
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        SeparatorPreset::Original.glyphs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorPreset {
    None,
    /// Classic arrows.
    Original,
    Angle,
    SlashForward,
    SlashBackward,
    Round,
    Flame,
    PixelSquares,
}

impl SeparatorPreset {
    pub const ALL: [SeparatorPreset; 8] = [
        SeparatorPreset::None,
        SeparatorPreset::Original,
        SeparatorPreset::Angle,
        SeparatorPreset::SlashForward,
        SeparatorPreset::SlashBackward,
        SeparatorPreset::Round,
        SeparatorPreset::Flame,
        SeparatorPreset::PixelSquares,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SeparatorPreset::None => "none",
            SeparatorPreset::Original => "original",
            SeparatorPreset::Angle => "angle",
            SeparatorPreset::SlashForward => "slash_forward",
            SeparatorPreset::SlashBackward => "slash_backward",
            SeparatorPreset::Round => "round",
            SeparatorPreset::Flame => "flame",
            SeparatorPreset::PixelSquares => "pixel_squares",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, SeparatorError> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| SeparatorError::UnknownPreset(name.to_string()))
    }

    pub fn glyphs(self) -> SeparatorSet {
        match self {
            SeparatorPreset::None => SeparatorSet::new("", "", "", ""),
            SeparatorPreset::Original | SeparatorPreset::Angle => {
                SeparatorSet::new("\u{e0b2}", "\u{e0b0}", "\u{e0b3}", "\u{e0b1}")
            }
            SeparatorPreset::SlashForward => {
                SeparatorSet::new("\u{e0ba}", "\u{e0bc}", "\u{e0bd}", "\u{e0bb}")
            }
            SeparatorPreset::SlashBackward => {
                SeparatorSet::new("\u{e0be}", "\u{e0b8}", "\u{e0b9}", "\u{e0b9}")
            }
            SeparatorPreset::Round => {
                SeparatorSet::new("\u{e0b6}", "\u{e0b4}", "\u{e0b7}", "\u{e0b5}")
            }
            // The left-pointing thick glyph carries a full block so the
            // wedge runs into the segment it opens.
            SeparatorPreset::Flame => {
                SeparatorSet::new("\u{e0c2} \u{2588}", "\u{e0c0} ", "\u{e0c3} ", "\u{e0c1} ")
            }
            SeparatorPreset::PixelSquares => {
                SeparatorSet::new("\u{e0c7} \u{2588}", "\u{e0c6} ", "\u{e0c5} ", "\u{e0c4}")
            }
        }
    }
}

impl From<SeparatorPreset> for SeparatorSet {
    fn from(preset: SeparatorPreset) -> Self {
        preset.glyphs()
    }
}

/// Config form: a preset name or all four glyphs.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeparatorSpec {
    Preset(String),
    Glyphs {
        thick_left: String,
        thick_right: String,
        thin_left: String,
        thin_right: String,
    },
}

impl TryFrom<SeparatorSpec> for SeparatorSet {
    type Error = SeparatorError;

    fn try_from(spec: SeparatorSpec) -> Result<Self, Self::Error> {
        match spec {
            SeparatorSpec::Preset(name) => {
                SeparatorPreset::from_name(&name).map(SeparatorPreset::glyphs)
            }
            SeparatorSpec::Glyphs { thick_left, thick_right, thin_left, thin_right } => {
                Ok(SeparatorSet { thick_left, thick_right, thin_left, thin_right })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_points_outward() {
        let set = SeparatorPreset::Original.glyphs();
        assert_eq!(set.thick(Direction::Right), "\u{e0b0}");
        assert_eq!(set.thick(Direction::Left), "\u{e0b2}");
        assert_eq!(set.thin(Direction::Right), "\u{e0b1}");
        assert_eq!(set.thin(Direction::Left), "\u{e0b3}");
        assert_eq!(SeparatorPreset::Angle.glyphs(), set);
    }

    #[test]
    fn test_block_glyph_presets() {
        assert!(SeparatorPreset::Flame.glyphs().thick_left.contains('\u{2588}'));
        assert!(SeparatorPreset::PixelSquares.glyphs().thick_left.contains('\u{2588}'));
        assert!(!SeparatorPreset::Round.glyphs().thick_left.contains('\u{2588}'));
    }

    #[test]
    fn test_none_preset_is_fully_populated_with_empty_glyphs() {
        let set = SeparatorPreset::None.glyphs();
        assert!(set.thick_left.is_empty() && set.thin_right.is_empty());
    }

    #[test]
    fn test_preset_names() {
        for preset in SeparatorPreset::ALL {
            assert_eq!(SeparatorPreset::from_name(preset.name()), Ok(preset));
        }
        assert!(SeparatorPreset::from_name("zigzag").is_err());
    }

    #[test]
    fn test_deserialize_preset_or_glyphs() {
        let preset: SeparatorSet = serde_json::from_str("\"round\"").unwrap();
        assert_eq!(preset, SeparatorPreset::Round.glyphs());

        let custom: SeparatorSet = serde_json::from_str(
            r#"{"thick_left":"<","thick_right":">","thin_left":"(","thin_right":")"}"#,
        )
        .unwrap();
        assert_eq!(custom, SeparatorSet::new("<", ">", "(", ")"));

        // Partial sets are rejected rather than filled in.
        assert!(serde_json::from_str::<SeparatorSet>(r#"{"thick_left":"<"}"#).is_err());
    }

    #[test]
    fn test_unknown_preset_is_named_in_error() {
        let err = serde_json::from_str::<SeparatorSet>("\"zigzag\"").unwrap_err();
        assert!(err.to_string().contains("unknown separator preset `zigzag`"), "{err}");
    }
}
