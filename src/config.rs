//! User configuration and the render-time snapshot.
//!
//! The user writes `config.toml`; `tmux-styler apply` validates it and
//! stores it as a JSON snapshot. Every render invocation reads only the
//! snapshot and treats it as immutable.

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::color::Color;
use crate::error::ConfigError;
use crate::provider::ProviderArgs;
use crate::segment::{Segment, Side, WindowListConfig};
use crate::separator::SeparatorSet;
use crate::style::Style;

const APP_DIR: &str = "tmux-styler";
const CONFIG_FILE: &str = "config.toml";
const SNAPSHOT_FILE: &str = "statusbar.json";

fn default_true() -> bool {
    true
}
fn default_left_length() -> u32 {
    60
}
fn default_right_length() -> u32 {
    90
}
fn default_interval() -> u32 {
    1
}
fn default_terminal() -> Color {
    Color::TERMINAL
}

// ─── Statusbar ──────────────────────────────────────────────────────────────

/// One side of the status line: segments in screen order plus the style
/// tmux applies to the side as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SideConfig {
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl SideConfig {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments, style: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusbarConfig {
    #[serde(default)]
    pub left: SideConfig,
    #[serde(default)]
    pub right: SideConfig,
    pub window_list: WindowListConfig,
    #[serde(default)]
    pub separator: SeparatorSet,
    /// Falls back to `separator`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_end_separator: Option<SeparatorSet>,
    /// Falls back to `separator`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_end_separator: Option<SeparatorSet>,
    /// Keyword arguments per provider name.
    #[serde(default)]
    pub provider_args: BTreeMap<String, ProviderArgs>,
    /// Soft caps handed to tmux; the renderer does not truncate.
    #[serde(default = "default_left_length")]
    pub left_max_length: u32,
    #[serde(default = "default_right_length")]
    pub right_max_length: u32,
    #[serde(default = "default_terminal")]
    pub default_bg: Color,
    #[serde(default = "default_terminal")]
    pub default_fg: Color,
    /// Inherited by every segment; its colours override `default_bg` and
    /// `default_fg`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<Style>,
    /// Redraw interval in seconds.
    #[serde(default = "default_interval")]
    pub status_interval: u32,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl StatusbarConfig {
    pub fn new(left: Vec<Segment>, right: Vec<Segment>, window_list: WindowListConfig) -> Self {
        Self {
            left: SideConfig::new(left),
            right: SideConfig::new(right),
            window_list,
            separator: SeparatorSet::default(),
            left_end_separator: None,
            right_end_separator: None,
            provider_args: BTreeMap::new(),
            left_max_length: default_left_length(),
            right_max_length: default_right_length(),
            default_bg: Color::TERMINAL,
            default_fg: Color::TERMINAL,
            default_style: None,
            status_interval: default_interval(),
            visible: true,
        }
    }

    pub fn side(&self, side: Side) -> &SideConfig {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// End-of-line separator set for `side`, already resolved.
    pub fn end_separator(&self, side: Side) -> &SeparatorSet {
        let end = match side {
            Side::Left => self.left_end_separator.as_ref(),
            Side::Right => self.right_end_separator.as_ref(),
        };
        end.unwrap_or(&self.separator)
    }

    /// `status-style`: the default style, or one built from the default
    /// colours.
    pub fn status_style(&self) -> Style {
        match &self.default_style {
            Some(style) => Style {
                fg: Some(style.fg.clone().unwrap_or_else(|| self.default_fg.clone())),
                bg: Some(style.bg.clone().unwrap_or_else(|| self.default_bg.clone())),
                ..style.clone()
            },
            None => Style::new().bg(self.default_bg.clone()).fg(self.default_fg.clone()),
        }
    }
}

// ─── Styler options ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneBorder {
    Off,
    #[default]
    Top,
    Bottom,
}

/// `pane-border-lines`. Double and heavy fall back to ACS line drawing
/// without UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneBorderLine {
    #[default]
    Single,
    Double,
    Heavy,
    Simple,
    Number,
}

impl fmt::Display for PaneBorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaneBorder::Off => "off",
            PaneBorder::Top => "top",
            PaneBorder::Bottom => "bottom",
        })
    }
}

impl fmt::Display for PaneBorderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaneBorderLine::Single => "single",
            PaneBorderLine::Double => "double",
            PaneBorderLine::Heavy => "heavy",
            PaneBorderLine::Simple => "simple",
            PaneBorderLine::Number => "number",
        })
    }
}

fn default_rename_format() -> String {
    "#{pane_current_command}".to_string()
}
fn default_border_content() -> String {
    "#{pane_index} #{pane_current_command}".to_string()
}

/// Session-wide tmux options set alongside the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylerOptions {
    #[serde(default = "default_true")]
    pub renumber_windows: bool,
    #[serde(default = "default_true")]
    pub auto_rename_window: bool,
    /// `automatic-rename-format`, in tmux format syntax.
    #[serde(default = "default_rename_format")]
    pub auto_rename_format: String,
    #[serde(default)]
    pub pane_border: PaneBorder,
    #[serde(default)]
    pub pane_border_line: PaneBorderLine,
    #[serde(default = "default_border_content")]
    pub pane_border_content: String,
}

impl Default for StylerOptions {
    fn default() -> Self {
        Self {
            renumber_windows: true,
            auto_rename_window: true,
            auto_rename_format: default_rename_format(),
            pane_border: PaneBorder::default(),
            pane_border_line: PaneBorderLine::default(),
            pane_border_content: default_border_content(),
        }
    }
}

/// Everything the user configures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylerConfig {
    pub statusbar: StatusbarConfig,
    #[serde(default)]
    pub options: StylerOptions,
}

impl StylerConfig {
    pub fn new(statusbar: StatusbarConfig) -> Self {
        Self { statusbar, options: StylerOptions::default() }
    }

    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|error| ConfigError::Toml { path: origin.to_path_buf(), error })
    }
}

// ─── Files ──────────────────────────────────────────────────────────────────

/// `$XDG_CONFIG_HOME/tmux/tmux-styler` (or `~/.config/...`) and
/// `~/.tmux/tmux-styler`, in lookup order.
pub fn config_dirs() -> Vec<PathBuf> {
    let mut dirs_found = Vec::new();
    let xdg = env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")));
    if let Some(xdg) = xdg {
        dirs_found.push(xdg.join("tmux").join(APP_DIR));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_found.push(home.join(".tmux").join(APP_DIR));
    }
    dirs_found
}

/// First existing `config.toml`, if any.
pub fn user_config_path() -> Option<PathBuf> {
    config_dirs()
        .into_iter()
        .map(|d| d.join(CONFIG_FILE))
        .find(|p| p.exists())
}

pub fn snapshot_path() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join(SNAPSHOT_FILE))
        .ok_or(ConfigError::NoDirectory("data"))
}

pub fn load_user_config(path: Option<&Path>) -> Result<StylerConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => user_config_path().ok_or_else(|| {
            let looked: Vec<String> =
                config_dirs().iter().map(|d| d.display().to_string()).collect();
            ConfigError::NotFound(looked.join(", "))
        })?,
    };
    let content =
        fs::read_to_string(&path).map_err(|error| ConfigError::Io { path: path.clone(), error })?;
    StylerConfig::from_toml_str(&content, &path)
}

pub fn write_snapshot(config: &StylerConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|error| ConfigError::Io { path: parent.to_path_buf(), error })?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|error| ConfigError::Json { path: path.to_path_buf(), error })?;
    fs::write(path, json).map_err(|error| ConfigError::Io { path: path.to_path_buf(), error })?;
    info!(path = %path.display(), "snapshot written");
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<StylerConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|error| ConfigError::Io { path: path.to_path_buf(), error })?;
    serde_json::from_str(&content)
        .map_err(|error| ConfigError::Json { path: path.to_path_buf(), error })
}
