//! Configuration loading for layouts.
//!
//! `defaults/docterm.default.toml` is compiled in, so a layout can always be built
//! without touching the filesystem. [Loader] stacks user files and typed overrides of
//! the width, debug flag and theme colors on top of it.
//!
//! Debug rendering is a field of the configuration, passed to each layout call, rather
//! than process-wide state.

use crate::docterm::error::RenderError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_TOML: &str = include_str!("../../defaults/docterm.default.toml");

/// Top-level configuration consumed by [Layout](crate::docterm::layout::Layout).
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Target column width. Zero is rejected when a layout is built.
    pub width: usize,
    /// Label blocks with their names and highlight space tokens.
    pub debug: bool,
}

/// Color names, in any form ratatui's `Color::from_str` accepts
/// (`"red"`, `"lightblue"`, `"#ff8800"`, `"42"`).
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    pub directive: String,
    pub inline_code: String,
    pub unimplemented: String,
    pub parameter: String,
    pub type_annotation: String,
    pub signature: String,
    pub panel: String,
    pub debug_space: String,
    pub block_label: String,
}

impl ThemeConfig {
    /// Parse one entry, naming it in the error if it is not a color.
    pub fn color(key: &str, value: &str) -> Result<Color, RenderError> {
        Color::from_str(value).map_err(|_| RenderError::InvalidColor {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl RenderConfig {
    /// Same configuration with another target width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.layout.width = width;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.layout.debug = debug;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            layout: LayoutConfig {
                width: 80,
                debug: false,
            },
            theme: ThemeConfig {
                directive: "magenta".to_string(),
                inline_code: "cyan".to_string(),
                unimplemented: "red".to_string(),
                parameter: "yellow".to_string(),
                type_annotation: "green".to_string(),
                signature: "lightblue".to_string(),
                panel: "blue".to_string(),
                debug_space: "blue".to_string(),
                block_label: "darkgray".to_string(),
            },
        }
    }
}

/// Theme entries that accept a color, in `[theme]` table order.
pub const THEME_KEYS: &[&str] = &[
    "directive",
    "inline_code",
    "unimplemented",
    "parameter",
    "type_annotation",
    "signature",
    "panel",
    "debug_space",
    "block_label",
];

/// Builds a [RenderConfig] out of layered sources, later layers winning:
///
///     embedded defaults → TOML files → explicit overrides
///
/// Keys are the dotted paths of [RenderConfig]: `layout.width`, `layout.debug`,
/// `theme.<entry>`.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file with `[layout]` and/or `[theme]` tables. The file must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Like [Loader::with_file], for per-user files that may not be there.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Target width, in columns.
    pub fn width(self, width: usize) -> Result<Self, RenderError> {
        let width = i64::try_from(width).map_err(|_| RenderError::InvalidWidth(width))?;
        self.set_override("layout.width", width)
    }

    pub fn debug(self, debug: bool) -> Result<Self, RenderError> {
        self.set_override("layout.debug", debug)
    }

    /// Override one theme entry. The value is checked right away so the error names
    /// the entry.
    pub fn color(self, entry: &str, value: &str) -> Result<Self, RenderError> {
        if !THEME_KEYS.contains(&entry) {
            return Err(ConfigError::NotFound(format!("theme.{entry}")).into());
        }
        ThemeConfig::color(entry, value)?;
        self.set_override(&format!("theme.{entry}"), value)
    }

    /// Override any key by its dotted path, e.g. `("layout.width", 100)`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, RenderError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RenderConfig, RenderError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<RenderConfig, RenderError> {
    Loader::new().build()
}
