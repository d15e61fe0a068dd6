//! Mapping from semantic style tags to concrete terminal styles

use crate::docterm::config::ThemeConfig;
use crate::docterm::error::RenderError;
use crate::docterm::render::StyleTag;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub directive: Style,
    pub inline_code: Style,
    pub unimplemented: Style,
    pub parameter: Style,
    pub type_annotation: Style,
    pub signature: Style,
    /// Panel gutter.
    pub panel: Style,
    /// Space tokens in debug mode.
    pub debug_space: Style,
    /// Block name labels in debug mode.
    pub block_label: Style,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Result<Self, RenderError> {
        let fg = |key: &str, value: &str| -> Result<Style, RenderError> {
            Ok(Style::default().fg(ThemeConfig::color(key, value)?))
        };

        Ok(Theme {
            directive: fg("directive", &config.directive)?,
            inline_code: fg("inline_code", &config.inline_code)?,
            unimplemented: fg("unimplemented", &config.unimplemented)?
                .add_modifier(Modifier::ITALIC),
            parameter: fg("parameter", &config.parameter)?.add_modifier(Modifier::BOLD),
            type_annotation: fg("type_annotation", &config.type_annotation)?,
            signature: fg("signature", &config.signature)?.add_modifier(Modifier::BOLD),
            panel: fg("panel", &config.panel)?,
            debug_space: Style::default().bg(ThemeConfig::color(
                "debug_space",
                &config.debug_space,
            )?),
            block_label: fg("block_label", &config.block_label)?.add_modifier(Modifier::DIM),
        })
    }

    /// Style for a token; plain text (`None`) gets the terminal default.
    pub fn style_for(&self, tag: Option<StyleTag>) -> Style {
        match tag {
            None => Style::default(),
            Some(StyleTag::Directive) => self.directive,
            Some(StyleTag::InlineCode) => self.inline_code,
            Some(StyleTag::Unimplemented) => self.unimplemented,
            Some(StyleTag::Parameter) => self.parameter,
            Some(StyleTag::TypeAnnotation) => self.type_annotation,
            Some(StyleTag::Signature) => self.signature,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            directive: Style::default().fg(Color::Magenta),
            inline_code: Style::default().fg(Color::Cyan),
            unimplemented: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),
            parameter: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            type_annotation: Style::default().fg(Color::Green),
            signature: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            panel: Style::default().fg(Color::Blue),
            debug_space: Style::default().bg(Color::Blue),
            block_label: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        }
    }
}
