/*!
Application settings.

Every field has a default, so the program runs without any configuration. An optional
`campus_navigation.json` in the working directory overrides individual values; `main` falls back to
the defaults when that file cannot be used.
*/

use std::{
    fs,
    io::{self, ErrorKind},
    path::Path,
};

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogConfig;

pub const CONFIG_FILE: &str = "campus_navigation.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Read(#[from] io::Error),
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads the config file at `path`. A missing file gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => Ok(Self::from_json(&json)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Read(e)),
        }
    }

    /// Like `load`, but an unusable file yields the defaults. The error is handed back so it can be
    /// logged once logging is up.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

/// Color palette of the campus window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Palette {
    #[default]
    Latte,
    Mocha,
}

impl Palette {
    pub fn theme(&self) -> catppuccin_egui::Theme {
        match self {
            Palette::Latte => catppuccin_egui::LATTE,
            Palette::Mocha => catppuccin_egui::MOCHA,
        }
    }
}

/// Sizes and styling of the campus drawing. Node sizes are in map units, everything else in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub node_width: f32,
    pub node_height: f32,
    pub node_font_size: f32,
    pub weight_font_size: f32,
    pub title_font_size: f32,
    pub edge_width: f32,
    pub highlight_width: f32,
    pub margin: f32,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1400.0,
            window_height: 1000.0,
            node_width: 3.4,
            node_height: 1.5,
            node_font_size: 12.0,
            weight_font_size: 14.0,
            title_font_size: 20.0,
            edge_width: 1.5,
            highlight_width: 3.5,
            margin: 24.0,
            palette: Palette::Latte,
        }
    }
}

impl RenderConfig {
    pub fn node_fill(&self) -> Color32 {
        let green = self.palette.theme().green;
        Color32::from_rgba_unmultiplied(green.r(), green.g(), green.b(), 110)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = include_str!("../test_data/config_override.json");
        let config = AppConfig::from_json(json).unwrap();

        assert_eq!(config.render.palette, Palette::Mocha);
        assert_eq!(config.render.node_width, 4.0);
        assert_eq!(config.render.node_height, RenderConfig::default().node_height);
        assert_eq!(config.log.console_level, log::LevelFilter::Info);
    }

    #[test]
    fn test_load_reads_file() {
        let config = AppConfig::load("test_data/config_override.json").unwrap();
        assert_eq!(config.render.palette, Palette::Mocha);
        assert_eq!(config.render.node_width, 4.0);
        assert_eq!(config.render.window_width, 1400.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load("test_data/does_not_exist.json").unwrap();
        assert_eq!(config.render.window_width, 1400.0);
        assert_eq!(config.render.palette, Palette::Latte);
        assert_eq!(config.log.console_level, log::LevelFilter::Warn);

        let (config, error) = AppConfig::load_or_default("test_data/does_not_exist.json");
        assert!(error.is_none());
        assert_eq!(config.render.palette, Palette::Latte);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let err = AppConfig::load("test_data/malformed_config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let (config, error) = AppConfig::load_or_default("test_data/malformed_config.json");
        assert!(matches!(error, Some(ConfigError::Parse(_))));
        assert_eq!(config.render.palette, Palette::Latte);
        assert_eq!(config.render.node_width, 3.4);
    }

    #[test]
    fn test_unreadable_path_is_a_read_error() {
        let (config, error) = AppConfig::load_or_default("test_data");
        assert!(matches!(error, Some(ConfigError::Read(_))));
        assert_eq!(config.render.window_height, 1000.0);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = AppConfig::from_json(r#"{ "render": { "palette": "Sepia" } }"#).unwrap_err();
        assert!(err.is_data());
    }
}
