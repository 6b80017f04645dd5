//! Configuration management for morsewire tools

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conversion direction
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Edit text, derive Morse
    Text,
    /// Edit Morse, derive text
    Morse,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Text => Direction::Morse,
            Direction::Morse => Direction::Text,
        }
    }
}

/// Prompt color scheme for the interactive session
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// No styling
    Auto,
    Light,
    Dark,
}

impl ColorMode {
    pub fn cycled(self) -> Self {
        match self {
            ColorMode::Auto => ColorMode::Light,
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Auto,
        }
    }
}

/// Tool configuration, loadable from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prompt styling in interactive mode
    pub color_mode: ColorMode,

    /// Surface the interactive session edits first
    pub start_direction: Direction,

    /// Copy one-shot conversion output to the clipboard
    pub copy_on_convert: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            start_direction: Direction::Text,
            copy_on_convert: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Load from an optional path, falling back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
