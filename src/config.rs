//! Preferences file support
//!
//! Loads settings from ~/.zzlogview.toml (or %USERPROFILE%\.zzlogview.toml on Windows)
//!
//! Example:
//! ```toml
//! show-line-numbers = true
//! text-size = 18.0
//!
//! [colors]
//! keyword = "bright-yellow"
//! search-current = "bright-red"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};
use crate::highlight::{Category, Color, Palette};

pub const DEFAULT_TEXT_SIZE: f32 = 18.0;
pub const MIN_TEXT_SIZE: f32 = 10.0;
pub const MAX_TEXT_SIZE: f32 = 32.0;
pub const TEXT_SIZE_STEP: f32 = 2.0;

const CONFIG_FILE_NAME: &str = ".zzlogview.toml";
const LOG_FILE_NAME: &str = ".zzlogview.log";

/// On-disk layout; every key is optional
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_line_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_size: Option<f32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    colors: BTreeMap<String, String>,
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// Text size, kept within [MIN_TEXT_SIZE, MAX_TEXT_SIZE]
    pub text_size: f32,
    /// Color overrides by category name, as written in the file
    pub colors: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            text_size: DEFAULT_TEXT_SIZE,
            colors: BTreeMap::new(),
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Get the log file path; `ZZLOGVIEW_LOG` overrides the default
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ZZLOGVIEW_LOG") {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        home_dir().map(|home| home.join(LOG_FILE_NAME))
    }

    /// Load configuration, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded preferences");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default preferences");
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents).map_err(|reason| ViewerError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse config file contents
    fn parse(contents: &str) -> std::result::Result<Self, String> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| e.to_string())?;

        let mut config = Config::default();
        if let Some(show) = file.show_line_numbers {
            config.show_line_numbers = show;
        }
        if let Some(size) = file.text_size {
            if size.is_finite() {
                config.text_size = size.clamp(MIN_TEXT_SIZE, MAX_TEXT_SIZE);
            }
        }
        config.colors = file.colors;
        Ok(config)
    }

    /// Save current configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let file = ConfigFile {
            show_line_numbers: Some(self.show_line_numbers),
            text_size: Some(self.text_size),
            colors: self.colors.clone(),
        };
        let contents = format!(
            "# zzlogview preferences\n# Generated automatically\n\n{}",
            toml::to_string(&file)?
        );
        fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "saved preferences");
        Ok(())
    }

    /// Step the text size up; returns false when already at the maximum
    pub fn increase_text_size(&mut self) -> bool {
        if self.text_size < MAX_TEXT_SIZE {
            self.text_size = (self.text_size + TEXT_SIZE_STEP).min(MAX_TEXT_SIZE);
            true
        } else {
            false
        }
    }

    /// Step the text size down; returns false when already at the minimum
    pub fn decrease_text_size(&mut self) -> bool {
        if self.text_size > MIN_TEXT_SIZE {
            self.text_size = (self.text_size - TEXT_SIZE_STEP).max(MIN_TEXT_SIZE);
            true
        } else {
            false
        }
    }

    /// Build the highlight palette, applying color overrides
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        for (name, value) in &self.colors {
            match (Category::from_name(name), Color::from_name(value)) {
                (Some(category), Some(color)) => palette.set_color(category, color),
                _ => tracing::warn!(category = %name, color = %value, "ignoring color override"),
            }
        }
        palette
    }
}
