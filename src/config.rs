//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/codepane/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::style::{BraceMatchStyle, Color, FontSpec, TextStyle};
use crate::widget::WrapMode;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub calltips: CalltipConfig,
    pub completion: CompletionConfig,
    pub brace_match: BraceMatchStyle,
    pub console: ConsoleConfig,
    /// Caret width in pixels
    pub caret_width: u32,
    pub wrap_mode: WrapMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            calltips: CalltipConfig::default(),
            completion: CompletionConfig::default(),
            brace_match: BraceMatchStyle::default(),
            console: ConsoleConfig::default(),
            caret_width: 2,
            wrap_mode: WrapMode::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalltipConfig {
    pub enabled: bool,
    /// Longest calltip body in characters
    pub size: usize,
    pub font: FontSpec,
}

impl Default for CalltipConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 600,
            font: FontSpec::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub enabled: bool,
    /// Enter accepts the current item (Tab always does)
    pub enter_selects: bool,
    pub case_sensitive: bool,
    /// Show the popup even for a single candidate
    pub show_single: bool,
    /// Popup (width, height) in pixels
    pub size: (f32, f32),
    pub font: FontSpec,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            enter_selects: false,
            case_sensitive: false,
            show_single: true,
            size: (300.0, 180.0),
            font: FontSpec::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub font: FontSpec,
    pub default: TextStyle,
    pub prompt: TextStyle,
    pub error: TextStyle,
    pub traceback_link: TextStyle,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            default: TextStyle::plain(Color::BLACK),
            prompt: TextStyle::plain(Color::rgb(0x00, 0xAA, 0x00)).bold(),
            error: TextStyle::plain(Color::RED),
            traceback_link: TextStyle::plain(Color::rgb(0x00, 0x00, 0xFF)).underlined(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// Load from `path`, falling back to defaults (with a warning) on any error
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = self.to_yaml()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}
