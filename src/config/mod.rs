//! Configuration management for the coach popover

mod keys;

pub use keys::{Action, ActionGroup, KeyBindings, key_name};

use crate::models::DEFAULT_MODEL;
use crate::paths;
use anyhow::{Context, Result};
use ratatui::crossterm::event::KeyModifiers;
use ratatui::text::Line;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Narrowest popover the layout allows
///
/// A longer chord caption raises the limit; see [`Config::min_popover_width`].
pub const MIN_POPOVER_WIDTH: u16 = 28;

/// Problems found while validating a configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A modifier name that is not one of `super`, `meta`, `ctrl`, `alt`
    #[error("unknown command modifier `{0}` (expected super, meta, ctrl or alt)")]
    UnknownModifier(String),

    /// No modifier is configured, so the delete/star chords could never fire
    #[error("at least one command modifier is required")]
    NoCommandModifier,

    /// Popover too narrow for its layout or chord caption
    #[error("popover width {width} is below the minimum of {min}")]
    InvalidWidth {
        /// Configured width
        width: u16,
        /// Narrowest width that fits
        min: u16,
    },
}

/// A key modifier that counts as the "command" key for chords
///
/// Most terminals never report the Command key itself, so the chord
/// modifier is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandModifier {
    /// Command / Windows / Super key (needs keyboard enhancement support)
    Super,
    /// Meta key
    Meta,
    /// Control key
    Ctrl,
    /// Alt / Option key
    Alt,
}

impl CommandModifier {
    /// The crossterm modifier flag for this key
    #[must_use]
    pub const fn flag(self) -> KeyModifiers {
        match self {
            Self::Super => KeyModifiers::SUPER,
            Self::Meta => KeyModifiers::META,
            Self::Ctrl => KeyModifiers::CONTROL,
            Self::Alt => KeyModifiers::ALT,
        }
    }

    /// Short prefix used in hint text (e.g. `^` in `^W`)
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Super => "\u{2318}",
            Self::Meta => "M-",
            Self::Ctrl => "^",
            Self::Alt => "Alt+",
        }
    }
}

impl FromStr for CommandModifier {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "super" | "cmd" | "command" => Ok(Self::Super),
            "meta" => Ok(Self::Meta),
            "ctrl" | "control" => Ok(Self::Ctrl),
            "alt" | "option" => Ok(Self::Alt),
            _ => Err(ConfigError::UnknownModifier(s.to_string())),
        }
    }
}

impl fmt::Display for CommandModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Super => "super",
            Self::Meta => "meta",
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
        };
        f.write_str(name)
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Model names known at startup; the first one is current
    #[serde(default = "default_models")]
    pub models: Vec<String>,

    /// Shortcut rows shown at startup
    #[serde(default = "default_shortcuts")]
    pub shortcuts: Vec<String>,

    /// Modifiers that count as "command" for the delete/star chords
    #[serde(default = "default_command_modifiers")]
    pub command_modifiers: Vec<CommandModifier>,

    /// Popover width in columns
    #[serde(default = "default_popover_width")]
    pub popover_width: u16,

    /// Event poll interval in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_models() -> Vec<String> {
    vec![DEFAULT_MODEL.to_string()]
}

fn default_shortcuts() -> Vec<String> {
    vec!["Shift + Cmd + L".to_string(), "Option + Space".to_string()]
}

fn default_command_modifiers() -> Vec<CommandModifier> {
    vec![
        CommandModifier::Ctrl,
        CommandModifier::Super,
        CommandModifier::Meta,
    ]
}

const fn default_popover_width() -> u16 {
    40
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models: default_models(),
            shortcuts: default_shortcuts(),
            command_modifiers: default_command_modifiers(),
            popover_width: default_popover_width(),
            poll_interval_ms: default_poll_interval(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Check values that serde cannot
    ///
    /// # Errors
    ///
    /// Returns the first problem found
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.command_modifiers.is_empty() {
            return Err(ConfigError::NoCommandModifier);
        }
        let min = self.min_popover_width();
        if self.popover_width < min {
            return Err(ConfigError::InvalidWidth {
                width: self.popover_width,
                min,
            });
        }
        Ok(())
    }

    /// Narrowest popover that fits the layout and the chord caption
    #[must_use]
    pub fn min_popover_width(&self) -> u16 {
        let caption = Line::raw(self.chord_hint()).width();
        let caption = u16::try_from(caption).unwrap_or(u16::MAX).saturating_add(2);
        caption.max(MIN_POPOVER_WIDTH)
    }

    /// Union of all configured command modifiers
    #[must_use]
    pub fn command_mask(&self) -> KeyModifiers {
        self.command_modifiers
            .iter()
            .fold(KeyModifiers::NONE, |mask, m| mask | m.flag())
    }

    /// Hint shown under the shortcut list, e.g. `^W to Delete • ^S to Star`
    ///
    /// Uses the first configured modifier that a typical terminal reports.
    #[must_use]
    pub fn chord_hint(&self) -> String {
        let modifier = self
            .command_modifiers
            .iter()
            .copied()
            .find(|m| *m != CommandModifier::Super)
            .or_else(|| self.command_modifiers.first().copied())
            .unwrap_or(CommandModifier::Ctrl);
        let symbol = modifier.symbol();
        format!("{symbol}W to Delete \u{2022} {symbol}S to Star")
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coach")
            .join("config.json")
    }
}
