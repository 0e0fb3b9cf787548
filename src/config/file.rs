//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/cardkit/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [card]
//! shape = "portrait"
//! item_type = "Movie"
//! is_desktop = true
//! is_tv = false
//! enable_focus_transform = false
//!
//! [environment]
//! screen_width = 1920
//! location = "https://media.example/web/#/home?tab=1"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::environment::{Environment, Location, Screen};

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default card rendering context
    #[serde(default)]
    pub card: FileCardConfig,

    /// Ambient environment values
    #[serde(default)]
    pub environment: FileEnvironmentConfig,
}

/// Card options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileCardConfig {
    /// Shape name (e.g. `"portrait"`, `"overflowBackdrop"`)
    pub shape: Option<String>,

    /// Extra class requested by the card list
    pub card_css_class: Option<String>,

    /// Extra class requested by the caller
    pub card_class: Option<String>,

    /// Tag the card is rendered as
    pub tag_name: Option<String>,

    /// Item type label
    pub item_type: Option<String>,

    /// Number of children of a grouped item
    pub child_count: Option<u32>,

    /// Whether the child count indicator is shown
    pub show_child_count_indicator: Option<bool>,

    /// Whether the layout targets a TV
    pub is_tv: Option<bool>,

    /// Whether focused cards are animated
    pub enable_focus_transform: Option<bool>,

    /// Whether the layout targets a desktop
    pub is_desktop: Option<bool>,
}

/// Ambient environment values from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileEnvironmentConfig {
    /// Available display width in pixels
    pub screen_width: Option<u32>,

    /// Current document location (absolute URL or bare href)
    pub location: Option<String>,
}

impl FileEnvironmentConfig {
    /// Build the [`Environment`] described by this section.
    ///
    /// Missing values leave the matching source absent.
    #[must_use]
    pub fn to_environment(&self) -> Environment {
        Environment::new(
            self.screen_width.map(|width| Screen {
                avail_width: f64::from(width),
            }),
            self.location.as_deref().map(Location::parse),
        )
    }
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/cardkit/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cardkit").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unknown keys
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    ///
    /// Unlike [`FileConfig::load`], a missing file is an error here.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        debug!("loaded config file {}", path.display());
        Ok(config)
    }
}
