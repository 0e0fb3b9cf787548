//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library. Every library helper is
//! exposed as a subcommand so it can be used from scripts and build steps.
//!
//! Helper methods accept a [`FileConfig`] reference so that config-file values
//! act as defaults that CLI arguments can override (layered config).

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use cardkit::card::{CardClassOptions, ShapeKind};
use cardkit::config::FileConfig;
use cardkit::environment::{Environment, Location, Screen};

/// Command-line arguments describing the card to compute classes for.
///
/// Unset values fall back to the `[card]` section of the config file.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ClassesArgs {
    /// Shape of the card image area (e.g. portrait, overflowBackdrop)
    #[arg(long)]
    shape: Option<String>,

    /// Extra class requested by the card list
    #[arg(long)]
    card_css_class: Option<String>,

    /// Extra class requested by the caller
    #[arg(long)]
    card_class: Option<String>,

    /// Tag the card is rendered as
    ///
    /// A value of `button` marks the card as an item action.
    #[arg(long)]
    tag_name: Option<String>,

    /// Item type label (e.g. Movie, MusicAlbum, Program)
    #[arg(short = 't', long)]
    item_type: Option<String>,

    /// Number of children of a grouped item
    #[arg(short = 'c', long)]
    child_count: Option<u32>,

    /// Show the child count indicator
    #[arg(long = "show-child-count")]
    show_child_count_indicator: bool,

    /// Render for a TV layout
    #[arg(long = "tv")]
    is_tv: bool,

    /// Animate focused cards (TV layout only)
    #[arg(long = "focus-transform")]
    enable_focus_transform: bool,

    /// Render for a desktop layout
    #[arg(long = "desktop")]
    is_desktop: bool,
}

impl ClassesArgs {
    /// Resolve the card options from CLI args and config file.
    ///
    /// - **strings and numbers**: CLI > config > unset
    /// - **booleans**: CLI flag `||` config value `||` `false`
    /// - **item type**: CLI > config > empty string
    #[must_use]
    pub fn card_options(&self, config: &FileConfig) -> CardClassOptions {
        let card = &config.card;

        CardClassOptions {
            shape: self.shape.clone().or_else(|| card.shape.clone()),
            card_css_class: self
                .card_css_class
                .clone()
                .or_else(|| card.card_css_class.clone()),
            card_class: self.card_class.clone().or_else(|| card.card_class.clone()),
            tag_name: self.tag_name.clone().or_else(|| card.tag_name.clone()),
            item_type: self
                .item_type
                .clone()
                .or_else(|| card.item_type.clone())
                .unwrap_or_default(),
            child_count: self.child_count.or(card.child_count),
            show_child_count_indicator: self.show_child_count_indicator
                || card.show_child_count_indicator.unwrap_or(false),
            is_tv: self.is_tv || card.is_tv.unwrap_or(false),
            enable_focus_transform: self.enable_focus_transform
                || card.enable_focus_transform.unwrap_or(false),
            is_desktop: self.is_desktop || card.is_desktop.unwrap_or(false),
        }
    }
}

/// Subcommands that compute a single value.
#[derive(Subcommand, Debug)]
pub enum HelperCommand {
    /// Print the CSS class names of a card
    Classes(ClassesArgs),

    /// Print a basic shape name
    Shape {
        /// Shape kind
        #[arg(value_enum)]
        kind: ShapeKind,

        /// Use the overflow variant
        #[arg(short = 'o', long)]
        overflow: bool,
    },

    /// Print the mixed shape for a primary image aspect ratio
    ///
    /// The ratio is read like a float attribute (`1.5`, `0.66x`); a missing
    /// or unreadable ratio resolves to mixedSquare.
    MixedShape {
        /// Primary image aspect ratio
        #[arg(allow_hyphen_values = true)]
        ratio: Option<String>,
    },

    /// Print whether an item type uses live TV naming
    LiveTv {
        /// Item type label
        item_type: String,
    },

    /// Print whether a window of the given width can still be resized
    Resizable {
        /// Window width in pixels
        #[arg(allow_negative_numbers = true)]
        window_width: f64,
    },

    /// Read a boolean out of a string
    Bool {
        /// Value to read
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// Result when the value is neither `true` nor `false`
        #[arg(short = 'd', long)]
        default: bool,
    },

    /// Read a float out of a string
    Float {
        /// Value to read
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// Result when the value has no numeric prefix
        #[arg(short = 'd', long, default_value_t = 0.0, allow_negative_numbers = true)]
        default: f64,
    },

    /// Print the query string of the current location
    Search,

    /// Print a query parameter from a URL or the current location
    Param {
        /// Parameter name (case-sensitive)
        name: String,

        /// URL or query string to read from instead of the current location
        url: Option<String>,
    },
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(flatten)]
    Helper(HelperCommand),
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Global options control output format, logging and the ambient environment
/// the helpers run against.
#[derive(Parser, Debug)]
#[command(name = "cardkit")]
#[command(
    about = "Compute card CSS classes, card shapes, coerced values and query parameters for media-client UIs"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as a single JSON object for scripting/piping
    #[arg(long, global = true)]
    json: bool,

    /// Log fallback decisions and config loading to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,

    /// Available display width in pixels (overrides the config file)
    #[arg(long, global = true)]
    screen_width: Option<u32>,

    /// Current document location (overrides the config file)
    #[arg(long, global = true)]
    location: Option<String>,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Whether `--verbose` logging is enabled.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Explicit config file path given with `--config`, if any.
    #[must_use]
    pub fn config_file(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Resolve the ambient environment from CLI args and config file.
    ///
    /// Each source is resolved independently: CLI > config file > absent.
    #[must_use]
    pub fn environment(&self, config: &FileConfig) -> Environment {
        let from_config = config.environment.to_environment();

        let screen = self
            .screen_width
            .map(|width| Screen {
                avail_width: f64::from(width),
            })
            .or(from_config.screen);
        let location = self
            .location
            .as_deref()
            .map(Location::parse)
            .or(from_config.location);

        Environment::new(screen, location)
    }
}
