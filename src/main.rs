//! # cardkit
//!
//! Command-line front end for the cardkit presentation helpers.
//!
//! Each helper of the library is available as a subcommand that prints its
//! result on stdout, either as a plain value or, with `--json`, as a single
//! JSON object. Card defaults and the ambient environment (display width,
//! current location) can be kept in `~/.config/cardkit/config.toml`.
//!
//! ## Usage
//!
//! ```bash
//! # Class names of a desktop portrait card
//! cardkit classes --shape portrait --item-type Movie --desktop
//!
//! # Mixed shape for a 16:9 image
//! cardkit mixed-shape 1.77
//!
//! # Query parameter from the configured location
//! cardkit param serverId --location "https://media.example/web/#/home?serverId=abc"
//! ```

mod cli;

use std::path::Path;

use anyhow::{Ok, Result, bail};
use clap::Parser;
use cardkit::{
    card::{card_css_class_list, is_live_tv_naming, resolve_mixed_shape_by_aspect_ratio},
    config::FileConfig,
    environment::Environment,
    output::JsonOutput,
    utils::{parse_float, to_boolean, to_float},
};
use cli::{Cli, Commands, ConfigCommand, HelperCommand};
use colored::Colorize;
use std::process::exit;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Entry point for the cardkit application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, sets up logging, handles `config` subcommands, and
/// otherwise evaluates a single helper against the layered configuration.
///
/// # Errors
///
/// Returns errors from config file handling or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose());

    let helper = match &args.command {
        Commands::Config { command } => return handle_config_command(*command, args.config_file()),
        Commands::Helper(helper) => helper,
    };

    let file_config = load_config(args.config_file(), args.json())?;
    let environment = args.environment(&file_config);
    debug!("running with {environment:?}");

    let output = evaluate(helper, &file_config, &environment);
    print_output(&output, args.json())
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Compute the result of a helper subcommand.
fn evaluate(helper: &HelperCommand, config: &FileConfig, environment: &Environment) -> JsonOutput {
    match helper {
        HelperCommand::Classes(classes) => {
            JsonOutput::from_class_list(card_css_class_list(&classes.card_options(config)))
        }
        HelperCommand::Shape { kind, overflow } => JsonOutput::new("shape", kind.shape(*overflow)),
        HelperCommand::MixedShape { ratio } => JsonOutput::new(
            "mixed-shape",
            resolve_mixed_shape_by_aspect_ratio(parse_float(ratio.as_deref())),
        ),
        HelperCommand::LiveTv { item_type } => {
            JsonOutput::new("live-tv", is_live_tv_naming(item_type))
        }
        HelperCommand::Resizable { window_width } => {
            JsonOutput::new("resizable", environment.is_resizable(*window_width))
        }
        HelperCommand::Bool { value, default } => {
            JsonOutput::new("bool", to_boolean(value.as_deref(), *default))
        }
        HelperCommand::Float { value, default } => {
            JsonOutput::new("float", to_float(value.as_deref(), *default))
        }
        HelperCommand::Search => JsonOutput::new("search", environment.location_search()),
        HelperCommand::Param { name, url } => JsonOutput::new(
            "param",
            environment.parameter_by_name(name, url.as_deref()),
        ),
    }
}

/// Print a result in JSON or plain form.
fn print_output(output: &JsonOutput, json_mode: bool) -> Result<()> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        println!("{}", output.result);
    }
    Ok(())
}

/// Load the configuration file.
///
/// An explicit `--config` path must load; the default location falls back to
/// defaults with a warning when the file is malformed.
fn load_config(explicit: Option<&Path>, json_mode: bool) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return FileConfig::load_from(path);
    }

    match FileConfig::load() {
        std::result::Result::Ok(config) => Ok(config),
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            Ok(FileConfig::default())
        }
    }
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# cardkit configuration
# All values are unset by default. Uncomment and change as needed.
# Command-line flags always take priority over these values.

[card]
# Shape of the card image area (e.g. "portrait", "overflowBackdrop")
# shape = "portrait"

# Extra classes added after the shape class
# card_css_class = ""
# card_class = ""

# Tag the card is rendered as ("button" adds the itemAction class)
# tag_name = "div"

# Item type label (music types skip the user data overlay)
# item_type = ""

# Child count of grouped items, and whether the indicator is shown
# child_count = 0
# show_child_count_indicator = false

# Layout flags
# is_tv = false
# enable_focus_transform = false
# is_desktop = false

[environment]
# Available display width in pixels, used by `cardkit resizable`
# screen_width = 1920

# Current document location, used by `cardkit search` and `cardkit param`
# location = "https://media.example/web/#/home"
"#;

/// Resolve the config file path: `--config` first, then the platform default.
fn config_file_path(explicit: Option<&Path>) -> Option<std::path::PathBuf> {
    explicit.map(Path::to_path_buf).or_else(FileConfig::config_path)
}

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: ConfigCommand, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match config_file_path(explicit) {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config(explicit)?,
        ConfigCommand::Init => init_config(explicit)?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config(explicit: Option<&Path>) -> Result<()> {
    let path = config_file_path(explicit);

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load_from(p)?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>) -> String {
        val.map_or_else(|| "(unset)  (default)".to_string(), |v| format!("\"{v}\""))
    }
    fn show_bool(val: Option<bool>) -> String {
        val.map_or_else(|| "false  (default)".to_string(), |v| v.to_string())
    }
    fn show_u32(val: Option<u32>) -> String {
        val.map_or_else(|| "(unset)  (default)".to_string(), |v| v.to_string())
    }

    let card = &config.card;
    let env = &config.environment;

    format!(
        "\
[card]
shape                      = {shape}
card_css_class             = {card_css_class}
card_class                 = {card_class}
tag_name                   = {tag_name}
item_type                  = {item_type}
child_count                = {child_count}
show_child_count_indicator = {show_child_count_indicator}
is_tv                      = {is_tv}
enable_focus_transform     = {enable_focus_transform}
is_desktop                 = {is_desktop}

[environment]
screen_width = {screen_width}
location     = {location}",
        shape = show_str(card.shape.as_deref()),
        card_css_class = show_str(card.card_css_class.as_deref()),
        card_class = show_str(card.card_class.as_deref()),
        tag_name = show_str(card.tag_name.as_deref()),
        item_type = card
            .item_type
            .as_deref()
            .map_or_else(|| "\"\"  (default)".to_string(), |v| format!("\"{v}\"")),
        child_count = show_u32(card.child_count),
        show_child_count_indicator = show_bool(card.show_child_count_indicator),
        is_tv = show_bool(card.is_tv),
        enable_focus_transform = show_bool(card.enable_focus_transform),
        is_desktop = show_bool(card.is_desktop),
        screen_width = show_u32(env.screen_width),
        location = show_str(env.location.as_deref()),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config(explicit: Option<&Path>) -> Result<()> {
    let Some(path) = config_file_path(explicit) else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("{} {}", "Config file written to:".green(), path.display());
    Ok(())
}
