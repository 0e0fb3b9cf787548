//! # cardkit
//!
//! Presentation helpers for media-client card UIs.
//!
//! Every helper is a small, pure mapping from simple inputs to the string or
//! boolean the renderer needs. The two helpers that depend on the browser
//! environment (display width, current location) take it as an injected
//! [`environment::DisplaySource`] or [`environment::LocationSource`].
//!
//! ## Modules
//!
//! - [`card`] - Item type classification, card shapes and CSS class composition
//! - [`environment`] - Ambient display and location sources, resizability check
//! - [`utils`] - String coercion and query string extraction
//! - [`config`] - TOML configuration file with card defaults and environment values
//! - [`output`] - JSON output structures for the command-line front end

pub mod card;
pub mod config;
pub mod environment;
pub mod output;
pub mod utils;

pub use card::{
    CardClassOptions, ShapeKind, backdrop_shape, card_css_class_list, is_live_tv_naming,
    is_music_item_type, portrait_shape, resolve_card_css_class_names,
    resolve_mixed_shape_by_aspect_ratio, square_shape,
};
pub use environment::{
    DisplaySource, Environment, Location, LocationSource, Screen, is_resizable,
};
pub use utils::{location_search, parameter_by_name, query_parameter, to_boolean, to_float};
