//! Configuration for card defaults and the ambient environment.
//!
//! Values come from an optional TOML file; see [`file`] for the format and
//! layering rules.

pub mod file;

pub use file::{FileCardConfig, FileConfig, FileEnvironmentConfig};
