//! Utility functions and helpers.
//!
//! This module contains the small coercion and query string helpers shared by
//! the rest of the crate.

pub mod string;
pub mod url;

pub use self::string::{parse_float, to_boolean, to_float};
pub use self::url::{location_search, parameter_by_name, query_parameter};
