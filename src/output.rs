//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! result of a single command. When the `--json` flag is passed, these
//! structures are serialized to stdout as a single JSON object, replacing the
//! plain-text value.

use std::fmt::{Display, Formatter, Result};

use serde::{Serialize, Serializer};

/// A single computed value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputValue {
    /// A string result (class names, shape names, query values)
    Text(String),

    /// A boolean result (classification, resizability, coercion)
    Flag(bool),

    /// A numeric result (float coercion)
    ///
    /// JSON has no literal for non-finite numbers, so those serialize as
    /// `"Infinity"`, `"-Infinity"` or `"NaN"`.
    #[serde(serialize_with = "serialize_number")]
    Number(f64),
}

/// Spelling of a non-finite number, matching the accepted input `Infinity`.
fn non_finite_name(number: f64) -> Option<&'static str> {
    if number.is_nan() {
        Some("NaN")
    } else if number.is_infinite() {
        Some(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        None
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_number<S: Serializer>(
    number: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match non_finite_name(*number) {
        Some(name) => serializer.serialize_str(name),
        None => serializer.serialize_f64(*number),
    }
}

impl Display for OutputValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Number(number) => match non_finite_name(*number) {
                Some(name) => write!(f, "{name}"),
                None => write!(f, "{number}"),
            },
        }
    }
}

impl From<String> for OutputValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for OutputValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for OutputValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<f64> for OutputValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Top-level JSON output emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// Name of the command that produced the result (e.g. `"classes"`).
    pub command: String,

    /// The computed value.
    pub result: OutputValue,

    /// Ordered class tokens. Present only for the `classes` command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
}

impl JsonOutput {
    /// Build a `JsonOutput` for a command with a single value.
    #[must_use]
    pub fn new(command: &str, result: impl Into<OutputValue>) -> Self {
        Self {
            command: command.to_string(),
            result: result.into(),
            classes: None,
        }
    }

    /// Build a `JsonOutput` for the `classes` command from its ordered tokens.
    #[must_use]
    pub fn from_class_list(classes: Vec<String>) -> Self {
        Self {
            command: "classes".to_string(),
            result: OutputValue::Text(classes.join(" ")),
            classes: Some(classes),
        }
    }
}
