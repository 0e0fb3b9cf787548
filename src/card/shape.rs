//! Card shape names.
//!
//! A shape describes the layout of a card's image area. The three basic
//! shapes come in a plain and an "overflow" flavour (used by horizontally
//! scrolling rows), and the "mixed" shapes are picked from the primary
//! image's aspect ratio.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Aspect ratio at or above which an image is laid out as a backdrop.
pub const BACKDROP_ASPECT_RATIO: f64 = 1.33;

/// Aspect ratio at or below which an image is laid out as a portrait.
pub const PORTRAIT_ASPECT_RATIO: f64 = 0.71;

/// Mixed shape used for wide images.
pub const MIXED_BACKDROP: &str = "mixedBackdrop";

/// Mixed shape used for roughly square images, and when the ratio is unknown.
pub const MIXED_SQUARE: &str = "mixedSquare";

/// Mixed shape used for tall images.
pub const MIXED_PORTRAIT: &str = "mixedPortrait";

/// The three basic card shapes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// 1:1 image area (albums, artists, channels)
    Square,

    /// 16:9 image area (episodes, thumbs)
    Backdrop,

    /// 2:3 image area (movies, series posters)
    Portrait,
}

impl ShapeKind {
    /// Shape name for this kind, with or without the overflow prefix.
    #[must_use]
    pub const fn shape(self, overflow: bool) -> &'static str {
        match self {
            Self::Square => square_shape(overflow),
            Self::Backdrop => backdrop_shape(overflow),
            Self::Portrait => portrait_shape(overflow),
        }
    }
}

/// Square shape name.
#[must_use]
pub const fn square_shape(overflow: bool) -> &'static str {
    if overflow { "overflowSquare" } else { "square" }
}

/// Backdrop shape name.
#[must_use]
pub const fn backdrop_shape(overflow: bool) -> &'static str {
    if overflow {
        "overflowBackdrop"
    } else {
        "backdrop"
    }
}

/// Portrait shape name.
#[must_use]
pub const fn portrait_shape(overflow: bool) -> &'static str {
    if overflow {
        "overflowPortrait"
    } else {
        "portrait"
    }
}

/// Pick a mixed shape from the primary image aspect ratio.
///
/// - `None` resolves to [`MIXED_SQUARE`]
/// - `ratio >= 1.33` resolves to [`MIXED_BACKDROP`]
/// - `0.71 < ratio < 1.33` resolves to [`MIXED_SQUARE`]
/// - `ratio <= 0.71` resolves to [`MIXED_PORTRAIT`]
///
/// # Examples
///
/// ```
/// # use cardkit::card::resolve_mixed_shape_by_aspect_ratio;
/// assert_eq!(resolve_mixed_shape_by_aspect_ratio(Some(16.0 / 9.0)), "mixedBackdrop");
/// assert_eq!(resolve_mixed_shape_by_aspect_ratio(None), "mixedSquare");
/// ```
#[must_use]
pub fn resolve_mixed_shape_by_aspect_ratio(primary_image_aspect_ratio: Option<f64>) -> &'static str {
    let Some(ratio) = primary_image_aspect_ratio else {
        return MIXED_SQUARE;
    };

    if ratio >= BACKDROP_ASPECT_RATIO {
        MIXED_BACKDROP
    } else if ratio > PORTRAIT_ASPECT_RATIO {
        MIXED_SQUARE
    } else {
        MIXED_PORTRAIT
    }
}
