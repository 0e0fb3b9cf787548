//! Card presentation helpers.
//!
//! This module groups everything the card renderer needs to decide how a card
//! looks, without touching any markup itself.
//!
//! ## Main Parts
//!
//! - [`naming`] - Item type classification (live TV, music)
//! - [`shape`] - Shape names and mixed shape selection by aspect ratio
//! - [`classes`] - Ordered CSS class composition from [`CardClassOptions`]

pub mod classes;
pub mod naming;
pub mod shape;

pub use classes::{CardClassOptions, card_css_class_list, resolve_card_css_class_names};
pub use naming::{LIVE_TV_ITEM_TYPES, MUSIC_ITEM_TYPES, is_live_tv_naming, is_music_item_type};
pub use shape::{
    ShapeKind, backdrop_shape, portrait_shape, resolve_mixed_shape_by_aspect_ratio, square_shape,
};
