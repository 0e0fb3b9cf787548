//! CSS class composition for cards.
//!
//! The renderer asks for a single `class` attribute per card. The tokens are
//! always emitted in the same order so that generated markup is stable and
//! easy to diff.

use serde::Deserialize;

use crate::card::naming::is_music_item_type;

/// Options describing the rendering context of a single card.
///
/// The optional strings are skipped when absent or empty. `item_type` is
/// always compared against the music item types, so an empty item type is
/// treated like any other non-music item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CardClassOptions {
    /// Shape name, emitted as `{shape}Card`
    pub shape: Option<String>,

    /// Extra class requested by the card list
    pub card_css_class: Option<String>,

    /// Extra class requested by the caller
    pub card_class: Option<String>,

    /// Tag the card is rendered as (`"button"` makes it an item action)
    pub tag_name: Option<String>,

    /// Item type label from the media server
    pub item_type: String,

    /// Number of children (episodes, tracks, ...) of a grouped item
    pub child_count: Option<u32>,

    /// Whether the child count indicator is shown on the card
    pub show_child_count_indicator: bool,

    /// Whether the layout targets a TV
    pub is_tv: bool,

    /// Whether focused cards are animated (TV only)
    pub enable_focus_transform: bool,

    /// Whether the layout targets a desktop pointer device
    pub is_desktop: bool,
}

/// Returns the value of an optional class field if it is set and non-empty.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Build the ordered list of CSS classes for a card.
///
/// Tokens are emitted in this order, each one only when its condition holds:
///
/// 1. `card`
/// 2. `{shape}Card`
/// 3. `card_css_class`
/// 4. `card_class`
/// 5. `card-hoverable` (desktop)
/// 6. `show-focus`, then `show-animation` when focus transforms are enabled (TV)
/// 7. `groupedCard` (child count indicator with a non-zero child count)
/// 8. `card-withuserdata` (anything but music items)
/// 9. `itemAction` (rendered as a button)
///
/// Duplicates are kept as-is.
#[must_use]
pub fn card_css_class_list(opts: &CardClassOptions) -> Vec<String> {
    let mut class_names = vec!["card".to_string()];

    if let Some(shape) = non_empty(opts.shape.as_ref()) {
        class_names.push(format!("{shape}Card"));
    }

    if let Some(card_css_class) = non_empty(opts.card_css_class.as_ref()) {
        class_names.push(card_css_class.to_string());
    }

    if let Some(card_class) = non_empty(opts.card_class.as_ref()) {
        class_names.push(card_class.to_string());
    }

    if opts.is_desktop {
        class_names.push("card-hoverable".to_string());
    }

    if opts.is_tv {
        class_names.push("show-focus".to_string());

        if opts.enable_focus_transform {
            class_names.push("show-animation".to_string());
        }
    }

    if opts.show_child_count_indicator && opts.child_count.is_some_and(|count| count != 0) {
        class_names.push("groupedCard".to_string());
    }

    if !is_music_item_type(&opts.item_type) {
        class_names.push("card-withuserdata".to_string());
    }

    if opts.tag_name.as_deref() == Some("button") {
        class_names.push("itemAction".to_string());
    }

    class_names
}

/// Build the space-separated `class` attribute value for a card.
///
/// # Examples
///
/// ```
/// # use cardkit::card::{CardClassOptions, resolve_card_css_class_names};
/// let opts = CardClassOptions {
///     shape: Some("portrait".to_string()),
///     item_type: "Movie".to_string(),
///     is_desktop: true,
///     ..CardClassOptions::default()
/// };
/// assert_eq!(
///     resolve_card_css_class_names(&opts),
///     "card portraitCard card-hoverable card-withuserdata"
/// );
/// ```
#[must_use]
pub fn resolve_card_css_class_names(opts: &CardClassOptions) -> String {
    card_css_class_list(opts).join(" ")
}
