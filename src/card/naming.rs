//! Item type classification.
//!
//! Item types are opaque labels coming from the media server. A handful of
//! them change how a card is named or decorated, and those are kept here as
//! closed constant sets so the rule lives in one place.

/// Item types that use live TV naming (programs, timers and recordings).
pub const LIVE_TV_ITEM_TYPES: [&str; 3] = ["Program", "Timer", "Recording"];

/// Item types that belong to the music family and carry no user data overlay.
pub const MUSIC_ITEM_TYPES: [&str; 3] = ["MusicAlbum", "MusicArtist", "Audio"];

/// Check whether an item type uses live TV naming.
///
/// The comparison is exact: no trimming and no case folding, so `"program"`
/// is not a live TV item type.
///
/// # Examples
///
/// ```
/// # use cardkit::card::is_live_tv_naming;
/// assert!(is_live_tv_naming("Recording"));
/// assert!(!is_live_tv_naming("Movie"));
/// ```
#[must_use]
pub fn is_live_tv_naming(item_type: &str) -> bool {
    LIVE_TV_ITEM_TYPES.contains(&item_type)
}

/// Check whether an item type belongs to the music family.
#[must_use]
pub fn is_music_item_type(item_type: &str) -> bool {
    MUSIC_ITEM_TYPES.contains(&item_type)
}
