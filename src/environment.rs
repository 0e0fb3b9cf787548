//! Ambient environment collaborators.
//!
//! A couple of helpers depend on the browser environment: the available width
//! of the display and the current document location. Instead of reading
//! globals, they take these as injected sources so callers (and tests) decide
//! exactly what the environment looks like.

use tracing::debug;
use url::Url;

use crate::utils::url::{location_search, parameter_by_name};

/// Minimum slack, in pixels, between the display and the window for the
/// window to be considered resizable.
pub const RESIZABLE_MARGIN: f64 = 20.0;

/// Source of display geometry.
pub trait DisplaySource {
    /// Available display width in pixels, or `None` when unknown.
    fn available_width(&self) -> Option<f64>;
}

/// Source of the current document location.
///
/// A location either exposes its query string directly (`search`) or only
/// its full `href`, which callers have to scan themselves.
pub trait LocationSource {
    /// Full location URL, if any.
    fn href(&self) -> Option<&str>;

    /// Query string including its leading `?`, if the source exposes one.
    fn search(&self) -> Option<String> {
        None
    }
}

/// Display geometry with a known available width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    /// Available width in pixels
    pub avail_width: f64,
}

impl DisplaySource for Screen {
    fn available_width(&self) -> Option<f64> {
        Some(self.avail_width)
    }
}

impl<T: DisplaySource> DisplaySource for Option<T> {
    fn available_width(&self) -> Option<f64> {
        self.as_ref().and_then(DisplaySource::available_width)
    }
}

impl LocationSource for Url {
    fn href(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn search(&self) -> Option<String> {
        self.query()
            .filter(|query| !query.is_empty())
            .map(|query| format!("?{query}"))
    }
}

impl<T: LocationSource> LocationSource for Option<T> {
    fn href(&self) -> Option<&str> {
        self.as_ref().and_then(LocationSource::href)
    }

    fn search(&self) -> Option<String> {
        self.as_ref().and_then(LocationSource::search)
    }
}

/// The current document location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// A parsed URL exposing its query directly
    Url(Url),

    /// A bare `href` string that could not be parsed as an absolute URL
    Href(String),
}

impl Location {
    /// Build a location from a raw string.
    ///
    /// Absolute URLs become [`Location::Url`]; anything else is kept verbatim
    /// as [`Location::Href`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) => Self::Url(url),
            Err(e) => {
                debug!("location {raw:?} is not an absolute URL ({e}), keeping raw href");
                Self::Href(raw.to_string())
            }
        }
    }
}

impl LocationSource for Location {
    fn href(&self) -> Option<&str> {
        match self {
            Self::Url(url) => url.href(),
            Self::Href(href) => Some(href),
        }
    }

    fn search(&self) -> Option<String> {
        match self {
            Self::Url(url) => url.search(),
            Self::Href(_) => None,
        }
    }
}

/// Check whether the window can still be resized on the current display.
///
/// Returns `true` only when the display width is known and exceeds the
/// window width by more than [`RESIZABLE_MARGIN`] pixels.
///
/// # Examples
///
/// ```
/// # use cardkit::environment::{Screen, is_resizable};
/// assert!(is_resizable(1024.0, &Screen { avail_width: 2048.0 }));
/// assert!(!is_resizable(1024.0, &None::<Screen>));
/// ```
#[must_use]
pub fn is_resizable(window_width: f64, display: &impl DisplaySource) -> bool {
    let Some(screen_width) = display.available_width() else {
        debug!("no display width available, window is not resizable");
        return false;
    };

    screen_width - window_width > RESIZABLE_MARGIN
}

/// Bundle of the ambient sources a caller runs with.
///
/// Either source may be missing; helpers then fall back to their defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    /// Display geometry
    pub screen: Option<Screen>,

    /// Current document location
    pub location: Option<Location>,
}

impl Environment {
    /// Create an environment from optional sources.
    #[must_use]
    pub const fn new(screen: Option<Screen>, location: Option<Location>) -> Self {
        Self { screen, location }
    }

    /// See [`is_resizable`].
    #[must_use]
    pub fn is_resizable(&self, window_width: f64) -> bool {
        is_resizable(window_width, &self.screen)
    }

    /// See [`location_search`].
    #[must_use]
    pub fn location_search(&self) -> String {
        location_search(&self.location)
    }

    /// See [`parameter_by_name`].
    #[must_use]
    pub fn parameter_by_name(&self, name: &str, url: Option<&str>) -> String {
        parameter_by_name(name, url, &self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resizable_with_wide_screen() {
        let screen = Screen {
            avail_width: 2048.0,
        };
        assert!(is_resizable(1024.0, &screen));
    }

    #[test]
    fn test_not_resizable_at_margin() {
        let screen = Screen {
            avail_width: 1044.0,
        };
        assert!(!is_resizable(1024.0, &screen));

        let screen = Screen {
            avail_width: 1045.0,
        };
        assert!(is_resizable(1024.0, &screen));
    }

    #[test]
    fn test_not_resizable_when_window_is_wider() {
        let screen = Screen {
            avail_width: 800.0,
        };
        assert!(!is_resizable(1024.0, &screen));
    }

    #[test]
    fn test_not_resizable_without_screen() {
        assert!(!is_resizable(1024.0, &None::<Screen>));
    }

    #[test]
    fn test_location_parse_url() {
        let location = Location::parse("https://jellyfin.org?search=true&filter=off");

        assert!(matches!(location, Location::Url(_)));
        assert_eq!(location.search().as_deref(), Some("?search=true&filter=off"));
    }

    #[test]
    fn test_location_parse_relative_href() {
        let location = Location::parse("/web/index.html?id=5");

        assert_eq!(location, Location::Href("/web/index.html?id=5".to_string()));
        assert_eq!(location.href(), Some("/web/index.html?id=5"));
        assert!(location.search().is_none());
    }

    #[test]
    fn test_url_without_query_has_no_search() {
        let url = Url::parse("https://jellyfin.org").unwrap();
        assert!(url.search().is_none());

        let url = Url::parse("https://jellyfin.org/?").unwrap();
        assert!(url.search().is_none());
    }

    #[test]
    fn test_absent_location() {
        let location: Option<Location> = None;
        assert!(location.href().is_none());
        assert!(location.search().is_none());
    }

    #[test]
    fn test_environment_delegates() {
        let env = Environment::new(
            Some(Screen {
                avail_width: 1920.0,
            }),
            Some(Location::parse("https://jellyfin.org/web/?serverId=abc")),
        );

        assert!(env.is_resizable(1280.0));
        assert_eq!(env.location_search(), "?serverId=abc");
        assert_eq!(env.parameter_by_name("serverId", None), "abc");
        assert_eq!(env.parameter_by_name("serverId", Some("?serverId=xyz")), "xyz");
    }

    #[test]
    fn test_default_environment_falls_back() {
        let env = Environment::default();

        assert!(!env.is_resizable(0.0));
        assert_eq!(env.location_search(), "");
        assert_eq!(env.parameter_by_name("anything", None), "");
    }
}
