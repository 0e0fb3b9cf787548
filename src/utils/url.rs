//! Query string helpers.
//!
//! Web clients often keep state in the query string, sometimes behind a hash
//! route (`/web/#/details?id=...`) where the browser does not expose it as the
//! location's search. These helpers cover both cases.

use tracing::debug;
use url::{Url, form_urlencoded};

use crate::environment::LocationSource;

/// Query string of the current location, including the leading `?`.
///
/// Prefers the search the location exposes directly. Otherwise everything
/// from the first `?` of the `href` is returned, which also picks up queries
/// placed after a hash route. Returns an empty string when there is no query.
///
/// # Examples
///
/// ```
/// # use cardkit::environment::Location;
/// # use cardkit::utils::location_search;
/// let location = Location::parse("https://media.example/web/#/details?id=42");
/// assert_eq!(location_search(&location), "?id=42");
/// ```
#[must_use]
pub fn location_search(location: &impl LocationSource) -> String {
    if let Some(search) = location.search()
        && !search.is_empty()
    {
        return search;
    }

    location
        .href()
        .and_then(|href| href.find('?').map(|index| href[index..].to_string()))
        .unwrap_or_default()
}

/// Value of the query parameter `name` in `query`.
///
/// `query` may be a bare query (`a=1&b=2`), a search string (`?a=1`) or a full
/// URL. For search strings and URLs everything up to the first `?` is
/// ignored; a bare query is read as is, so values may contain a raw `?`
/// (`next=/a?b=1`). A trailing `#fragment` is always ignored. Values are
/// form-decoded (`%20` and `+` both become a space). The first occurrence
/// wins; a missing parameter yields an empty string.
///
/// # Examples
///
/// ```
/// # use cardkit::utils::query_parameter;
/// assert_eq!(query_parameter("filter", "?filter=true&search=off"), "true");
/// assert_eq!(query_parameter("missing", "?a=1"), "");
/// assert_eq!(query_parameter("next", "next=/a?b=1"), "/a?b=1");
/// ```
#[must_use]
pub fn query_parameter(name: &str, query: &str) -> String {
    let query = strip_url_prefix(query);
    let query = query.split_once('#').map_or(query, |(rest, _)| rest);

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// Drop the part before the query when `query` is a search string or a URL.
///
/// The text before the first `?` counts as a URL prefix when it is empty,
/// starts with `/` or `#`, holds no `=`/`&` pair separators, or when the whole
/// input parses as an absolute URL. Otherwise the input is a bare query.
fn strip_url_prefix(query: &str) -> &str {
    let Some((prefix, rest)) = query.split_once('?') else {
        return query;
    };

    let is_url_prefix = prefix.is_empty()
        || prefix.starts_with(['/', '#'])
        || !prefix.contains(['=', '&'])
        || Url::parse(query).is_ok();

    if is_url_prefix { rest } else { query }
}

/// Value of the query parameter `name`, read from `url` or the current location.
///
/// When `url` is `None` or empty, the query string of `location` is used
/// instead (see [`location_search`]).
#[must_use]
pub fn parameter_by_name(name: &str, url: Option<&str>, location: &impl LocationSource) -> String {
    match url.filter(|u| !u.is_empty()) {
        Some(url) => query_parameter(name, url),
        None => {
            let search = location_search(location);
            debug!("no url given, reading {name:?} from location search {search:?}");
            query_parameter(name, &search)
        }
    }
}
