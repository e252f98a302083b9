//! URL rewriting for search/genre filters and full-page navigation.
//!
//! Filters are applied server-side, so every change is a full page load to
//! the current URL with its query string rewritten.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use url::Url;

/// Query parameter carrying the free-text search.
pub const SEARCH_PARAM: &str = "search";
/// Query parameter carrying the genre filter.
pub const GENRE_PARAM: &str = "genre";

/// Set (`Some`) or remove (`None`) `key` in the query string of `href`.
///
/// Setting replaces the first occurrence in place and drops any repeats, or
/// appends when the key is absent. Other parameters keep their order.
///
/// # Errors
///
/// Returns an error if `href` is not an absolute URL.
pub fn with_query_param(href: &str, key: &str, value: Option<&str>) -> Result<String, url::ParseError> {
    let mut url = Url::parse(href)?;
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in url.query_pairs() {
        if k != key {
            pairs.push((k.into_owned(), v.into_owned()));
        } else if let Some(value) = value
            && !replaced
        {
            pairs.push((k.into_owned(), value.to_owned()));
            replaced = true;
        }
    }
    if let Some(value) = value
        && !replaced
    {
        pairs.push((key.to_owned(), value.to_owned()));
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    Ok(url.into())
}

/// URL that applies a search for `query` (trimmed; empty still sets the key).
///
/// # Errors
///
/// Returns an error if `href` is not an absolute URL.
pub fn search_url(href: &str, query: &str) -> Result<String, url::ParseError> {
    with_query_param(href, SEARCH_PARAM, Some(query.trim()))
}

/// URL that applies `genre`, or clears the genre filter when it is empty.
///
/// # Errors
///
/// Returns an error if `href` is not an absolute URL.
pub fn genre_filter_url(href: &str, genre: Option<&str>) -> Result<String, url::ParseError> {
    with_query_param(href, GENRE_PARAM, genre.filter(|g| !g.is_empty()))
}

/// Current page URL, if running in a browser.
pub fn current_href() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Navigate the page to `url`.
pub fn navigate(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Reload the current page.
pub fn reload() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("reload failed: {e:?}");
            }
        }
    }
}
