//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current page URL.
///
/// Reads `window.location.search` directly, so it works before the router's
/// query map is initialized.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    find_query_param(&search, key)
}

/// Look up `key` in a query string, with or without the leading `?`.
///
/// The value is URL-decoded; a bare key yields an empty string.
pub fn find_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    for pair in query_string.split('&') {
        match pair.split_once('=') {
            Some((param_key, param_value)) if param_key == key => {
                // '+' is a space in form-encoded queries
                let param_value = param_value.replace('+', " ");
                return Some(
                    urlencoding::decode(&param_value)
                        .map(|v| v.into_owned())
                        .unwrap_or(param_value),
                );
            }
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }

    None
}
