//! API utilities for talking to the shop backend
//!
//! Endpoints are served from the same origin as the page, so configured paths
//! are resolved against the current location.

use contracts::system::profile::CSRF_FIELD;
use wasm_bindgen::JsCast;

/// Cookie the backend issues the CSRF token in
pub const CSRF_COOKIE: &str = "csrftoken";

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "http://localhost:8000" or "https://fastcopy.example"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a configured path
///
/// Absolute URLs are returned unchanged.
///
/// # Example
/// ```ignore
/// let url = api_url("/calculate-pages/");
/// ```
pub fn api_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", api_base(), path)
    }
}

/// CSRF token for form posts
///
/// Read from the `csrftoken` cookie, falling back to a hidden
/// `csrfmiddlewaretoken` input rendered by the host page. Empty when neither
/// exists; the backend then rejects the request and the caller shows a toast.
pub fn csrf_token() -> String {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return String::new(),
    };

    let from_cookie = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|d| d.cookie().ok())
        .and_then(|cookies| cookie_value(&cookies, CSRF_COOKIE));
    if let Some(token) = from_cookie {
        return token;
    }

    document
        .query_selector(&format!("input[name='{}']", CSRF_FIELD))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Value of `name` in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name || value.is_empty() {
            return None;
        }
        Some(
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=Xy9%2Bz; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("Xy9+z"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_value_ignores_empty_and_prefix_matches() {
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), None);
        assert_eq!(cookie_value("xcsrftoken=1", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
