//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::app_config;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location and the
/// configured backend port and prefix.
///
/// # Returns
/// - API base URL like "http://localhost:3000/pr"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let api = &app_config().api;
    build_base(&protocol, &hostname, api.port, &api.prefix)
}

fn build_base(protocol: &str, hostname: &str, port: u16, prefix: &str) -> String {
    format!(
        "{}//{}:{}{}",
        protocol,
        hostname,
        port,
        prefix.trim_end_matches('/')
    )
}

/// Build a full API URL from a path relative to the prefix
///
/// # Example
/// ```ignore
/// let url = api_url("/sector/12"); // http://host:3000/pr/sector/12
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path of a collection endpoint, optionally with a trailing segment.
///
/// `collection_path("sector", &[])` → `/sector`,
/// `collection_path("sector", &["soft", "4"])` → `/sector/soft/4`
pub fn collection_path(collection: &str, segments: &[&str]) -> String {
    let mut path = format!("/{}", collection);
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_base() {
        assert_eq!(
            build_base("https:", "factory.local", 3000, "/pr"),
            "https://factory.local:3000/pr"
        );
        assert_eq!(build_base("http:", "127.0.0.1", 8080, "/pr/"), "http://127.0.0.1:8080/pr");
        assert_eq!(build_base("http:", "h", 1, ""), "http://h:1");
    }

    #[test]
    fn test_collection_path() {
        assert_eq!(collection_path("sector-process", &[]), "/sector-process");
        assert_eq!(collection_path("machine", &["hard", "7"]), "/machine/hard/7");
        assert_eq!(collection_path("user", &["a b"]), "/user/a%20b");
    }
}
