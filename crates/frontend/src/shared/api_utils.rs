//! Backend URL helpers.
//!
//! The backend listens on port 3000 of the host that served the page.

const BACKEND_PORT: u16 = 3000;

/// Base URL of the backend, e.g. `http://localhost:3000`.
///
/// Empty when there is no `window` (tests, workers).
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Full URL of an API path (should start with "/api/").
///
/// ```ignore
/// let url = api_url("/api/customer");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
