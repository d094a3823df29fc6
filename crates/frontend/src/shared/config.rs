//! Client configuration.
//!
//! The backend serves this client from its own origin, so by default every
//! request goes to the page origin. Builds that talk to a backend elsewhere
//! set `COSTING_API_BASE` at compile time, e.g.
//! `COSTING_API_BASE=http://127.0.0.1:8000 trunk build`.

/// localStorage key of the bearer token; must stay stable across releases.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// How long a transient message stays on screen.
pub const MESSAGE_TIMEOUT_MS: u32 = 3000;

const API_BASE_OVERRIDE: Option<&str> = option_env!("COSTING_API_BASE");

/// Get the base URL for API requests (no trailing slash).
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return normalize_base(base);
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| normalize_base(&origin))
        .unwrap_or_default()
}

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://127.0.0.1:8000/"), "http://127.0.0.1:8000");
        assert_eq!(normalize_base(" https://shop.example.com "), "https://shop.example.com");
        assert_eq!(normalize_base(""), "");
    }
}
