use shared::constants::DEFAULT_VOCAB_PATH;
use web_sys::window;

pub fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    // Default to the backend's dev address
    "http://127.0.0.1:3000".to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_base_url(), path)
    }
}

/// URL of the default vocabulary, with a timestamp so browsers never serve a stale copy.
pub fn vocabulary_url() -> String {
    format!("{}?t={}", get_asset_url(DEFAULT_VOCAB_PATH), js_sys::Date::now() as u64)
}
