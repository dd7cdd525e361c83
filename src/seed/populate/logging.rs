//! Logging utilities for populate handlers.

use reqwest::Url;

/// Mask the password in an endpoint URL's userinfo for safe logging.
///
/// Endpoints that do not parse as URLs are returned unchanged.
pub fn mask_endpoint_credentials(endpoint: &str) -> String {
    let Ok(mut url) = Url::parse(endpoint) else {
        return endpoint.to_string();
    };
    if url.password().is_none() || url.set_password(Some("***")).is_err() {
        return endpoint.to_string();
    }
    url.to_string()
}

/// Mask an access token, keeping only its first four characters.
pub fn mask_access_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if visible.len() == token.len() {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}
