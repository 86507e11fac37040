//! setlist.fm API client.
//!
//! Fetches setlists by their public identifier and knows how to pull that
//! identifier out of the URL shapes setlist.fm uses. Authentication happens
//! via the `x-api-key` header; see [`crate::config::setlist_api_key`].

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode};

use crate::{config, types::Setlist};

/// URL shapes a setlist identifier can be extracted from, most specific
/// first: the canonical setlist page, any page ending in `-<id>.html`, and a
/// bare trailing identifier.
static SETLIST_URL_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"setlist\.fm/setlist/[^/]+/\d+/[^/]+-([a-f0-9]+)\.html").unwrap(),
        Regex::new(r"setlist\.fm/.*-([a-f0-9]{8})\.html").unwrap(),
        Regex::new(r"([a-f0-9]{8})$").unwrap(),
    ]
});

#[derive(Debug)]
pub enum SetlistError {
    /// No setlist identifier could be extracted from the given URL.
    InvalidUrl(String),
    /// The setlist does not exist (HTTP 404).
    NotFound,
    /// The configured API key was rejected (HTTP 403).
    InvalidApiKey,
    /// Any other non-success response.
    Status(StatusCode),
    /// Network or decoding failure.
    Transport(reqwest::Error),
}

impl fmt::Display for SetlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetlistError::InvalidUrl(url) => write!(f, "not a setlist.fm setlist URL: {}", url),
            SetlistError::NotFound => write!(f, "setlist not found"),
            SetlistError::InvalidApiKey => write!(f, "setlist.fm rejected the API key"),
            SetlistError::Status(status) => write!(f, "setlist.fm returned {}", status),
            SetlistError::Transport(e) => write!(f, "setlist.fm request failed: {}", e),
        }
    }
}

impl From<reqwest::Error> for SetlistError {
    fn from(err: reqwest::Error) -> Self {
        SetlistError::Transport(err)
    }
}

/// Extracts the setlist identifier from a setlist.fm URL.
///
/// Tries each known URL pattern in order and returns the first capture, or
/// `None` when the string matches none of them.
pub fn extract_setlist_id(url: &str) -> Option<String> {
    SETLIST_URL_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Fetches a setlist by its setlist.fm identifier.
pub async fn get_setlist(id: &str) -> Result<Setlist, SetlistError> {
    let api_url = format!(
        "{uri}/setlist/{id}",
        uri = &config::setlist_apiurl(),
        id = id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .header("x-api-key", config::setlist_api_key())
        .header("Accept", "application/json")
        .send()
        .await?;

    match response.status() {
        status if status.is_success() => Ok(response.json::<Setlist>().await?),
        StatusCode::NOT_FOUND => Err(SetlistError::NotFound),
        StatusCode::FORBIDDEN => Err(SetlistError::InvalidApiKey),
        status => Err(SetlistError::Status(status)),
    }
}

/// Resolves a setlist.fm URL to the setlist it names.
pub async fn from_url(url: &str) -> Result<Setlist, SetlistError> {
    let id =
        extract_setlist_id(url).ok_or_else(|| SetlistError::InvalidUrl(url.to_string()))?;
    get_setlist(&id).await
}
