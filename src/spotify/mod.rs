//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! setlistify: authentication, catalog search, and playlist management. It is
//! the only layer that talks HTTP to Spotify; higher layers (`management`,
//! `cli`) work with the typed results it returns.
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: browser authorization, local callback,
//!   code exchange and token refresh. PKCE avoids storing a client secret,
//!   which a CLI could not keep confidential.
//! - [`search`] - Track resolution. Maps free-text song titles to catalog
//!   tracks using an ordered fallback of search queries with an artist-aware
//!   tie-break.
//! - [`playlist`] - Playlist assembly. Current-user lookup, playlist
//!   creation, and batched track additions bounded by the API's per-request
//!   limit.
//!
//! ## Error Handling
//!
//! Every API call classifies its HTTP response into the tagged [`ApiError`]
//! before returning, so callers dispatch on an explicit variant instead of
//! inspecting raw status codes:
//!
//! - `Unauthorized` is the only variant that triggers an internal retry, and
//!   only once per pipeline run (see [`crate::management::PipelineRunner`]).
//! - `RateLimited` carries the `Retry-After` delay; the search loop honors
//!   delays up to 120 seconds itself.
//! - Everything else is surfaced verbatim to the caller.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - code exchange and refresh (accounts service)
//! - `GET /search` - track search
//! - `GET /me` - authenticated user profile
//! - `POST /users/{user_id}/playlists` - playlist creation
//! - `POST /playlists/{playlist_id}/tracks` - batched track addition

use std::fmt;

use reqwest::{Response, StatusCode};

pub mod auth;
pub mod playlist;
pub mod search;

/// Tagged outcome of a Spotify Web API call.
#[derive(Debug)]
pub enum ApiError {
    /// The access token was missing, expired or revoked (HTTP 401).
    Unauthorized,
    /// The addressed resource does not exist (HTTP 404).
    NotFound,
    /// Rate limited; carries the `Retry-After` delay in seconds (HTTP 429).
    RateLimited(u64),
    /// Any other non-success response.
    Status(StatusCode),
    /// Network or decoding failure below the HTTP status level.
    Transport(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "unauthorized (token expired or revoked)"),
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::RateLimited(secs) => write!(f, "rate limited, retry after {}s", secs),
            ApiError::Status(status) => write!(f, "Spotify returned {}", status),
            ApiError::Transport(e) => write!(f, "request failed: {}", e),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}

/// Classifies a response into `Ok` or the matching [`ApiError`] tag.
pub(crate) fn api_result(response: Response) -> Result<Response, ApiError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);
            Err(ApiError::RateLimited(retry_after))
        }
        status => Err(ApiError::Status(status)),
    }
}
