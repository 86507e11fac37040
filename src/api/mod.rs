//! # API Module
//!
//! HTTP endpoints for the local callback server that runs during the OAuth
//! authentication flow:
//!
//! - [`callback`] - Handles the OAuth callback from Spotify's authorization
//!   server and completes the PKCE flow by exchanging the authorization code
//!   for an access token.
//! - [`health`] - Health check endpoint returning application status and
//!   version, usable by monitoring or keep-alive pings.
//!
//! Built on [Axum](https://docs.rs/axum); each endpoint is an async function
//! wired into the router in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
