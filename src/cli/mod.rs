//! # CLI Module
//!
//! User-facing command implementations for setlistify. Each command
//! coordinates the lower layers (setlist retrieval, token management, and
//! the resolution/assembly pipeline) and handles user interaction, progress
//! feedback, and error presentation.
//!
//! ## Commands
//!
//! - [`auth`] - Runs the Spotify OAuth 2.0 PKCE flow and caches the token
//! - [`preview`] - Resolves a setlist against the catalog and shows the
//!   matches without creating anything
//! - [`create`] - Full pipeline: setlist → resolution → playlist
//! - [`logout`] - Removes the cached credential
//!
//! ## Error Presentation
//!
//! Commands distinguish the three user-visible failure classes: a bad
//! setlist URL or identifier ("not found"), an expired session ("run
//! `setlistify auth`"), and transient provider trouble (retry the command).
//! Per-song resolution misses are never fatal; they are reported alongside
//! the successful matches.

mod auth;
mod create;
mod logout;
mod preview;

pub use auth::auth;
pub use create::create;
pub use logout::logout;
pub use preview::preview;
