//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that runs while
//! `trueshuffle auth` waits for Spotify to redirect back.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization code, exchanges it together
//!   with the PKCE code verifier for a token and stores the token in the
//!   shared state polled by [`crate::spotify::auth::auth`].
//! - [`health`] - Reports that the server is up, with name and version.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use trueshuffle::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```
//!
//! The router itself is assembled in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
