//! # API Module
//!
//! HTTP endpoints of the local web server. The page at `/` holds the forms
//! and keeps the user's credential blob in local storage; everything else is
//! a small JSON endpoint the page calls.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, the single page UI
//! - [`health`] - `GET /health`, status and version
//! - [`authenticate`] - `POST /api/auth`, validates pasted headers
//! - [`check_auth`] - `POST /api/auth/check`, re-validates a stored blob
//! - [`create_playlist`] - `POST /api/playlist`, runs a lineup
//!
//! Failures are answered with [`ApiError`], a JSON body carrying the message
//! and advice picked for it.

mod auth;
mod error;
mod health;
mod index;
mod playlist;

pub use auth::{authenticate, check_auth};
pub use error::ApiError;
pub use health::health;
pub use index::index;
pub use playlist::create_playlist;
