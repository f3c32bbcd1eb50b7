//! Configuration management for the Festival Playlist Generator.
//!
//! Configuration comes from environment variables, optionally loaded from a
//! `.env` file in the local data directory. Every value has a default, so a
//! fresh install runs without any file at all:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults
//!
//! Credentials are never part of the configuration. They live in the user's
//! browser and travel with each request.

use dotenv;
use std::{env, path::PathBuf};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8501";
pub const DEFAULT_YTMUSIC_API_URL: &str = "https://music.youtube.com/youtubei/v1";
pub const DEFAULT_YTMUSIC_CLIENT_VERSION: &str = "1.20241211.01.00";
pub const YTMUSIC_ORIGIN: &str = "https://music.youtube.com";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/festlist/.env`
/// - macOS: `~/Library/Application Support/festlist/.env`
/// - Windows: `%LOCALAPPDATA%/festlist/.env`
///
/// The directory is created if needed. A missing file is not an error.
///
/// # Errors
///
/// Fails when the directory cannot be created or an existing file cannot be
/// parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("festlist/.env");
    path
}

/// Address the web server binds to, `SERVER_ADDRESS` or `127.0.0.1:8501`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Base URL of the InnerTube API, overridable with `YTMUSIC_API_URL`.
pub fn ytmusic_api_url() -> String {
    env::var("YTMUSIC_API_URL").unwrap_or_else(|_| DEFAULT_YTMUSIC_API_URL.to_string())
}

/// Web client version sent in the request context. YouTube Music rejects
/// very old versions, `YTMUSIC_CLIENT_VERSION` allows bumping it without a
/// rebuild.
pub fn ytmusic_client_version() -> String {
    env::var("YTMUSIC_CLIENT_VERSION")
        .unwrap_or_else(|_| DEFAULT_YTMUSIC_CLIENT_VERSION.to_string())
}
