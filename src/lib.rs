//! Festival Playlist Generator Library
//!
//! This library turns a pasted festival lineup into a private YouTube Music
//! playlist made of every artist's top tracks. It contains the web surface the
//! user interacts with, the YouTube Music client, and the small amount of glue
//! in between.
//!
//! # Modules
//!
//! - `api` - HTTP handlers behind the local web server
//! - `auth` - Parsing, verifying and encoding pasted session headers
//! - `builder` - Artist search and top track collection
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by the whole crate
//! - `generator` - The linear lineup -> playlist run
//! - `lineup` - Form input parsing and validation
//! - `publisher` - Playlist creation and track insertion
//! - `report` - Per-artist messages and run statistics
//! - `server` - Router construction and server startup
//! - `types` - Data structures and type definitions
//! - `ytmusic` - YouTube Music (InnerTube) client
//!
//! # Example
//!
//! ```
//! use festlist::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> festlist::Res<()> {
//!     config::load_env().await?;
//!     server::start_api_server(config::server_addr(), false).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod lineup;
pub mod publisher;
pub mod report;
pub mod server;
pub mod types;
pub mod ytmusic;

pub use error::{Error, Result};

/// A convenient Result type alias for top-level plumbing that may fail.
///
/// Domain code returns [`Result`] with the typed [`Error`]; this boxed alias
/// is used where unrelated error types meet, such as server startup.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Processing {}...", artist);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added {} songs for {}", count, artist);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for startup failures. Request handling never calls it, a
/// failing run is reported back to the browser instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No results found for artist: {}", artist);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
