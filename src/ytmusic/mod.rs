//! # YouTube Music Integration Module
//!
//! This module is the only place that talks to YouTube Music. It speaks the
//! InnerTube JSON API the web player uses, authenticated with the header
//! values the user copied from their own browser session.
//!
//! ## Architecture
//!
//! ```text
//! Generator (auth gate, builder, publisher)
//!          ↓
//! MusicService trait
//!          ↓
//! YtMusicClient
//!     ├── auth      (session check)
//!     ├── search    (artist search)
//!     ├── artist    (artist page, songs shelf)
//!     └── playlist  (create, add items)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! Every request is a `POST {base}/{endpoint}?alt=json` whose body carries a
//! `WEB_REMIX` client context. Responses are deeply nested renderer trees, so
//! the parsers in the submodules walk them with [`nav`] and skip anything
//! that does not have the expected shape.
//!
//! ## Error Handling
//!
//! There are no retries. A non-success status becomes [`Error::Status`], a
//! body that cannot be understood becomes [`Error::UnexpectedResponse`].

pub mod artist;
pub mod auth;
pub mod playlist;
pub mod search;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, COOKIE, USER_AGENT},
};
use serde_json::{Value, json};

use crate::{
    config,
    error::{Error, Result},
    types::{ArtistCandidate, SessionCredentials, TopTrack},
};

pub const PLAYLIST_URL_BASE: &str = "https://music.youtube.com/playlist?list=";

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:88.0) Gecko/20100101 Firefox/88.0";

/// The external music service, as far as this crate needs it.
///
/// Every call takes the credentials of the user the run belongs to; the
/// implementation itself holds no per-user state.
#[async_trait]
pub trait MusicService: Send + Sync {
    /// Cheap authenticated call used to tell valid credentials from stale ones.
    async fn check_session(&self, creds: &SessionCredentials) -> Result<()>;

    async fn search_artists(
        &self,
        creds: &SessionCredentials,
        query: &str,
    ) -> Result<Vec<ArtistCandidate>>;

    /// Top tracks of an artist, most popular first.
    async fn top_tracks(&self, creds: &SessionCredentials, browse_id: &str)
    -> Result<Vec<TopTrack>>;

    /// Creates a private playlist and returns its id.
    async fn create_playlist(
        &self,
        creds: &SessionCredentials,
        title: &str,
        description: &str,
    ) -> Result<String>;

    async fn add_playlist_items(
        &self,
        creds: &SessionCredentials,
        playlist_id: &str,
        video_ids: &[String],
    ) -> Result<()>;
}

pub fn playlist_url(playlist_id: &str) -> String {
    format!("{}{}", PLAYLIST_URL_BASE, playlist_id)
}

/// Follows a path of object keys and array indices through a JSON tree.
///
/// Path segments that parse as numbers index into arrays, everything else is
/// an object key.
pub fn nav<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| {
        match segment.parse::<usize>() {
            Ok(index) => current.get(index),
            Err(_) => current.get(*segment),
        }
    })
}

pub(crate) fn nav_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    nav(value, path).and_then(Value::as_str)
}

pub struct YtMusicClient {
    http: Client,
    api_url: String,
    client_version: String,
}

impl YtMusicClient {
    pub fn new(api_url: String, client_version: String) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            client_version,
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::ytmusic_api_url(), config::ytmusic_client_version())
    }

    fn context(&self) -> Value {
        json!({
            "client": {
                "clientName": "WEB_REMIX",
                "clientVersion": self.client_version,
                "hl": "en",
            },
            "user": {},
        })
    }

    /// Sends one InnerTube request and returns the decoded JSON body.
    pub(crate) async fn send(
        &self,
        creds: &SessionCredentials,
        endpoint: &str,
        mut body: Value,
    ) -> Result<Value> {
        if let Some(map) = body.as_object_mut() {
            map.insert("context".to_string(), self.context());
        }

        let url = format!("{}/{}?alt=json", self.api_url, endpoint);
        let response = self
            .http
            .post(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "*/*")
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .header(CONTENT_TYPE, "application/json")
            .header("X-Goog-AuthUser", "0")
            .header("x-origin", config::YTMUSIC_ORIGIN)
            .header(AUTHORIZATION, &creds.authorization)
            .header(COOKIE, &creds.cookie)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl MusicService for YtMusicClient {
    async fn check_session(&self, creds: &SessionCredentials) -> Result<()> {
        auth::check_session(self, creds).await
    }

    async fn search_artists(
        &self,
        creds: &SessionCredentials,
        query: &str,
    ) -> Result<Vec<ArtistCandidate>> {
        search::search_artists(self, creds, query).await
    }

    async fn top_tracks(
        &self,
        creds: &SessionCredentials,
        browse_id: &str,
    ) -> Result<Vec<TopTrack>> {
        artist::top_tracks(self, creds, browse_id).await
    }

    async fn create_playlist(
        &self,
        creds: &SessionCredentials,
        title: &str,
        description: &str,
    ) -> Result<String> {
        playlist::create(self, creds, title, description).await
    }

    async fn add_playlist_items(
        &self,
        creds: &SessionCredentials,
        playlist_id: &str,
        video_ids: &[String],
    ) -> Result<()> {
        playlist::add_items(self, creds, playlist_id, video_ids).await
    }
}
