#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use festlist::{
    Error, Result,
    types::{ArtistCandidate, SessionCredentials, TopTrack},
    ytmusic::MusicService,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CheckSession,
    Search(String),
    TopTracks(String),
    CreatePlaylist(String),
    AddItems(String, Vec<String>),
}

/// In-memory music service that records every call it receives.
#[derive(Default)]
pub struct FakeMusicService {
    pub reject_auth: bool,
    pub artists: HashMap<String, Vec<ArtistCandidate>>,
    pub tracks: HashMap<String, Vec<TopTrack>>,
    pub failing_searches: HashSet<String>,
    pub fail_create: bool,
    pub fail_add: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeMusicService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an artist whose search returns exactly itself with `n` tracks.
    pub fn with_artist(mut self, name: &str, n: usize) -> Self {
        let browse_id = format!("UC_{}", name.replace(' ', "_"));
        self.artists.insert(
            name.to_string(),
            vec![ArtistCandidate {
                browse_id: browse_id.clone(),
                name: name.to_string(),
            }],
        );
        self.tracks.insert(browse_id, tracks(name, n));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn tracks(prefix: &str, n: usize) -> Vec<TopTrack> {
    (0..n)
        .map(|i| TopTrack {
            video_id: format!("{}-vid{}", prefix.replace(' ', "_"), i),
            title: format!("{} Song {}", prefix, i + 1),
        })
        .collect()
}

pub fn creds() -> SessionCredentials {
    SessionCredentials {
        authorization: "SAPISIDHASH 123_abc".to_string(),
        cookie: "SAPISID=xyz; HSID=abc".to_string(),
    }
}

#[async_trait]
impl MusicService for FakeMusicService {
    async fn check_session(&self, _creds: &SessionCredentials) -> Result<()> {
        self.record(Call::CheckSession);
        if self.reject_auth {
            return Err(Error::AuthRejected("library request returned status 401".into()));
        }
        Ok(())
    }

    async fn search_artists(
        &self,
        _creds: &SessionCredentials,
        query: &str,
    ) -> Result<Vec<ArtistCandidate>> {
        self.record(Call::Search(query.to_string()));
        if self.failing_searches.contains(query) {
            return Err(Error::Status {
                endpoint: "search".into(),
                status: 500,
            });
        }
        Ok(self.artists.get(query).cloned().unwrap_or_default())
    }

    async fn top_tracks(
        &self,
        _creds: &SessionCredentials,
        browse_id: &str,
    ) -> Result<Vec<TopTrack>> {
        self.record(Call::TopTracks(browse_id.to_string()));
        Ok(self.tracks.get(browse_id).cloned().unwrap_or_default())
    }

    async fn create_playlist(
        &self,
        _creds: &SessionCredentials,
        title: &str,
        _description: &str,
    ) -> Result<String> {
        self.record(Call::CreatePlaylist(title.to_string()));
        if self.fail_create {
            return Err(Error::Status {
                endpoint: "playlist/create".into(),
                status: 500,
            });
        }
        Ok("PLfest123".to_string())
    }

    async fn add_playlist_items(
        &self,
        _creds: &SessionCredentials,
        playlist_id: &str,
        video_ids: &[String],
    ) -> Result<()> {
        self.record(Call::AddItems(playlist_id.to_string(), video_ids.to_vec()));
        if self.fail_add {
            return Err(Error::UnexpectedResponse("edit playlist returned STATUS_FAILED".into()));
        }
        Ok(())
    }
}
