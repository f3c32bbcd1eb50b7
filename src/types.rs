use serde::{Deserialize, Serialize};

/// Header values copied from a logged-in browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    pub authorization: String,
    pub cookie: String,
}

/// Credential blob as the browser keeps it in local storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAuth {
    /// Base64 encoded credential JSON.
    pub auth: String,
    /// RFC 3339 timestamp of the last successful session check.
    pub authenticated_at: String,
    pub authenticated_at_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupRequest {
    pub artist_names: Vec<String>,
    pub playlist_name: String,
    pub songs_per_artist: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistCandidate {
    pub browse_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopTrack {
    pub video_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArtistStatus {
    Found,
    Partial { found: usize, requested: usize },
    NoTracks,
    NotFound,
    Failed { message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistResult {
    pub name: String,
    pub matched: bool,
    pub matched_name: Option<String>,
    pub track_ids: Vec<String>,
    pub tracks: Vec<TopTrack>,
    pub status: ArtistStatus,
}

impl ArtistResult {
    pub fn not_found(name: &str) -> Self {
        Self {
            name: name.to_string(),
            matched: false,
            matched_name: None,
            track_ids: Vec::new(),
            tracks: Vec::new(),
            status: ArtistStatus::NotFound,
        }
    }

    pub fn failed(name: &str, message: String) -> Self {
        Self {
            status: ArtistStatus::Failed { message },
            ..Self::not_found(name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistOutcome {
    pub playlist_id: String,
    pub url: String,
    pub total_tracks_added: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub songs_added: usize,
    pub artists_with_songs: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistLine {
    pub name: String,
    pub message: String,
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub artists: Vec<ArtistResult>,
    pub lines: Vec<ArtistLine>,
    pub playlist: Option<PlaylistOutcome>,
    pub add_error: Option<String>,
    pub stats: RunStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthForm {
    pub auth_json: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthCheckForm {
    pub auth: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistForm {
    pub auth: String,
    pub lineup: String,
    #[serde(default)]
    pub playlist_name: Option<String>,
    #[serde(default)]
    pub songs_per_artist: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub advice: Vec<String>,
    pub logged_out: bool,
    /// Per-artist lines of a run that failed after the lineup was searched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<ArtistLine>,
}
