use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    info,
    types::{ArtistCandidate, ArtistResult, ArtistStatus, SessionCredentials},
    warning,
    ytmusic::MusicService,
};

/// Picks the search result that stands for the requested artist.
///
/// A result whose name equals the query ignoring case and surrounding
/// whitespace wins; otherwise the service's first result is taken.
pub fn pick_best_match<'a>(
    query: &str,
    candidates: &'a [ArtistCandidate],
) -> Option<&'a ArtistCandidate> {
    let wanted = query.trim().to_lowercase();
    candidates
        .iter()
        .find(|c| c.name.trim().to_lowercase() == wanted)
        .or_else(|| candidates.first())
}

/// Collects top tracks for a lineup, one artist after the other.
pub struct PlaylistBuilder<'a> {
    service: &'a dyn MusicService,
    creds: &'a SessionCredentials,
    songs_per_artist: usize,
    progress: ProgressBar,
}

impl<'a> PlaylistBuilder<'a> {
    pub fn new(
        service: &'a dyn MusicService,
        creds: &'a SessionCredentials,
        songs_per_artist: usize,
    ) -> Self {
        Self {
            service,
            creds,
            songs_per_artist,
            progress: ProgressBar::hidden(),
        }
    }

    /// Shows a progress bar over the lineup on the server console.
    pub fn with_progress(mut self, total: usize) -> Self {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} [{bar:30.blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        self.progress = pb;
        self
    }

    /// Returns exactly one result per artist name, in input order. A failure
    /// for one artist is recorded in its result and does not stop the loop.
    pub async fn collect(&self, artist_names: &[String]) -> Vec<ArtistResult> {
        let mut results = Vec::with_capacity(artist_names.len());

        for name in artist_names {
            self.progress.set_message(format!("Processing {}...", name));
            let result = self.collect_artist(name).await;
            match &result.status {
                ArtistStatus::NotFound => warning!("No results found for artist: {}", name),
                ArtistStatus::NoTracks => warning!("No songs found for artist: {}", name),
                ArtistStatus::Failed { message } => {
                    warning!("Error getting top songs for {}: {}", name, message)
                }
                _ => info!("Found {} songs for {}", result.track_ids.len(), name),
            }
            results.push(result);
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        results
    }

    async fn collect_artist(&self, name: &str) -> ArtistResult {
        let candidates = match self.service.search_artists(self.creds, name).await {
            Ok(candidates) => candidates,
            Err(e) => return ArtistResult::failed(name, e.to_string()),
        };

        let Some(artist) = pick_best_match(name, &candidates) else {
            return ArtistResult::not_found(name);
        };

        let tracks = match self.service.top_tracks(self.creds, &artist.browse_id).await {
            Ok(tracks) => tracks,
            Err(e) => {
                return ArtistResult {
                    matched: true,
                    matched_name: Some(artist.name.clone()),
                    ..ArtistResult::failed(name, e.to_string())
                };
            }
        };

        let tracks: Vec<_> = tracks.into_iter().take(self.songs_per_artist).collect();
        let status = match tracks.len() {
            0 => ArtistStatus::NoTracks,
            n if n < self.songs_per_artist => ArtistStatus::Partial {
                found: n,
                requested: self.songs_per_artist,
            },
            _ => ArtistStatus::Found,
        };

        ArtistResult {
            name: name.to_string(),
            matched: true,
            matched_name: Some(artist.name.clone()),
            track_ids: tracks.iter().map(|t| t.video_id.clone()).collect(),
            tracks,
            status,
        }
    }
}
