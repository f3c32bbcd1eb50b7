use crate::{
    error::{Error, Result},
    types::{LineupRequest, PlaylistForm},
};

pub const MIN_SONGS_PER_ARTIST: u32 = 1;
pub const MAX_SONGS_PER_ARTIST: u32 = 10;
pub const DEFAULT_SONGS_PER_ARTIST: u32 = 3;
pub const DEFAULT_PLAYLIST_NAME: &str = "My Festival Playlist";

/// Splits raw lineup text into artist names, one per line.
///
/// Lines are trimmed and blank lines are dropped; the input order is kept.
pub fn parse_lineup(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl LineupRequest {
    pub fn new(
        artist_names: Vec<String>,
        playlist_name: &str,
        songs_per_artist: u32,
    ) -> Result<Self> {
        if artist_names.is_empty() {
            return Err(Error::EmptyLineup);
        }

        if !(MIN_SONGS_PER_ARTIST..=MAX_SONGS_PER_ARTIST).contains(&songs_per_artist) {
            return Err(Error::SongsPerArtistOutOfRange {
                got: songs_per_artist,
                min: MIN_SONGS_PER_ARTIST,
                max: MAX_SONGS_PER_ARTIST,
            });
        }

        let playlist_name = playlist_name.trim();
        if playlist_name.is_empty() {
            return Err(Error::EmptyPlaylistName);
        }

        Ok(Self {
            artist_names,
            playlist_name: playlist_name.to_string(),
            songs_per_artist,
        })
    }

    /// Builds a request from the submitted form, filling in defaults for
    /// fields the browser left out.
    pub fn from_form(form: &PlaylistForm) -> Result<Self> {
        let playlist_name = form
            .playlist_name
            .as_deref()
            .unwrap_or(DEFAULT_PLAYLIST_NAME);
        Self::new(
            parse_lineup(&form.lineup),
            playlist_name,
            form.songs_per_artist.unwrap_or(DEFAULT_SONGS_PER_ARTIST),
        )
    }

    pub fn songs_per_artist(&self) -> usize {
        self.songs_per_artist as usize
    }

    pub fn description(&self) -> String {
        format!(
            "Top {} songs from each artist at {}",
            self.songs_per_artist, self.playlist_name
        )
    }
}
