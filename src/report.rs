use std::collections::HashSet;

use crate::types::{ArtistLine, ArtistResult, ArtistStatus, RunStats};

/// One status line per artist, phrased for the results list on the page.
pub fn artist_line(result: &ArtistResult) -> ArtistLine {
    let name = &result.name;
    let (message, ok) = match &result.status {
        ArtistStatus::Found => (
            format!("✅ Added {} songs for {}", result.track_ids.len(), name),
            true,
        ),
        ArtistStatus::Partial { found, requested } => (
            format!(
                "⚠️ Only found {} of {} songs for {}",
                found, requested, name
            ),
            true,
        ),
        ArtistStatus::NoTracks => (format!("⚠️ No songs found for {}", name), false),
        ArtistStatus::NotFound => (format!("⚠️ No results found for artist: {}", name), false),
        ArtistStatus::Failed { message } => (
            format!("⚠️ Error getting top songs for {}: {}", name, message),
            false,
        ),
    };

    ArtistLine {
        name: name.clone(),
        message,
        ok,
    }
}

pub fn artist_lines(results: &[ArtistResult]) -> Vec<ArtistLine> {
    results.iter().map(artist_line).collect()
}

/// Flattens results into the playlist's track order, artist by artist.
///
/// A video id appears once, at its first position. Repeated lineup entries
/// and collaborations shared by two artists would otherwise make the single
/// add call fail as a whole.
pub fn collect_track_ids(results: &[ArtistResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    results
        .iter()
        .flat_map(|r| r.track_ids.iter())
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// Counts what actually ended up in the playlist; nothing when the add call
/// failed.
pub fn run_stats(results: &[ArtistResult], songs_added: usize) -> RunStats {
    if songs_added == 0 {
        return RunStats {
            songs_added: 0,
            artists_with_songs: 0,
        };
    }

    RunStats {
        songs_added,
        artists_with_songs: results.iter().filter(|r| !r.track_ids.is_empty()).count(),
    }
}
