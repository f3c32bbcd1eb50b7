use crate::{
    auth,
    builder::PlaylistBuilder,
    error::Error,
    info, publisher, report,
    types::{ArtistResult, LineupRequest, RunReport, SessionCredentials},
    ytmusic::MusicService,
};

/// A run that stopped at the playlist level. Whatever the builder had
/// already resolved is kept so the user still sees which artists missed.
#[derive(Debug)]
pub struct RunFailure {
    pub error: Error,
    pub artists: Vec<ArtistResult>,
}

impl From<Error> for RunFailure {
    fn from(error: Error) -> Self {
        RunFailure {
            error,
            artists: Vec::new(),
        }
    }
}

/// Runs one lineup through the whole pipeline.
///
/// The credentials are checked first; when the check fails nothing else is
/// sent to the service. Artists are then resolved one by one and the
/// collected tracks are published into a new private playlist.
pub async fn create_festival_playlist(
    service: &dyn MusicService,
    creds: &SessionCredentials,
    request: &LineupRequest,
) -> Result<RunReport, RunFailure> {
    auth::check(service, creds).await?;

    info!(
        "Building \"{}\" from {} artists, {} songs each",
        request.playlist_name,
        request.artist_names.len(),
        request.songs_per_artist
    );

    let artists = PlaylistBuilder::new(service, creds, request.songs_per_artist())
        .with_progress(request.artist_names.len())
        .collect(&request.artist_names)
        .await;

    let track_ids = report::collect_track_ids(&artists);
    let published = match publisher::publish(
        service,
        creds,
        &request.playlist_name,
        &request.description(),
        &track_ids,
    )
    .await
    {
        Ok(published) => published,
        Err(error) => return Err(RunFailure { error, artists }),
    };

    let stats = report::run_stats(&artists, published.outcome.total_tracks_added);
    Ok(RunReport {
        lines: report::artist_lines(&artists),
        artists,
        playlist: Some(published.outcome),
        add_error: published.add_error,
        stats,
    })
}
