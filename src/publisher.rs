use crate::{
    error::{Error, Result},
    success,
    types::{PlaylistOutcome, SessionCredentials},
    warning,
    ytmusic::{MusicService, playlist_url},
};

/// What publishing produced: the playlist, plus the add failure if the
/// second call went wrong. The playlist is kept either way.
#[derive(Debug, Clone)]
pub struct Published {
    pub outcome: PlaylistOutcome,
    pub add_error: Option<String>,
}

/// Creates the private playlist, then adds every collected video id in a
/// single call.
///
/// A failed creation is returned as [`Error::PlaylistCreation`] and no add
/// call is made. An empty id list is refused before anything is created.
pub async fn publish(
    service: &dyn MusicService,
    creds: &SessionCredentials,
    name: &str,
    description: &str,
    video_ids: &[String],
) -> Result<Published> {
    if video_ids.is_empty() {
        return Err(Error::NothingToAdd);
    }

    let playlist_id = service
        .create_playlist(creds, name, description)
        .await
        .map_err(|e| Error::PlaylistCreation(e.to_string()))?;
    success!("Created playlist with ID: {}", playlist_id);

    let (total_tracks_added, add_error) =
        match service.add_playlist_items(creds, &playlist_id, video_ids).await {
            Ok(()) => (video_ids.len(), None),
            Err(e) => {
                let e = Error::AddTracks(e.to_string());
                warning!("{}", e);
                (0, Some(e.to_string()))
            }
        };

    Ok(Published {
        outcome: PlaylistOutcome {
            url: playlist_url(&playlist_id),
            playlist_id,
            total_tracks_added,
        },
        add_error,
    })
}
