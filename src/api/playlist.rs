use std::sync::Arc;

use axum::{Extension, response::Json};

use super::ApiError;
use crate::{
    auth, generator, success,
    types::{LineupRequest, PlaylistForm, RunReport},
    warning,
    ytmusic::MusicService,
};

pub async fn create_playlist(
    Extension(service): Extension<Arc<dyn MusicService>>,
    Json(form): Json<PlaylistForm>,
) -> Result<Json<RunReport>, ApiError> {
    // input is checked before the credentials are even looked at
    let request = LineupRequest::from_form(&form)?;
    let creds = auth::decode_credentials(&form.auth)?;

    match generator::create_festival_playlist(service.as_ref(), &creds, &request).await {
        Ok(report) => {
            if let Some(playlist) = &report.playlist {
                success!(
                    "Created playlist with songs from {} artists: {}",
                    report.stats.artists_with_songs,
                    playlist.url
                );
            }
            Ok(Json(report))
        }
        Err(failure) => {
            warning!("Error during playlist creation: {}", failure.error);
            Err(failure.into())
        }
    }
}
