use serde_json::json;

use super::{YtMusicClient, nav};
use crate::{
    error::{Error, Result},
    types::SessionCredentials,
};

const LIBRARY_PLAYLISTS_BROWSE_ID: &str = "FEmusic_liked_playlists";

/// Lists the library playlists of the signed-in user and throws the result
/// away. Only an authenticated session gets a browsable library back.
pub async fn check_session(client: &YtMusicClient, creds: &SessionCredentials) -> Result<()> {
    let response = client
        .send(
            creds,
            "browse",
            json!({ "browseId": LIBRARY_PLAYLISTS_BROWSE_ID }),
        )
        .await
        .map_err(|e| match e {
            Error::Status { status, .. } => {
                Error::AuthRejected(format!("library request returned status {}", status))
            }
            other => other,
        })?;

    if nav(&response, &["contents"]).is_none() {
        return Err(Error::AuthRejected(
            "library is not available for these credentials".to_string(),
        ));
    }

    Ok(())
}
