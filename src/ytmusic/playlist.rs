use serde_json::{Value, json};

use super::{YtMusicClient, nav_str};
use crate::{
    error::{Error, Result},
    types::SessionCredentials,
};

const PRIVACY_PRIVATE: &str = "PRIVATE";
const STATUS_SUCCEEDED: &str = "STATUS_SUCCEEDED";
const DEDUPE_SKIP: &str = "DEDUPE_OPTION_SKIP";

pub async fn create(
    client: &YtMusicClient,
    creds: &SessionCredentials,
    title: &str,
    description: &str,
) -> Result<String> {
    let response = client
        .send(
            creds,
            "playlist/create",
            json!({
                "title": title,
                "description": description,
                "privacyStatus": PRIVACY_PRIVATE,
            }),
        )
        .await?;

    parse_created_playlist_id(&response)
}

pub fn parse_created_playlist_id(response: &Value) -> Result<String> {
    match nav_str(response, &["playlistId"]) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(Error::UnexpectedResponse(
            "create playlist response has no playlist id".to_string(),
        )),
    }
}

pub async fn add_items(
    client: &YtMusicClient,
    creds: &SessionCredentials,
    playlist_id: &str,
    video_ids: &[String],
) -> Result<()> {
    let response = client
        .send(
            creds,
            "browse/edit_playlist",
            json!({ "playlistId": playlist_id, "actions": add_actions(video_ids) }),
        )
        .await?;

    check_edit_status(&response)
}

/// One add action per video. Videos already in the playlist are skipped
/// instead of failing the whole edit.
pub fn add_actions(video_ids: &[String]) -> Vec<Value> {
    video_ids
        .iter()
        .map(|id| {
            json!({
                "action": "ACTION_ADD_VIDEO",
                "addedVideoId": id,
                "dedupeOption": DEDUPE_SKIP,
            })
        })
        .collect()
}

/// Accepts any edit response unless it explicitly reports a failed status.
pub fn check_edit_status(response: &Value) -> Result<()> {
    match nav_str(response, &["status"]) {
        None => Ok(()),
        Some(STATUS_SUCCEEDED) => Ok(()),
        Some(other) => Err(Error::UnexpectedResponse(format!(
            "edit playlist returned {}",
            other
        ))),
    }
}
