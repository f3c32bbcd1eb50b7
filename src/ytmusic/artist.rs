use serde_json::{Value, json};

use super::{YtMusicClient, nav, nav_str};
use crate::{
    error::Result,
    types::{SessionCredentials, TopTrack},
};

/// Fetches an artist page and returns the songs shelf in page order.
pub async fn top_tracks(
    client: &YtMusicClient,
    creds: &SessionCredentials,
    browse_id: &str,
) -> Result<Vec<TopTrack>> {
    let response = client
        .send(creds, "browse", json!({ "browseId": browse_id }))
        .await?;

    Ok(parse_top_tracks(&response))
}

/// Reads the first music shelf of an artist page, which is its "Songs"
/// section ordered by popularity. Rows without a video id are skipped.
pub fn parse_top_tracks(response: &Value) -> Vec<TopTrack> {
    let shelf = nav(
        response,
        &[
            "contents",
            "singleColumnBrowseResultsRenderer",
            "tabs",
            "0",
            "tabRenderer",
            "content",
            "sectionListRenderer",
            "contents",
        ],
    )
    .and_then(Value::as_array)
    .and_then(|sections| {
        sections
            .iter()
            .find_map(|section| nav(section, &["musicShelfRenderer", "contents"]))
    })
    .and_then(Value::as_array);

    let Some(rows) = shelf else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|item| item.get("musicResponsiveListItemRenderer"))
        .filter_map(parse_track_row)
        .collect()
}

fn parse_track_row(row: &Value) -> Option<TopTrack> {
    let video_id = nav_str(row, &["playlistItemData", "videoId"]).or_else(|| {
        nav_str(
            row,
            &[
                "overlay",
                "musicItemThumbnailOverlayRenderer",
                "content",
                "musicPlayButtonRenderer",
                "playNavigationEndpoint",
                "watchEndpoint",
                "videoId",
            ],
        )
    })?;
    let title = nav_str(
        row,
        &[
            "flexColumns",
            "0",
            "musicResponsiveListItemFlexColumnRenderer",
            "text",
            "runs",
            "0",
            "text",
        ],
    )
    .unwrap_or_default();

    Some(TopTrack {
        video_id: video_id.to_string(),
        title: title.to_string(),
    })
}
