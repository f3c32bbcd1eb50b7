use serde_json::{Value, json};

use super::{YtMusicClient, nav, nav_str};
use crate::{
    error::Result,
    types::{ArtistCandidate, SessionCredentials},
};

/// `params` value selecting the "Artists" filter of the search page.
pub const ARTISTS_FILTER_PARAMS: &str = "EgWKAQIgAWoMEA4QChADEAQQCRAF";

pub async fn search_artists(
    client: &YtMusicClient,
    creds: &SessionCredentials,
    query: &str,
) -> Result<Vec<ArtistCandidate>> {
    let response = client
        .send(
            creds,
            "search",
            json!({ "query": query, "params": ARTISTS_FILTER_PARAMS }),
        )
        .await?;

    Ok(parse_artist_results(&response))
}

/// Extracts artist rows from a filtered search response, in result order.
pub fn parse_artist_results(response: &Value) -> Vec<ArtistCandidate> {
    let sections = nav(
        response,
        &[
            "contents",
            "tabbedSearchResultsRenderer",
            "tabs",
            "0",
            "tabRenderer",
            "content",
            "sectionListRenderer",
            "contents",
        ],
    )
    .and_then(Value::as_array);

    let Some(sections) = sections else {
        return Vec::new();
    };

    sections
        .iter()
        .filter_map(|section| nav(section, &["musicShelfRenderer", "contents"]))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|item| item.get("musicResponsiveListItemRenderer"))
        .filter_map(parse_artist_row)
        .collect()
}

fn parse_artist_row(row: &Value) -> Option<ArtistCandidate> {
    let browse_id = nav_str(row, &["navigationEndpoint", "browseEndpoint", "browseId"])?;
    let name = nav_str(
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
    )?;

    Some(ArtistCandidate {
        browse_id: browse_id.to_string(),
        name: name.to_string(),
    })
}
