mod common;

use common::{Call, FakeMusicService, creds};
use festlist::{
    Error,
    builder::{PlaylistBuilder, pick_best_match},
    error::Hint,
    generator::create_festival_playlist,
    types::{ArtistCandidate, ArtistStatus, LineupRequest},
};

fn request(lineup: &[&str], songs: u32) -> LineupRequest {
    LineupRequest::new(
        lineup.iter().map(|s| s.to_string()).collect(),
        "Fest 2025",
        songs,
    )
    .unwrap()
}

fn candidate(name: &str, id: &str) -> ArtistCandidate {
    ArtistCandidate {
        browse_id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_pick_best_match_prefers_exact_name() {
    let candidates = vec![
        candidate("The Chemical Brothers Tribute", "UC1"),
        candidate("the chemical brothers", "UC2"),
    ];
    let best = pick_best_match("The Chemical Brothers ", &candidates).unwrap();
    assert_eq!(best.browse_id, "UC2");
}

#[test]
fn test_pick_best_match_falls_back_to_first() {
    let candidates = vec![candidate("Fred again..", "UC1"), candidate("Fred", "UC2")];
    assert_eq!(
        pick_best_match("Fred Again", &candidates).unwrap().browse_id,
        "UC1"
    );
    assert!(pick_best_match("Anyone", &[]).is_none());
}

#[tokio::test]
async fn test_builder_one_result_per_artist_and_bounded_tracks() {
    let service = FakeMusicService::new()
        .with_artist("Artist A", 10)
        .with_artist("Artist B", 2);
    let names: Vec<String> = ["Artist A", "Unknown", "Artist B"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let results = PlaylistBuilder::new(&service, &creds(), 3)
        .collect(&names)
        .await;

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.track_ids.len() <= 3));

    assert_eq!(results[0].status, ArtistStatus::Found);
    assert_eq!(
        results[0].track_ids,
        vec!["Artist_A-vid0", "Artist_A-vid1", "Artist_A-vid2"]
    );
    assert_eq!(results[1].status, ArtistStatus::NotFound);
    assert!(!results[1].matched);
    assert_eq!(
        results[2].status,
        ArtistStatus::Partial {
            found: 2,
            requested: 3
        }
    );
}

#[tokio::test]
async fn test_builder_records_failures_and_continues() {
    let mut service = FakeMusicService::new().with_artist("Artist B", 1);
    service.failing_searches.insert("Artist A".to_string());
    service
        .artists
        .insert("Silent".to_string(), vec![candidate("Silent", "UCsilent")]);
    let names: Vec<String> = ["Artist A", "Silent", "Artist B"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let results = PlaylistBuilder::new(&service, &creds(), 1)
        .collect(&names)
        .await;

    assert!(matches!(results[0].status, ArtistStatus::Failed { .. }));
    assert_eq!(results[1].status, ArtistStatus::NoTracks);
    assert!(results[1].matched);
    assert_eq!(results[2].status, ArtistStatus::Found);
    assert_eq!(service.count(|c| matches!(c, Call::Search(_))), 3);
}

#[tokio::test]
async fn test_run_two_artists_three_songs() {
    let service = FakeMusicService::new()
        .with_artist("Artist A", 5)
        .with_artist("Artist B", 5);

    let report = create_festival_playlist(&service, &creds(), &request(&["Artist A", "Artist B"], 3))
        .await
        .unwrap();

    assert_eq!(report.artists.len(), 2);
    let playlist = report.playlist.unwrap();
    assert_eq!(playlist.playlist_id, "PLfest123");
    assert_eq!(playlist.url, "https://music.youtube.com/playlist?list=PLfest123");
    assert_eq!(playlist.total_tracks_added, 6);
    assert_eq!(report.stats.songs_added, 6);
    assert_eq!(report.stats.artists_with_songs, 2);
    assert!(report.add_error.is_none());
    assert_eq!(report.lines[0].message, "✅ Added 3 songs for Artist A");

    let calls = service.calls();
    assert_eq!(calls.first(), Some(&Call::CheckSession));
    assert_eq!(service.count(|c| matches!(c, Call::CreatePlaylist(_))), 1);
    assert_eq!(service.count(|c| matches!(c, Call::AddItems(..))), 1);
    match calls.last() {
        Some(Call::AddItems(id, videos)) => {
            assert_eq!(id, "PLfest123");
            assert_eq!(videos.len(), 6);
            assert_eq!(videos[0], "Artist_A-vid0");
            assert_eq!(videos[3], "Artist_B-vid0");
        }
        other => panic!("last call was {:?}", other),
    }
}

#[tokio::test]
async fn test_rejected_credentials_make_no_other_calls() {
    let service = FakeMusicService {
        reject_auth: true,
        ..FakeMusicService::new().with_artist("Artist A", 3)
    };

    let err = create_festival_playlist(&service, &creds(), &request(&["Artist A"], 3))
        .await
        .unwrap_err();

    assert!(err.error.is_auth_error());
    assert!(err.artists.is_empty());
    assert_eq!(service.calls(), vec![Call::CheckSession]);
}

#[tokio::test]
async fn test_creation_failure_skips_add() {
    let service = FakeMusicService {
        fail_create: true,
        ..FakeMusicService::new().with_artist("Artist A", 3)
    };

    let err = create_festival_playlist(&service, &creds(), &request(&["Artist A"], 3))
        .await
        .unwrap_err();

    assert!(matches!(err.error, Error::PlaylistCreation(_)));
    assert!(err.error.to_string().starts_with("Failed to create playlist"));
    assert_eq!(err.artists.len(), 1);
    assert_eq!(err.artists[0].status, ArtistStatus::Found);
    assert_eq!(service.count(|c| matches!(c, Call::AddItems(..))), 0);
}

#[tokio::test]
async fn test_add_failure_keeps_playlist() {
    let service = FakeMusicService {
        fail_add: true,
        ..FakeMusicService::new().with_artist("Artist A", 3)
    };

    let report = create_festival_playlist(&service, &creds(), &request(&["Artist A"], 2))
        .await
        .unwrap();

    let playlist = report.playlist.unwrap();
    assert_eq!(playlist.playlist_id, "PLfest123");
    assert_eq!(playlist.total_tracks_added, 0);
    assert_eq!(report.stats.songs_added, 0);
    assert!(
        report
            .add_error
            .unwrap()
            .starts_with("Failed to add songs to playlist")
    );
}

#[tokio::test]
async fn test_nothing_found_creates_no_playlist() {
    let service = FakeMusicService::new();

    let err = create_festival_playlist(&service, &creds(), &request(&["Nobody", "Nobody Else"], 3))
        .await
        .unwrap_err();

    assert!(matches!(err.error, Error::NothingToAdd));
    assert_eq!(err.artists.len(), 2);
    assert!(err.artists.iter().all(|a| a.status == ArtistStatus::NotFound));
    assert_eq!(service.count(|c| matches!(c, Call::Search(_))), 2);
    assert_eq!(service.count(|c| matches!(c, Call::CreatePlaylist(_))), 0);
}

#[tokio::test]
async fn test_repeated_artist_adds_each_song_once() {
    let service = FakeMusicService::new().with_artist("Artist A", 3);

    let report = create_festival_playlist(&service, &creds(), &request(&["Artist A", "Artist A"], 3))
        .await
        .unwrap();

    assert_eq!(report.artists.len(), 2);
    assert_eq!(report.playlist.unwrap().total_tracks_added, 3);
    assert_eq!(report.stats.songs_added, 3);
    match service.calls().last() {
        Some(Call::AddItems(_, videos)) => {
            assert_eq!(videos, &["Artist_A-vid0", "Artist_A-vid1", "Artist_A-vid2"]);
        }
        other => panic!("last call was {:?}", other),
    }
}

#[test]
fn test_hint_classification() {
    assert_eq!(
        Hint::classify("Invalid or expired authentication: status 401"),
        Hint::Authentication
    );
    assert_eq!(Hint::classify("connection reset by peer"), Hint::Network);
    assert_eq!(Hint::classify("Too many requests"), Hint::RateLimit);
    assert_eq!(Hint::classify("something odd"), Hint::General);
    assert!(!Hint::General.advice().is_empty());
}

