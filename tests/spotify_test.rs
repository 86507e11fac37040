use setlistify::spotify::playlist::{ADD_TRACKS_LIMIT, uri_batches};
use setlistify::spotify::search::{build_queries, select_candidate};
use setlistify::types::{
    AlbumImage, MatchedTrack, Token, TrackAlbum, TrackArtist, TrackItem,
};

// Helper function to create a test track candidate
fn create_test_track(id: &str, name: &str, artist_names: &[&str]) -> TrackItem {
    TrackItem {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
        artists: artist_names
            .iter()
            .map(|name| TrackArtist {
                name: name.to_string(),
            })
            .collect(),
        album: TrackAlbum { images: vec![] },
    }
}

// Helper function to create a resolved track for batching tests
fn create_matched_track(index: usize) -> MatchedTrack {
    MatchedTrack {
        id: format!("id{}", index),
        title: format!("Track {}", index),
        artist_names: vec!["Band X".to_string()],
        uri: format!("spotify:track:{}", index),
        album_art_url: None,
    }
}

#[test]
fn test_build_queries_order() {
    let queries = build_queries("Karma Police", "Radiohead");

    // Most precise first, loosest last
    assert_eq!(queries[0], "track:\"Karma Police\" artist:\"Radiohead\"");
    assert_eq!(queries[1], "Karma Police Radiohead");
    assert_eq!(queries[2], "Karma Police");
}

#[test]
fn test_select_candidate_prefers_exact_artist_match() {
    let candidates = vec![
        create_test_track("cover", "Song A", &["Tribute Band"]),
        create_test_track("orig", "Song A", &["band x"]),
    ];

    // Case-insensitive exact artist match wins over the top search result
    let selected = select_candidate(&candidates, "Band X").unwrap();
    assert_eq!(selected.id, "orig");
}

#[test]
fn test_select_candidate_checks_all_listed_artists() {
    let candidates = vec![create_test_track(
        "feat",
        "Song A",
        &["Someone Else", "Band X"],
    )];

    let selected = select_candidate(&candidates, "band x").unwrap();
    assert_eq!(selected.id, "feat");
}

#[test]
fn test_select_candidate_falls_back_to_first() {
    let candidates = vec![
        create_test_track("top", "Song A", &["Tribute Band"]),
        create_test_track("other", "Song A", &["Another Band"]),
    ];

    // Without an exact artist match the provider's top result is taken
    let selected = select_candidate(&candidates, "Band X").unwrap();
    assert_eq!(selected.id, "top");
}

#[test]
fn test_select_candidate_empty() {
    assert!(select_candidate(&[], "Band X").is_none());
}

#[test]
fn test_select_candidate_is_deterministic() {
    let candidates = vec![
        create_test_track("a", "Song A", &["Band X"]),
        create_test_track("b", "Song A", &["Band X"]),
    ];

    let first = select_candidate(&candidates, "Band X").unwrap().id.clone();
    let second = select_candidate(&candidates, "Band X").unwrap().id.clone();
    assert_eq!(first, second);
}

#[test]
fn test_uri_batches_chunk_sizes() {
    let tracks: Vec<MatchedTrack> = (0..250).map(create_matched_track).collect();

    let batches = uri_batches(&tracks);

    // 250 tracks need exactly ceil(250/100) = 3 calls of 100, 100, 50
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 100);
    assert_eq!(batches[1].len(), 100);
    assert_eq!(batches[2].len(), 50);

    // Concatenating the batches in call order reproduces the input order
    let flattened: Vec<String> = batches.into_iter().flatten().collect();
    let expected: Vec<String> = tracks.iter().map(|t| t.uri.clone()).collect();
    assert_eq!(flattened, expected);
}

#[test]
fn test_uri_batches_boundaries() {
    assert!(uri_batches(&[]).is_empty());

    let exactly_one: Vec<MatchedTrack> = (0..ADD_TRACKS_LIMIT).map(create_matched_track).collect();
    assert_eq!(uri_batches(&exactly_one).len(), 1);

    let one_over: Vec<MatchedTrack> =
        (0..ADD_TRACKS_LIMIT + 1).map(create_matched_track).collect();
    let batches = uri_batches(&one_over);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[1].len(), 1);
}

#[test]
fn test_token_expiry_predicates() {
    let token = Token {
        access_token: "access".to_string(),
        refresh_token: Some("refresh".to_string()),
        scope: "playlist-modify-private".to_string(),
        expires_in: 3600,
        obtained_at: 1000,
    };

    assert_eq!(token.expires_at(), 4600);
    assert!(!token.is_expired(4599));
    assert!(token.is_expired(4600));
    assert!(token.is_expired(5000));
    assert!(token.can_refresh());

    let without_refresh = Token {
        refresh_token: None,
        ..token
    };
    assert!(!without_refresh.can_refresh());
}

#[test]
fn test_matched_track_from_item() {
    let mut item = create_test_track("id1", "Song A", &["Band X", "Guest"]);
    item.album = TrackAlbum {
        images: vec![
            AlbumImage {
                url: "https://img.example/large.jpg".to_string(),
            },
            AlbumImage {
                url: "https://img.example/small.jpg".to_string(),
            },
        ],
    };

    let track = MatchedTrack::from(item);

    assert_eq!(track.id, "id1");
    assert_eq!(track.title, "Song A");
    assert_eq!(track.artist_names, vec!["Band X", "Guest"]);
    assert_eq!(track.uri, "spotify:track:id1");
    assert_eq!(
        track.album_art_url.as_deref(),
        Some("https://img.example/large.jpg")
    );

    let plain = create_test_track("id2", "Song B", &["Band X"]);
    assert!(MatchedTrack::from(plain).album_art_url.is_none());
}
