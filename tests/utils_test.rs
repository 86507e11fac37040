use setlistify::types::{City, SetBlock, Setlist, SetlistArtist, SetlistSong, Sets, Venue};
use setlistify::utils::*;

// Helper function to create a test setlist with one set block per inner list
fn create_test_setlist(songs_per_set: Vec<Vec<&str>>) -> Setlist {
    Setlist {
        id: "63de4613".to_string(),
        event_date: "23-07-2025".to_string(),
        artist: SetlistArtist {
            name: "Band X".to_string(),
            mbid: None,
        },
        venue: Venue {
            name: "Zenith".to_string(),
            city: City {
                name: "Paris".to_string(),
            },
        },
        sets: Sets {
            set: songs_per_set
                .into_iter()
                .map(|songs| SetBlock {
                    song: songs
                        .into_iter()
                        .map(|name| SetlistSong {
                            name: name.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        },
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_songs_from_setlist_dedup_and_placeholder() {
    let setlist = create_test_setlist(vec![vec!["Song A", "...", "Song A", "Song B"]]);

    let songs = songs_from_setlist(&setlist);

    // Placeholder removed, duplicate removed, input order kept
    assert_eq!(songs, vec!["Song A", "Song B"]);
}

#[test]
fn test_songs_from_setlist_spans_sets() {
    // Duplicates across set blocks (e.g. encore repeats) count as duplicates too
    let setlist = create_test_setlist(vec![vec!["Intro", "Song A"], vec!["Song B", "Song A"]]);

    let songs = songs_from_setlist(&setlist);

    assert_eq!(songs, vec!["Intro", "Song A", "Song B"]);
}

#[test]
fn test_songs_from_setlist_dedup_is_case_sensitive() {
    let setlist = create_test_setlist(vec![vec!["Song A", "song a"]]);

    let songs = songs_from_setlist(&setlist);

    assert_eq!(songs, vec!["Song A", "song a"]);
}

#[test]
fn test_songs_from_setlist_skips_empty_names() {
    let setlist = create_test_setlist(vec![vec!["", "Song A", ""]]);

    let songs = songs_from_setlist(&setlist);

    assert_eq!(songs, vec!["Song A"]);
}

#[test]
fn test_songs_from_setlist_empty_sets() {
    let setlist = create_test_setlist(vec![]);
    assert!(songs_from_setlist(&setlist).is_empty());

    let setlist = create_test_setlist(vec![vec![]]);
    assert!(songs_from_setlist(&setlist).is_empty());
}

#[test]
fn test_default_playlist_name() {
    let setlist = create_test_setlist(vec![vec!["Song A"]]);

    // Event date 23-07-2025 is rendered as 23.07.2025
    assert_eq!(default_playlist_name(&setlist), "Band X - Paris 23.07.2025");
}

#[test]
fn test_default_playlist_name_unparseable_date() {
    let mut setlist = create_test_setlist(vec![vec!["Song A"]]);
    setlist.event_date = "sometime".to_string();

    // An unparseable date is carried over verbatim
    assert_eq!(default_playlist_name(&setlist), "Band X - Paris sometime");
}
