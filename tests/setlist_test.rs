use setlistify::setlist::extract_setlist_id;
use setlistify::types::Setlist;
use setlistify::utils::songs_from_setlist;

#[test]
fn test_extract_id_from_canonical_url() {
    let url =
        "https://www.setlist.fm/setlist/radiohead/2016/zenith-paris-france-63de4613.html";

    assert_eq!(extract_setlist_id(url), Some("63de4613".to_string()));
}

#[test]
fn test_extract_id_from_short_url() {
    let url = "https://www.setlist.fm/some-show-63de4613.html";

    assert_eq!(extract_setlist_id(url), Some("63de4613".to_string()));
}

#[test]
fn test_extract_id_from_bare_id() {
    assert_eq!(extract_setlist_id("63de4613"), Some("63de4613".to_string()));
}

#[test]
fn test_extract_id_rejects_other_urls() {
    assert_eq!(extract_setlist_id("https://example.com/page"), None);
    assert_eq!(extract_setlist_id(""), None);
}

#[test]
fn test_setlist_deserializes_from_api_json() {
    let json = r#"{
        "id": "63de4613",
        "eventDate": "23-07-2025",
        "artist": { "mbid": "a74b1b7f-71a5-4011-9441-d0b5e4122711", "name": "Radiohead" },
        "venue": { "name": "Zenith", "city": { "name": "Paris", "country": { "name": "France" } } },
        "sets": {
            "set": [
                { "song": [ { "name": "Airbag" }, { "name": "..." } ] },
                { "song": [ { "name": "Karma Police" }, { "name": "Airbag" } ] }
            ]
        }
    }"#;

    let setlist: Setlist = serde_json::from_str(json).expect("setlist JSON should deserialize");

    assert_eq!(setlist.id, "63de4613");
    assert_eq!(setlist.artist.name, "Radiohead");
    assert_eq!(setlist.venue.city.name, "Paris");
    assert_eq!(setlist.sets.set.len(), 2);

    // Placeholder and the repeated song fall away
    let songs = songs_from_setlist(&setlist);
    assert_eq!(songs, vec!["Airbag", "Karma Police"]);
}

#[test]
fn test_setlist_deserializes_without_sets() {
    let json = r#"{
        "id": "63de4613",
        "eventDate": "23-07-2025",
        "artist": { "name": "Radiohead" },
        "venue": { "name": "Zenith", "city": { "name": "Paris" } }
    }"#;

    let setlist: Setlist = serde_json::from_str(json).expect("setlist JSON should deserialize");

    assert!(setlist.sets.set.is_empty());
    assert!(songs_from_setlist(&setlist).is_empty());
}
