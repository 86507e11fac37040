use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::NaiveDate;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::Setlist;

/// Marker setlist.fm uses for a song whose title is unknown.
pub const SONG_PLACEHOLDER: &str = "...";

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Flattens a setlist into the list of song titles to resolve.
///
/// Empty names and the `"..."` placeholder are skipped, and duplicates are
/// removed by exact value while the first-occurrence order is kept.
pub fn songs_from_setlist(setlist: &Setlist) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut songs = Vec::new();
    for block in &setlist.sets.set {
        for song in &block.song {
            if song.name.is_empty() || song.name == SONG_PLACEHOLDER {
                continue;
            }
            if seen.insert(song.name.clone()) {
                songs.push(song.name.clone());
            }
        }
    }
    songs
}

/// Default playlist name for a setlist: artist, city and the event date.
///
/// setlist.fm reports event dates as `dd-MM-yyyy`; an unparseable date is
/// carried over verbatim.
pub fn default_playlist_name(setlist: &Setlist) -> String {
    let date = NaiveDate::parse_from_str(&setlist.event_date, "%d-%m-%Y")
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| setlist.event_date.clone());

    format!(
        "{} - {} {}",
        setlist.artist.name, setlist.venue.city.name, date
    )
}
