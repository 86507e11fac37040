use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// An OAuth credential set as cached on disk.
///
/// A token without a `refresh_token` cannot be renewed and has to be replaced
/// by a fresh authorization. Tokens are never mutated in place; a refresh
/// produces a new value that supersedes the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Unix timestamp at which the access token stops being accepted.
    pub fn expires_at(&self) -> u64 {
        self.obtained_at + self.expires_in
    }

    /// Whether the access token is expired at `now` (Unix seconds).
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at()
    }

    pub fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }
}

/// Token response of the accounts service, for both the authorization-code
/// exchange and the refresh grant. Refresh responses may omit the rotated
/// refresh token and the scope.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
}

impl TokenResponse {
    pub fn into_token(self, obtained_at: u64) -> Token {
        Token {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            scope: self.scope,
            expires_in: self.expires_in,
            obtained_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

// ---------------------------------------------------------------------------
// setlist.fm wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setlist {
    pub id: String,
    #[serde(rename = "eventDate")]
    pub event_date: String,
    pub artist: SetlistArtist,
    pub venue: Venue,
    #[serde(default)]
    pub sets: Sets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetlistArtist {
    pub name: String,
    pub mbid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub city: City,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sets {
    #[serde(default)]
    pub set: Vec<SetBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBlock {
    #[serde(default)]
    pub song: Vec<SetlistSong>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetlistSong {
    #[serde(default)]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Spotify wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub external_urls: ExternalUrls,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

// ---------------------------------------------------------------------------
// Domain types
// ---------------------------------------------------------------------------

/// A catalog track a song title was resolved to. Immutable once produced by
/// the resolver; at most one per input title.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedTrack {
    pub id: String,
    pub title: String,
    pub artist_names: Vec<String>,
    pub uri: String,
    pub album_art_url: Option<String>,
}

impl From<TrackItem> for MatchedTrack {
    fn from(item: TrackItem) -> Self {
        MatchedTrack {
            id: item.id,
            title: item.name,
            artist_names: item.artists.into_iter().map(|a| a.name).collect(),
            uri: item.uri,
            album_art_url: item.album.images.into_iter().next().map(|i| i.url),
        }
    }
}

/// Outcome of resolving a list of song titles. Every input title lands in
/// exactly one of the two sequences, both kept in input order.
#[derive(Debug, Clone, Default)]
pub struct ResolutionResult {
    pub matched: Vec<MatchedTrack>,
    pub unmatched: Vec<String>,
}

/// A created playlist. Never mutated after track population completes.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub id: String,
    pub url: String,
    pub owner_id: String,
}

#[derive(Tabled)]
pub struct MatchTableRow {
    pub track: String,
    pub artists: String,
}
