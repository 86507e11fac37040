use reqwest::Client;

use crate::{
    config,
    spotify::{self, ApiError},
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUserResponse, MatchedTrack, Playlist,
    },
};

/// Maximum number of track URIs the API accepts per add-tracks request.
pub const ADD_TRACKS_LIMIT: usize = 100;

/// Splits resolved tracks into URI batches of at most [`ADD_TRACKS_LIMIT`],
/// preserving input order across batch boundaries. Concatenating the batches
/// in order reproduces the input.
pub fn uri_batches(tracks: &[MatchedTrack]) -> Vec<Vec<String>> {
    tracks
        .chunks(ADD_TRACKS_LIMIT)
        .map(|chunk| chunk.iter().map(|t| t.uri.clone()).collect())
        .collect()
}

/// Fetches the authenticated user's profile.
pub async fn current_user(token: &str) -> Result<CurrentUserResponse, ApiError> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let response = spotify::api_result(response)?;

    Ok(response.json::<CurrentUserResponse>().await?)
}

/// Creates an empty playlist owned by `user_id`.
///
/// Creation is not retried by this function; either the playlist exists with
/// an owner afterwards or the error is surfaced and nothing was created.
pub async fn create(
    user_id: &str,
    name: &str,
    description: &str,
    public: bool,
    token: &str,
) -> Result<Playlist, ApiError> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    let response = spotify::api_result(response)?;
    let created = response.json::<CreatePlaylistResponse>().await?;

    Ok(Playlist {
        id: created.id,
        url: created.external_urls.spotify,
        owner_id: created.owner.id,
    })
}

/// Adds one batch of track URIs to a playlist.
///
/// Callers must keep batches within [`ADD_TRACKS_LIMIT`]; use
/// [`uri_batches`] to split a resolved track list.
pub async fn add_tracks(playlist_id: &str, uris: &[String], token: &str) -> Result<(), ApiError> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let body = AddTracksRequest {
        uris: uris.to_vec(),
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    let response = spotify::api_result(response)?;
    let _ = response.json::<AddTracksResponse>().await?;

    Ok(())
}
