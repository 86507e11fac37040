use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::time::sleep;

use crate::{
    config,
    spotify::{self, ApiError},
    types::{MatchedTrack, ResolutionResult, SearchTracksResponse, TrackItem},
    warning,
};

/// Candidates requested per search query. The provider's ranking puts the
/// most relevant results first, so a small page is enough.
pub const SEARCH_LIMIT: u32 = 5;

/// Longest `Retry-After` delay the search loop will sit out itself.
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// The ordered query fallback for one song title.
///
/// The provider's search is lexical, not semantic: the field-qualified query
/// misses on minor formatting differences (punctuation, live-version
/// suffixes), so progressively looser queries recover more matches. The
/// artist check in [`select_candidate`] keeps the looser queries honest.
pub fn build_queries(title: &str, artist: &str) -> [String; 3] {
    [
        format!("track:\"{title}\" artist:\"{artist}\""),
        format!("{title} {artist}"),
        title.to_string(),
    ]
}

/// Picks the track to use from a non-empty candidate set.
///
/// Prefers the first candidate whose artist list contains a case-insensitive
/// exact match of `artist`, which keeps cover versions and same-titled songs
/// by other artists from outranking the true performer. Without such a
/// candidate the provider's top result is taken as a best effort.
pub fn select_candidate<'a>(candidates: &'a [TrackItem], artist: &str) -> Option<&'a TrackItem> {
    let wanted = artist.to_lowercase();
    candidates
        .iter()
        .find(|track| {
            track
                .artists
                .iter()
                .any(|a| a.name.to_lowercase() == wanted)
        })
        .or_else(|| candidates.first())
}

/// Runs one track search query against the Spotify Web API.
///
/// Rate-limit responses are slept out and retried when the advertised delay
/// is at most [`MAX_RETRY_AFTER_SECS`]; longer delays are surfaced to the
/// caller. All other errors propagate as their [`ApiError`] tag.
pub async fn search_tracks(
    query: &str,
    limit: u32,
    token: &str,
) -> Result<Vec<TrackItem>, ApiError> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());
    let limit = limit.to_string();

    loop {
        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .bearer_auth(token)
            .send()
            .await?;

        match spotify::api_result(response) {
            Ok(response) => {
                let res = response.json::<SearchTracksResponse>().await?;
                return Ok(res.tracks.items);
            }
            Err(ApiError::RateLimited(retry_after)) if retry_after <= MAX_RETRY_AFTER_SECS => {
                sleep(Duration::from_secs(retry_after)).await;
                continue; // retry
            }
            Err(err) => return Err(err),
        }
    }
}

/// Resolves song titles to catalog tracks, one title at a time in input
/// order.
///
/// Per title the queries from [`build_queries`] are tried in order and the
/// first non-empty candidate set decides the match via [`select_candidate`];
/// a title all three queries come back empty for ends up unmatched.
///
/// A network or provider error on a single title marks only that title
/// unmatched and the loop continues; one song must never abort resolution of
/// the rest. The exception is [`ApiError::Unauthorized`], which aborts and
/// propagates so the whole resolution can be replayed once with a refreshed
/// credential.
pub async fn resolve(
    titles: &[String],
    artist: &str,
    token: &str,
) -> Result<ResolutionResult, ApiError> {
    let mut matched: Vec<MatchedTrack> = Vec::new();
    let mut unmatched: Vec<String> = Vec::new();

    let pb = ProgressBar::new(titles.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    for title in titles {
        pb.set_message(title.clone());

        match resolve_one(title, artist, token).await {
            Ok(Some(track)) => matched.push(track),
            Ok(None) => unmatched.push(title.clone()),
            Err(ApiError::Unauthorized) => {
                pb.finish_and_clear();
                return Err(ApiError::Unauthorized);
            }
            Err(err) => {
                warning!("Search for '{}' failed: {}", title, err);
                unmatched.push(title.clone());
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(ResolutionResult { matched, unmatched })
}

async fn resolve_one(
    title: &str,
    artist: &str,
    token: &str,
) -> Result<Option<MatchedTrack>, ApiError> {
    for query in build_queries(title, artist) {
        let candidates = search_tracks(&query, SEARCH_LIMIT, token).await?;
        if !candidates.is_empty() {
            return Ok(select_candidate(&candidates, artist)
                .cloned()
                .map(MatchedTrack::from));
        }
    }

    Ok(None)
}
