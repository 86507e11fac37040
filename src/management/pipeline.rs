use std::{fmt, future::Future};

use crate::{
    management::TokenManager,
    spotify::{ApiError, playlist, search},
    types::{MatchedTrack, Playlist, ResolutionResult},
};

/// Result of a completed setlist-to-playlist run.
pub struct RunOutcome {
    pub playlist: Playlist,
    pub unmatched: Vec<String>,
}

#[derive(Debug)]
pub enum RunError {
    /// The credential could not be made valid: a second unauthorized
    /// response after the one refresh this run was allowed, or a rejected
    /// refresh. Only a fresh login recovers from this.
    SessionExpired,
    /// Track resolution failed as a whole (not a per-song miss).
    Resolution(ApiError),
    /// User lookup or playlist creation failed; no playlist was produced.
    PlaylistCreation(ApiError),
    /// A track batch failed after the playlist was created. Carries the
    /// partially populated playlist and how many tracks made it in.
    BatchAdd {
        playlist: Playlist,
        added: usize,
        source: ApiError,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::SessionExpired => {
                write!(f, "session expired; run `setlistify auth` to log in again")
            }
            RunError::Resolution(err) => write!(f, "track resolution failed: {}", err),
            RunError::PlaylistCreation(err) => write!(f, "playlist creation failed: {}", err),
            RunError::BatchAdd {
                playlist,
                added,
                source,
            } => write!(
                f,
                "playlist {} was created but only {} tracks were added: {}",
                playlist.id, added, source
            ),
        }
    }
}

enum CallError {
    SessionExpired,
    Api(ApiError),
}

/// Drives one setlist-to-playlist run: Resolving, then Assembling.
///
/// The runner owns the credential for the duration of the run and enforces
/// the retry contract: across the whole run at most one unauthorized
/// response is answered with a token refresh and a replay of the failed
/// call. Resolution is replayed wholesale (it is read-only); assembly
/// retries the individual step that failed, so an already-created playlist
/// is never created twice. A second unauthorized response is terminal.
pub struct PipelineRunner {
    tokens: TokenManager,
    refresh_available: bool,
}

impl PipelineRunner {
    pub fn new(tokens: TokenManager) -> Self {
        Self {
            tokens,
            refresh_available: true,
        }
    }

    /// Resolves the song titles against the catalog.
    pub async fn resolve(
        &mut self,
        titles: &[String],
        artist: &str,
    ) -> Result<ResolutionResult, RunError> {
        self.with_auth_retry(|token| async move { search::resolve(titles, artist, &token).await })
            .await
            .map_err(|e| match e {
                CallError::SessionExpired => RunError::SessionExpired,
                CallError::Api(err) => RunError::Resolution(err),
            })
    }

    /// Creates the playlist and populates it with the resolved tracks.
    ///
    /// Three provider calls in strict order: current user, playlist
    /// creation, then one add-tracks call per batch of at most
    /// [`playlist::ADD_TRACKS_LIMIT`] URIs, preserving track order across
    /// batch boundaries.
    pub async fn assemble(
        &mut self,
        name: &str,
        description: &str,
        tracks: &[MatchedTrack],
        public: bool,
    ) -> Result<Playlist, RunError> {
        let user = self
            .with_auth_retry(|token| async move { playlist::current_user(&token).await })
            .await
            .map_err(Self::creation_error)?;

        let user_id = user.id.as_str();
        let created = self
            .with_auth_retry(|token| async move {
                playlist::create(user_id, name, description, public, &token).await
            })
            .await
            .map_err(Self::creation_error)?;

        let mut added = 0usize;
        for batch in playlist::uri_batches(tracks) {
            let playlist_id = created.id.as_str();
            let uris = batch.as_slice();
            self.with_auth_retry(|token| async move {
                playlist::add_tracks(playlist_id, uris, &token).await
            })
            .await
            .map_err(|e| match e {
                CallError::SessionExpired => RunError::SessionExpired,
                CallError::Api(source) => RunError::BatchAdd {
                    playlist: created.clone(),
                    added,
                    source,
                },
            })?;

            added += batch.len();
        }

        Ok(created)
    }

    /// One end-to-end run; returns the playlist together with the titles
    /// that could not be resolved.
    pub async fn run(
        &mut self,
        titles: &[String],
        artist: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<RunOutcome, RunError> {
        let resolution = self.resolve(titles, artist).await?;
        let playlist = self
            .assemble(name, description, &resolution.matched, public)
            .await?;

        Ok(RunOutcome {
            playlist,
            unmatched: resolution.unmatched,
        })
    }

    /// Runs one provider call with the shared auth-retry budget.
    ///
    /// The call gets a token that is valid as far as the cache knows
    /// (expired tokens are refreshed proactively). An unauthorized response
    /// consumes the run's single reactive refresh and replays the call once;
    /// unauthorized again, an exhausted budget, or a failing refresh all end
    /// the session.
    async fn with_auth_retry<T, F, Fut>(&mut self, mut op: F) -> Result<T, CallError>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let token = self
            .tokens
            .get_valid_token()
            .await
            .map_err(|_| CallError::SessionExpired)?;

        match op(token).await {
            Ok(value) => return Ok(value),
            Err(ApiError::Unauthorized) => {}
            Err(err) => return Err(CallError::Api(err)),
        }

        if !self.refresh_available {
            return Err(CallError::SessionExpired);
        }
        self.refresh_available = false;

        if self.tokens.refresh().await.is_err() {
            return Err(CallError::SessionExpired);
        }

        match op(self.tokens.current_token().access_token.clone()).await {
            Ok(value) => Ok(value),
            Err(ApiError::Unauthorized) => Err(CallError::SessionExpired),
            Err(err) => Err(CallError::Api(err)),
        }
    }

    fn creation_error(e: CallError) -> RunError {
        match e {
            CallError::SessionExpired => RunError::SessionExpired,
            CallError::Api(err) => RunError::PlaylistCreation(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::Token;

    // A token that is valid for the whole test, so no proactive refresh kicks in
    fn fresh_tokens() -> TokenManager {
        TokenManager::new(Token {
            access_token: "access".to_string(),
            refresh_token: Some("refresh".to_string()),
            scope: "playlist-modify-private".to_string(),
            expires_in: 3600,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    #[tokio::test]
    async fn success_keeps_refresh_budget() {
        let mut runner = PipelineRunner::new(fresh_tokens());

        let result = runner
            .with_auth_retry(|_token| async { Ok::<_, ApiError>(7) })
            .await;

        assert!(matches!(result, Ok(7)));
        assert!(runner.refresh_available);
    }

    #[tokio::test]
    async fn non_auth_error_passes_through_untouched() {
        let mut runner = PipelineRunner::new(fresh_tokens());

        let mut calls = 0;
        let result = runner
            .with_auth_retry(|_token| {
                calls += 1;
                async { Err::<u32, _>(ApiError::NotFound) }
            })
            .await;

        assert!(matches!(result, Err(CallError::Api(ApiError::NotFound))));
        assert_eq!(calls, 1);
        assert!(runner.refresh_available);
    }

    #[tokio::test]
    async fn unauthorized_after_spent_budget_is_terminal() {
        let mut runner = PipelineRunner::new(fresh_tokens());
        runner.refresh_available = false;

        let mut calls = 0;
        let result = runner
            .with_auth_retry(|_token| {
                calls += 1;
                async { Err::<u32, _>(ApiError::Unauthorized) }
            })
            .await;

        // No replay and no second refresh once the budget is gone
        assert!(matches!(result, Err(CallError::SessionExpired)));
        assert_eq!(calls, 1);
    }
}
