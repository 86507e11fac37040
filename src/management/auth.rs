use std::path::PathBuf;

use chrono::Utc;

use crate::{
    spotify::auth::{self, AuthError},
    types::Token,
};

/// Owns the cached OAuth credential and its JSON file on disk.
///
/// The manager never hands out a stale token knowingly: [`Self::get_valid_token`]
/// refreshes proactively when the cached token has expired. Refreshing builds
/// a new [`Token`] value; the superseded one is dropped, never mutated.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Removes the cached credential. Used on logout and after an
    /// irrecoverable refresh failure; the session cannot be restored without
    /// a fresh authorization.
    pub async fn clear() -> Result<(), String> {
        async_fs::remove_file(Self::token_path())
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns an access token that is valid right now, refreshing first if
    /// the cached one has expired.
    pub async fn get_valid_token(&mut self) -> Result<String, AuthError> {
        let now = Utc::now().timestamp() as u64;
        if self.token.is_expired(now) {
            self.refresh().await?;
        }

        Ok(self.token.access_token.clone())
    }

    /// Replaces the current token with a freshly refreshed one.
    ///
    /// A token without a refresh token cannot be renewed and fails with
    /// [`AuthError::Refresh`]. When the provider omits a rotated refresh
    /// token in its response, the previous one is inherited so the session
    /// stays refreshable.
    pub async fn refresh(&mut self) -> Result<(), AuthError> {
        let Some(refresh) = self.token.refresh_token.clone() else {
            return Err(AuthError::Refresh(
                "no refresh token cached; a fresh login is required".to_string(),
            ));
        };

        let mut new_token = auth::refresh_token(&refresh).await?;
        if new_token.refresh_token.is_none() {
            new_token.refresh_token = Some(refresh);
        }

        self.token = new_token;
        let _ = self.persist().await;
        Ok(())
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("setlistify/cache/token.json");
        path
    }
}
