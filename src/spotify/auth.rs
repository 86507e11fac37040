use std::{fmt, sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// Failures of the token lifecycle endpoints.
///
/// Neither variant is retried internally: a rejected code exchange means the
/// login has to be restarted, a rejected refresh means the session is over
/// and the cached credential must be discarded.
#[derive(Debug)]
pub enum AuthError {
    /// The provider rejected the authorization-code exchange.
    Exchange(String),
    /// The provider rejected the refresh token (expired, revoked) or no
    /// refresh token was available.
    Refresh(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Exchange(msg) => write!(f, "code exchange failed: {}", msg),
            AuthError::Refresh(msg) => write!(f, "token refresh failed: {}", msg),
        }
    }
}

/// Initiates the complete OAuth 2.0 PKCE authentication flow with Spotify.
///
/// This function orchestrates the entire authentication process:
/// 1. Generating PKCE code verifier and challenge
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the OAuth callback to exchange the code
/// 5. Persisting the obtained token for future use
///
/// The PKCE (Proof Key for Code Exchange) flow provides OAuth security
/// without requiring a client secret to be stored, which a command-line tool
/// could not keep confidential.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state carrying PKCE information
///   and the resulting token between the auth flow and the callback handler
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope()
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            // initialize token manager with token
            let token_manager = TokenManager::new(t.clone());
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state for a completed authentication token with a
/// 60-second timeout. This function runs concurrently with the callback
/// handler that populates the token after a successful exchange.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// Completes the OAuth flow by posting the authorization code received from
/// the callback together with the code verifier that was generated at the
/// start of the flow. The verifier proves that the client completing the flow
/// is the one that initiated it.
///
/// Fails with [`AuthError::Exchange`] if the provider rejects the code
/// (network error or non-2xx response); there is no retry, the caller must
/// restart the login.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, AuthError> {
    let client_id = config::spotify_client_id();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", &client_id),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", &redirect_uri),
        ])
        .send()
        .await
        .map_err(|e| AuthError::Exchange(e.to_string()))?
        .error_for_status()
        .map_err(|e| AuthError::Exchange(e.to_string()))?;

    let token_response = res
        .json::<TokenResponse>()
        .await
        .map_err(|e| AuthError::Exchange(e.to_string()))?;

    Ok(token_response.into_token(Utc::now().timestamp() as u64))
}

/// Refreshes an expired access token using a refresh token.
///
/// Exchanges a refresh token for a new access token so the application can
/// keep authenticated access without the user re-authorizing. The response
/// may rotate the refresh token or omit it entirely; the returned token
/// carries exactly what the provider sent, and the caller decides whether to
/// inherit the previous refresh token.
///
/// Fails with [`AuthError::Refresh`] if the provider rejects the refresh
/// token (expired, revoked). On that error the caller must treat the session
/// as logged out: the old credential is discarded and no partial state
/// survives.
pub async fn refresh_token(refresh_token: &str) -> Result<Token, AuthError> {
    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", &config::spotify_client_id()),
        ])
        .send()
        .await
        .map_err(|e| AuthError::Refresh(e.to_string()))?
        .error_for_status()
        .map_err(|e| AuthError::Refresh(e.to_string()))?;

    let token_response = res
        .json::<TokenResponse>()
        .await
        .map_err(|e| AuthError::Refresh(e.to_string()))?;

    Ok(token_response.into_token(Utc::now().timestamp() as u64))
}
