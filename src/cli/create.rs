use crate::{
    error, info,
    management::{PipelineRunner, RunError, TokenManager},
    setlist, success, utils, warning,
};

pub async fn create(url: String, name: Option<String>, description: Option<String>, public: bool) {
    let setlist = match setlist::from_url(&url).await {
        Ok(setlist) => setlist,
        Err(e) => error!("Failed to fetch setlist: {}", e),
    };

    let titles = utils::songs_from_setlist(&setlist);
    if titles.is_empty() {
        error!("Setlist {} contains no usable song titles.", setlist.id);
    }

    let playlist_name = name.unwrap_or_else(|| utils::default_playlist_name(&setlist));
    let description = description.unwrap_or_else(|| String::from("Created with setlistify"));

    let tokens = match TokenManager::load().await {
        Ok(tokens) => tokens,
        Err(e) => {
            error!(
                "Failed to load token. Please run setlistify auth\n Error: {}",
                e
            );
        }
    };
    let mut runner = PipelineRunner::new(tokens);

    info!(
        "Resolving {} songs by {} against the Spotify catalog",
        titles.len(),
        setlist.artist.name
    );

    match runner
        .run(
            &titles,
            &setlist.artist.name,
            &playlist_name,
            &description,
            public,
        )
        .await
    {
        Ok(outcome) => {
            let added = titles.len() - outcome.unmatched.len();
            success!(
                "Playlist '{}' created with {} tracks: {}",
                playlist_name,
                added,
                outcome.playlist.url
            );

            if !outcome.unmatched.is_empty() {
                warning!(
                    "{} songs could not be matched:",
                    outcome.unmatched.len()
                );
                for title in &outcome.unmatched {
                    warning!("  {}", title);
                }
            }
        }
        Err(RunError::SessionExpired) => {
            let _ = TokenManager::clear().await;
            error!("{}", RunError::SessionExpired);
        }
        Err(e @ RunError::BatchAdd { .. }) => {
            warning!("{}", e);
            error!("The playlist exists but is incomplete. Retry the command to build it again in full.");
        }
        Err(e) => error!("{}", e),
    }
}
