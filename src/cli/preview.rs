use tabled::Table;

use crate::{
    error, info,
    management::{PipelineRunner, RunError, TokenManager},
    setlist, success,
    types::MatchTableRow,
    utils, warning,
};

pub async fn preview(url: String) {
    let setlist = match setlist::from_url(&url).await {
        Ok(setlist) => setlist,
        Err(e) => error!("Failed to fetch setlist: {}", e),
    };

    let titles = utils::songs_from_setlist(&setlist);
    info!(
        "{} at {}, {} ({}): {} songs",
        setlist.artist.name,
        setlist.venue.name,
        setlist.venue.city.name,
        setlist.event_date,
        titles.len()
    );
    if titles.is_empty() {
        error!("Nothing to resolve.");
    }

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

    match runner.resolve(&titles, &setlist.artist.name).await {
        Ok(resolution) => {
            let table_rows: Vec<MatchTableRow> = resolution
                .matched
                .iter()
                .map(|t| MatchTableRow {
                    track: t.title.clone(),
                    artists: t.artist_names.join(", "),
                })
                .collect();

            if !table_rows.is_empty() {
                let table = Table::new(table_rows);
                println!("{}", table);
            }

            success!(
                "{} of {} songs matched",
                resolution.matched.len(),
                titles.len()
            );
            for title in &resolution.unmatched {
                warning!("No match: {}", title);
            }
        }
        Err(RunError::SessionExpired) => {
            let _ = TokenManager::clear().await;
            error!("{}", RunError::SessionExpired);
        }
        Err(e) => error!("{}", e),
    }
}
