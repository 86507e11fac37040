use crate::{management::TokenManager, success, warning};

pub async fn logout() {
    match TokenManager::clear().await {
        Ok(()) => success!("Logged out. Cached credentials removed."),
        Err(e) => warning!("No cached credentials to remove: {}", e),
    }
}
