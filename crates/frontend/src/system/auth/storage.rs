use contracts::domain::common::{AggregateId, EntityId};
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "pr_access_token";
const REFRESH_TOKEN_KEY: &str = "pr_refresh_token";
const ACTIVE_SECTOR_KEY: &str = "pr_active_sector";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Save refresh token to localStorage
pub fn save_refresh_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
    }
}

/// Get refresh token from localStorage
pub fn get_refresh_token() -> Option<String> {
    get_local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

/// Sector chosen in the header, restored on reload
pub fn get_active_sector() -> Option<EntityId> {
    let raw = get_local_storage()?.get_item(ACTIVE_SECTOR_KEY).ok()??;
    EntityId::from_string(&raw).ok()
}

pub fn save_active_sector(sector_id: Option<EntityId>) {
    if let Some(storage) = get_local_storage() {
        let _ = match sector_id {
            Some(id) => storage.set_item(ACTIVE_SECTOR_KEY, &id.as_string()),
            None => storage.remove_item(ACTIVE_SECTOR_KEY),
        };
    }
}
