//! Browser `localStorage` access for the signed-in session.
//!
//! The portal keeps its session client-side: an access token under
//! `access`, the user JSON under `user`, and the role picked on the landing
//! screen under `selectedRole`. Nothing here is verified by a server.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort browser-only behavior; SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::StoredUser;

pub const ACCESS_KEY: &str = "access";
pub const USER_KEY: &str = "user";
pub const SELECTED_ROLE_KEY: &str = "selectedRole";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read a raw value from `localStorage`.
pub fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw value to `localStorage`.
pub fn write_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a value from `localStorage`.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Decode the stored user JSON. Malformed JSON is logged and treated as no user.
pub fn parse_stored_user(raw: &str) -> Option<StoredUser> {
    match serde_json::from_str::<StoredUser>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::error!("error parsing stored user data: {e}");
            None
        }
    }
}

/// A session is present only when both the user and the access token are.
pub fn session_from_parts(user_raw: Option<&str>, token: Option<&str>) -> Option<StoredUser> {
    match (user_raw, token) {
        (Some(raw), Some(token)) if !token.is_empty() => parse_stored_user(raw),
        _ => None,
    }
}

/// Load the stored session user, if any.
pub fn load_session() -> Option<StoredUser> {
    let user_raw = read_item(USER_KEY);
    let token = read_item(ACCESS_KEY);
    session_from_parts(user_raw.as_deref(), token.as_deref())
}

/// Persist a signed-in session.
pub fn save_session(token: &str, user: &StoredUser) {
    write_item(ACCESS_KEY, token);
    match serde_json::to_string(user) {
        Ok(json) => write_item(USER_KEY, &json),
        Err(e) => log::error!("error serializing user: {e}"),
    }
}

/// Forget the session and the selected role.
pub fn clear_session() {
    remove_item(ACCESS_KEY);
    remove_item(USER_KEY);
    remove_item(SELECTED_ROLE_KEY);
}

/// The role picked on the role-selection screen, as stored.
pub fn read_selected_role() -> Option<String> {
    read_item(SELECTED_ROLE_KEY)
}

pub fn save_selected_role(role: &str) {
    write_item(SELECTED_ROLE_KEY, role);
}
