//! Session persistence in `localStorage`.
//!
//! The token is kept under its own key so the HTTP layer can read it
//! without deserializing the whole session.

use contracts::system::auth::LoginResponse;
use web_sys::window;

const TOKEN_KEY: &str = "crm_access_token";
const SESSION_KEY: &str = "crm_session";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn save_session(session: &LoginResponse) {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, &session.access_token);
    if let Ok(json) = serde_json::to_string(session) {
        let _ = storage.set_item(SESSION_KEY, &json);
    }
}

pub fn load_session() -> Option<LoginResponse> {
    let json = local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(SESSION_KEY);
    }
}
