use uuid::Uuid;
use web_sys::window;

const VIEWER_KEY: &str = "viewer_id";

/// The signed-in user's id, if the sign-in flow stored one. The value is
/// validated on every read so a corrupted entry never rides along as a
/// header the backend would have to reject.
pub fn viewer_id() -> Option<String> {
    let storage = window()?.local_storage().ok()??;
    let raw = storage.get_item(VIEWER_KEY).ok()??;
    Uuid::parse_str(raw.trim()).ok().map(|id| id.to_string())
}

pub fn remember_viewer(raw: &str) -> bool {
    let Ok(id) = Uuid::parse_str(raw.trim()) else {
        return false;
    };
    let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) else {
        return false;
    };
    storage.set_item(VIEWER_KEY, &id.to_string()).is_ok()
}

pub fn forget_viewer() {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(VIEWER_KEY);
    }
}
