//! Preferences kept in the browser between visits.
//!
//! Two things live here: the sidebar collapse flag and the saved Proxmox
//! connection form. Values are stored as JSON under `nexops.*` keys. A
//! missing, unreadable or corrupt entry reads back as `None`, so callers
//! always fall back to their defaults. Nothing is stored during SSR.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Decode a stored entry; corrupt JSON counts as absent.
fn decode_entry<T: DeserializeOwned>(raw: Option<&str>) -> Option<T> {
    serde_json::from_str(raw?).ok()
}

/// Read the preference stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    let raw = local_storage().and_then(|storage| storage.get_item(key).ok().flatten());
    #[cfg(not(feature = "hydrate"))]
    let raw = {
        let _ = key;
        None::<String>
    };
    decode_entry(raw.as_deref())
}

/// Store `value` under `key`; `false` when the browser refuses or has no storage.
pub fn save_json<T: Serialize>(key: &str, value: &T) -> bool {
    let Ok(encoded) = serde_json::to_string(value) else {
        return false;
    };
    #[cfg(feature = "hydrate")]
    {
        local_storage().is_some_and(|storage| storage.set_item(key, &encoded).is_ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, encoded);
        false
    }
}
