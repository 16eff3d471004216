use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use gloo_storage::Storage;

pub const KEY_SELECTED_VIEW: &str = "clubdeck_view";
pub const KEY_DIVISION_FILTER: &str = "clubdeck_division";
pub const KEY_COLLAPSED_DIVISIONS: &str = "clubdeck_collapsed_divisions";
pub const KEY_COLLAPSED_GAMES: &str = "clubdeck_collapsed_games";

/// Minimal key-value surface over the browser's per-tab session storage.
/// Values are plain strings (JSON where structured), overwritten wholesale
/// on write; no schema versioning.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Production store backed by `sessionStorage`.
#[derive(Clone, Copy, Default)]
pub struct SessionStore;

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        gloo_storage::SessionStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = gloo_storage::SessionStorage::set(key, value.to_string());
    }

    fn remove(&self, key: &str) {
        gloo_storage::SessionStorage::delete(key);
    }
}

/// In-memory store substituted for `SessionStore` in tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read a persisted set of group names. Missing or malformed values decode
/// as the empty set.
pub fn load_name_set(store: &dyn KeyValueStore, key: &str) -> HashSet<String> {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_name_set(store: &dyn KeyValueStore, key: &str, set: &HashSet<String>) {
    // Sort for a stable stored representation.
    let mut names: Vec<&str> = set.iter().map(String::as_str).collect();
    names.sort_unstable();
    if let Ok(raw) = serde_json::to_string(&names) {
        store.set(key, &raw);
    }
}

/// Flip `name`'s membership in the persisted set; returns true when the
/// name is collapsed after the toggle.
pub fn toggle_name(store: &dyn KeyValueStore, key: &str, name: &str) -> bool {
    let mut set = load_name_set(store, key);
    let collapsed = if set.remove(name) {
        false
    } else {
        set.insert(name.to_string());
        true
    };
    save_name_set(store, key, &set);
    collapsed
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore, load_name_set, save_name_set, toggle_name};
    use std::collections::HashSet;

    #[test]
    fn toggle_twice_restores_original_membership() {
        let store = MemoryStore::default();
        let before: HashSet<String> = ["Strategy".to_string()].into_iter().collect();
        save_name_set(&store, "k", &before);

        assert!(toggle_name(&store, "k", "Shooter"));
        assert!(!toggle_name(&store, "k", "Shooter"));
        assert_eq!(load_name_set(&store, "k"), before);
    }

    #[test]
    fn missing_or_malformed_value_loads_as_empty_set() {
        let store = MemoryStore::default();
        assert!(load_name_set(&store, "absent").is_empty());

        store.set("bad", "not json");
        assert!(load_name_set(&store, "bad").is_empty());
    }

    #[test]
    fn toggle_reports_collapsed_state() {
        let store = MemoryStore::default();
        assert!(toggle_name(&store, "k", "Sports"));
        assert!(load_name_set(&store, "k").contains("Sports"));
        assert!(!toggle_name(&store, "k", "Sports"));
        assert!(!load_name_set(&store, "k").contains("Sports"));
    }
}
