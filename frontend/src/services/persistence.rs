use shared::{PersistedState, PERSIST_KEY};
use web_sys::Storage;

use super::logging::Logger;

const COMPONENT: &str = "persistence";

/// `localStorage`, if the browser lets this page use it.
///
/// Private modes and blocked cookies either throw on access or hand back
/// nothing; both mean the app runs without persistence.
fn local_storage() -> Option<Storage> {
    match gloo::utils::window().local_storage() {
        Ok(Some(storage)) => Some(storage),
        Ok(None) => {
            Logger::warn_with_component(COMPONENT, "localStorage is not available");
            None
        }
        Err(e) => {
            Logger::warn_with_component(COMPONENT, &format!("localStorage unavailable: {:?}", e));
            None
        }
    }
}

/// Read the persisted slices left by a previous session.
///
/// Missing, unreadable or outdated snapshots all yield `None` so the store
/// starts from defaults.
pub fn load() -> Option<PersistedState> {
    read_snapshot(local_storage().as_ref())
}

fn read_snapshot(storage: Option<&Storage>) -> Option<PersistedState> {
    let raw = match storage?.get_item(PERSIST_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            Logger::warn_with_component(COMPONENT, &format!("Failed to read persisted state: {:?}", e));
            return None;
        }
    };

    match PersistedState::from_json(&raw) {
        Ok(state) => Some(state),
        Err(e) => {
            Logger::warn_with_component(COMPONENT, &format!("Discarding persisted state: {}", e));
            None
        }
    }
}

pub fn save(state: &PersistedState) {
    if let Some(storage) = local_storage() {
        write_snapshot(&storage, state);
    }
}

fn write_snapshot(storage: &Storage, state: &PersistedState) {
    let raw = match state.to_json() {
        Ok(raw) => raw,
        Err(e) => {
            Logger::error_with_component(COMPONENT, &e.to_string());
            return;
        }
    };

    if let Err(e) = storage.set_item(PERSIST_KEY, &raw) {
        Logger::warn_with_component(COMPONENT, &format!("Failed to persist state: {:?}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Action, Language, RootState};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_storage_means_no_snapshot() {
        assert_eq!(read_snapshot(None), None);
    }

    #[wasm_bindgen_test]
    fn test_snapshot_roundtrip() {
        let storage = local_storage().expect("test browser has localStorage");
        let state = RootState::default().apply(Action::SetLanguage(Language::Uk));

        write_snapshot(&storage, &state.persisted());

        assert_eq!(read_snapshot(Some(&storage)), Some(state.persisted()));
        storage.remove_item(PERSIST_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_malformed_snapshot_is_discarded() {
        let storage = local_storage().expect("test browser has localStorage");
        storage.set_item(PERSIST_KEY, "{not json").unwrap();

        assert_eq!(read_snapshot(Some(&storage)), None);
        assert_eq!(load(), None);
        storage.remove_item(PERSIST_KEY).unwrap();
    }
}
