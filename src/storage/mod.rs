pub(crate) const THEME_KEY: &str = "theme";

/// Key written by the older theme script; read only as a fallback.
pub(crate) const LEGACY_THEME_KEY: &str = "selectedTheme";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_string_from_storage(key: &str) -> Option<String> {
    let storage = local_storage()?;
    storage
        .get_item(key)
        .ok()
        .flatten()
        .filter(|v| !v.trim().is_empty())
}

pub(crate) fn save_string_to_storage(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write of `{key}` failed");
        }
    }
}

pub(crate) fn remove_from_storage(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// First non-empty value among `keys`, in order.
pub(crate) fn load_first_from_storage(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| load_string_from_storage(k))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_string_storage_roundtrip() {
        remove_from_storage("draftsmith_test_key");
        assert!(load_string_from_storage("draftsmith_test_key").is_none());

        save_string_to_storage("draftsmith_test_key", "v1");
        assert_eq!(load_string_from_storage("draftsmith_test_key").as_deref(), Some("v1"));

        remove_from_storage("draftsmith_test_key");
        assert!(load_string_from_storage("draftsmith_test_key").is_none());
    }

    #[wasm_bindgen_test]
    fn test_load_first_prefers_earlier_keys() {
        save_string_to_storage("draftsmith_a", "a");
        save_string_to_storage("draftsmith_b", "b");
        assert_eq!(
            load_first_from_storage(&["draftsmith_a", "draftsmith_b"]).as_deref(),
            Some("a")
        );

        remove_from_storage("draftsmith_a");
        assert_eq!(
            load_first_from_storage(&["draftsmith_a", "draftsmith_b"]).as_deref(),
            Some("b")
        );
        remove_from_storage("draftsmith_b");
    }
}
