use web_sys::Storage;

/// Key-value persistence for user preferences.
///
/// Writes are best-effort: a store that cannot persist simply forgets.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Preferences kept in the browser's `localStorage`.
pub struct LocalPreferenceStore {
    storage: Option<Storage>,
}

impl LocalPreferenceStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, theme preference will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::debug!("Failed to persist {}", key);
            }
        }
    }
}
