use web_sys::Storage;

use crate::error::{FxError, FxResult};
use crate::locale::PreferenceStore;

/// `window.localStorage`, when the browser lets us have it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; locale will not persist");
        }
        Self { storage }
    }

    fn get(&self) -> FxResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| FxError::Storage("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> FxResult<Option<String>> {
        self.get()?
            .get_item(key)
            .map_err(|err| FxError::Storage(format!("{:?}", err)))
    }

    fn save(&mut self, key: &str, value: &str) -> FxResult<()> {
        self.get()?
            .set_item(key, value)
            .map_err(|err| FxError::Storage(format!("{:?}", err)))
    }
}
