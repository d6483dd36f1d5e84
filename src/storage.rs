use fx_core::{KvStore, StoreError};
use web_sys as web;

/// `window.localStorage`, or nothing when the browser denies access.
#[derive(Clone)]
pub struct LocalStorage {
    storage: Option<web::Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &web::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[storage] localStorage unavailable; page state will not persist");
        }
        Self { storage }
    }
}

impl KvStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected {
                key: key.to_owned(),
                reason: format!("{:?}", e),
            })
    }
}
