use gloo_storage::{LocalStorage, Storage};
use crate::errors::{ClientError, ClientResult};
use crate::platform::KeyValueStore;

/// `localStorage`, values stored as raw strings (no JSON wrapping)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| ClientError::Storage(format!("could not write {} to localStorage", key)))
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|_| ClientError::Storage(format!("could not remove {} from localStorage", key)))
    }
}
