//! Browser `localStorage` token storage

use pg_manager_http::{StorageError, TokenStorage};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Token storage over the page's `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }
}

fn js_error(error: JsValue) -> StorageError {
    StorageError::Access(
        error
            .as_string()
            .unwrap_or_else(|| format!("{error:?}")),
    )
}

impl TokenStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_is_stored_raw() {
        let storage = BrowserStorage::new();
        storage.set_token("abc").unwrap();

        let raw = web_sys::window()
            .unwrap()
            .local_storage()
            .unwrap()
            .unwrap()
            .get_item("token")
            .unwrap();
        assert_eq!(raw.as_deref(), Some("abc"));

        storage.clear_token().unwrap();
        assert_eq!(storage.token().unwrap(), None);
    }
}
