use pressdesk_shared::{config::TOKEN_STORAGE_KEY, StorageError, TokenStore};
use web_sys::Storage;

/// Bearer token in `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| StorageError("localStorage unavailable".to_string()))
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()
            .ok()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }
}
