//! Client-side persistence of the session token and the remembered email.
//!
//! Values are written as raw strings so other scripts on the page read the
//! same `token` the shop has always stored.

use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

use crate::errors::StorageError;

/// Key holding the session token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the username pre-filled on the sign-in form.
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| operation_error(key, &err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| operation_error(key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::delete(key);
        Ok(())
    }
}

fn operation_error(key: &str, err: &JsValue) -> StorageError {
    StorageError::Operation {
        key: key.to_string(),
        reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

/// Typed access to the auth-related storage keys.
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The persisted session token. Read failures are logged and treated as
    /// "no token".
    pub fn token(&self) -> Option<String> {
        self.read_non_empty(TOKEN_KEY)
    }

    pub fn store_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)
    }

    pub fn clear_token(&self) {
        if let Err(err) = self.storage.remove(TOKEN_KEY) {
            log::warn!("failed to clear session token: {err}");
        }
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.read_non_empty(REMEMBERED_EMAIL_KEY)
    }

    /// Stores `username` for the next visit when `remember` is set, forgets
    /// any stored value otherwise.
    pub fn update_remembered_email(&self, remember: bool, username: &str) -> Result<(), StorageError> {
        if remember {
            self.storage.set(REMEMBERED_EMAIL_KEY, username)
        } else {
            self.storage.remove(REMEMBERED_EMAIL_KEY)
        }
    }

    fn read_non_empty(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|value| !value.is_empty()),
            Err(err) => {
                log::warn!("failed to read `{key}` from storage: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;
