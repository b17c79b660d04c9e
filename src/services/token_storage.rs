// ============================================================================
// TOKEN STORAGE - Tokens de auth persistidos en localStorage
// ============================================================================

use std::rc::Rc;
use gloo_storage::{LocalStorage, Storage};
use crate::models::AuthTokens;
use crate::services::api_error::ApiError;

const TOKEN_KEY: &str = "jwt-token";
const REFRESH_KEY: &str = "jwt-refresh-token";
const EXPIRES_KEY: &str = "jwt-expires";
const USERID_KEY: &str = "user-local-id";

/// Almacén clave/valor de strings (localStorage en el navegador)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&self, key: &str);
}

/// localStorage vía gloo-storage
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        LocalStorage::set(key, value).map_err(|e| ApiError::Storage(e.to_string()))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

#[derive(Clone)]
pub struct TokenStorage {
    store: Rc<dyn KeyValueStore>,
}

impl TokenStorage {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// Guarda los tokens; la expiración se guarda como epoch millis absoluto
    pub fn set_tokens(&self, tokens: &AuthTokens, now_millis: i64) -> Result<(), ApiError> {
        let expires_at = tokens
            .expires_in_seconds()
            .saturating_mul(1000)
            .saturating_add(now_millis);
        self.store.set(USERID_KEY, &tokens.local_id)?;
        self.store.set(TOKEN_KEY, &tokens.id_token)?;
        self.store.set(REFRESH_KEY, &tokens.refresh_token)?;
        self.store.set(EXPIRES_KEY, &expires_at.to_string())?;
        Ok(())
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(USERID_KEY)
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.store.get(EXPIRES_KEY)?.parse().ok()
    }

    /// Sin fecha de expiración guardada se considera expirado
    pub fn is_expired(&self, now_millis: i64) -> bool {
        self.expires_at().map_or(true, |expires| expires <= now_millis)
    }

    pub fn remove_auth_data(&self) {
        self.store.remove(USERID_KEY);
        self.store.remove(TOKEN_KEY);
        self.store.remove(REFRESH_KEY);
        self.store.remove(EXPIRES_KEY);
    }
}
