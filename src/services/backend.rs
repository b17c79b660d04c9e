use async_trait::async_trait;
use crate::models::{AuthTokens, Credentials, Profession, Quality, UserRecord};
use crate::services::api_error::ApiError;

/// Todo lo que la app le pide al backend. `ApiClient` es la implementación
/// HTTP; los tests usan un backend en memoria.
#[async_trait(?Send)]
pub trait Backend {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthTokens, ApiError>;
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthTokens, ApiError>;

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError>;
    async fn create_user(&self, user: &UserRecord) -> Result<UserRecord, ApiError>;
    async fn update_user(&self, user: &UserRecord) -> Result<UserRecord, ApiError>;

    async fn fetch_professions(&self) -> Result<Vec<Profession>, ApiError>;
    async fn fetch_qualities(&self) -> Result<Vec<Quality>, ApiError>;
}
