// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Sin lógica de negocio: requests, envelope `{ content }` y refresh de token
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use crate::config::CONFIG;
use crate::models::auth::{AuthErrorBody, AuthRequest, RefreshRequest, RefreshResponse};
use crate::models::{AuthTokens, Credentials, Profession, Quality, UserRecord};
use crate::services::api_error::ApiError;
use crate::services::backend::Backend;
use crate::services::token_storage::TokenStorage;

#[derive(serde::Deserialize)]
struct Envelope<T> {
    content: T,
}

/// Cliente API contra el backend de datos y el de auth
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    auth_url: String,
    refresh_url: String,
    api_key: String,
    tokens: TokenStorage,
}

impl ApiClient {
    pub fn new(tokens: TokenStorage) -> Self {
        Self {
            base_url: CONFIG.backend_url().trim_end_matches('/').to_string(),
            auth_url: CONFIG.auth_url.trim_end_matches('/').to_string(),
            refresh_url: CONFIG.refresh_url.trim_end_matches('/').to_string(),
            api_key: CONFIG.api_key.clone(),
            tokens,
        }
    }

    /// Token válido para la request; si expiró se refresca antes
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        let now = chrono::Utc::now().timestamp_millis();
        match (self.tokens.refresh_token(), self.tokens.is_expired(now)) {
            (Some(refresh_token), true) => {
                log::info!("🔄 Token expirado, refrescando...");
                let tokens = self.refresh_tokens(&refresh_token).await?;
                self.tokens.set_tokens(&tokens, now)?;
                Ok(Some(tokens.id_token))
            }
            _ => Ok(self.tokens.access_token()),
        }
    }

    async fn refresh_tokens(&self, refresh_token: &str) -> Result<AuthTokens, ApiError> {
        let url = format!("{}/token?key={}", self.refresh_url, self.api_key);
        let request = RefreshRequest {
            grant_type: "refresh_token",
            refresh_token,
        };
        let response = Request::post(&url).json(&request)?.send().await?;
        if !response.ok() {
            return Err(auth_failure(response).await);
        }
        let refreshed = response.json::<RefreshResponse>().await?;
        Ok(refreshed.into())
    }

    async fn authenticate(&self, endpoint: &str, credentials: &Credentials) -> Result<AuthTokens, ApiError> {
        let url = format!("{}/accounts:{}?key={}", self.auth_url, endpoint, self.api_key);
        let request = AuthRequest {
            email: &credentials.email,
            password: &credentials.password,
            return_secure_token: true,
        };

        log::info!("🔐 {} para usuario: {}", endpoint, credentials.email);

        let response = Request::post(&url).json(&request)?.send().await?;
        if !response.ok() {
            return Err(auth_failure(response).await);
        }
        Ok(response.json::<AuthTokens>().await?)
    }

    async fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(match self.access_token().await? {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthTokens, ApiError> {
        self.authenticate("signInWithPassword", credentials).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthTokens, ApiError> {
        self.authenticate("signUp", credentials).await
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let builder = self.authorized(Request::get(&self.url("users"))).await?;
        read_content(builder.send().await?).await
    }

    async fn create_user(&self, user: &UserRecord) -> Result<UserRecord, ApiError> {
        let builder = self.authorized(Request::post(&self.url("users"))).await?;
        read_content(builder.json(user)?.send().await?).await
    }

    async fn update_user(&self, user: &UserRecord) -> Result<UserRecord, ApiError> {
        let path = format!("users/{}", user.id);
        let builder = self.authorized(Request::patch(&self.url(&path))).await?;
        read_content(builder.json(user)?.send().await?).await
    }

    async fn fetch_professions(&self) -> Result<Vec<Profession>, ApiError> {
        read_content(Request::get(&self.url("professions")).send().await?).await
    }

    async fn fetch_qualities(&self) -> Result<Vec<Quality>, ApiError> {
        read_content(Request::get(&self.url("qualities")).send().await?).await
    }
}

async fn read_content<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await
            .unwrap_or_else(|_| response.status_text());
        return Err(ApiError::Http { status, message: error_text });
    }
    let envelope = response.json::<Envelope<T>>().await?;
    Ok(envelope.content)
}

/// Error del backend de auth: estructurado si el body lo permite
async fn auth_failure(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<AuthErrorBody>(&body) {
        Ok(parsed) => ApiError::Auth {
            code: parsed.error.code,
            message: parsed.error.message,
        },
        Err(_) => ApiError::Http {
            status,
            message: response.status_text(),
        },
    }
}
