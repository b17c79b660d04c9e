use serde::{Deserialize, Serialize};

/// Email + password enviados al endpoint de auth
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Datos del formulario de registro. Todo lo que no sea email/password
/// se copia tal cual al perfil del usuario creado.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SignUpData {
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl SignUpData {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(rename = "returnSecureToken")]
    pub return_secure_token: bool,
}

/// Respuesta de login/registro
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub id_token: String,
    pub refresh_token: String,
    /// Segundos de validez (el backend lo manda como string)
    pub expires_in: String,
    pub local_id: String,
}

/// Tope para que `segundos * 1000` quepa en un i64
const MAX_EXPIRES_IN_SECONDS: i64 = i64::MAX / 1000;

impl AuthTokens {
    pub fn expires_in_seconds(&self) -> i64 {
        self.expires_in
            .parse::<i64>()
            .unwrap_or(3600)
            .clamp(0, MAX_EXPIRES_IN_SECONDS)
    }
}

#[derive(Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub grant_type: &'a str,
    pub refresh_token: &'a str,
}

/// Respuesta del endpoint de refresh (snake_case, a diferencia del login)
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RefreshResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub user_id: String,
}

impl From<RefreshResponse> for AuthTokens {
    fn from(r: RefreshResponse) -> Self {
        Self {
            id_token: r.id_token,
            refresh_token: r.refresh_token,
            expires_in: r.expires_in,
            local_id: r.user_id,
        }
    }
}

/// `{ "error": { "code": 400, "message": "EMAIL_EXISTS" } }`
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthErrorBody {
    pub error: AuthErrorDetail,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthErrorDetail {
    pub code: u16,
    pub message: String,
}

/// Identidad autenticada guardada en el slice de usuarios
#[derive(Clone, PartialEq, Debug)]
pub struct AuthInfo {
    pub user_id: String,
}
