// ============================================================================
// API ERROR - Errores de red/HTTP/auth
// ============================================================================

use crate::services::auth_errors::generate_auth_error;

/// Código que el backend de auth usa para errores de credenciales
pub const AUTH_BAD_REQUEST: u16 = 400;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// Error estructurado del endpoint de auth
    #[error("Request failed with status code {code}: {message}")]
    Auth { code: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Mensaje para el usuario tras un login fallido: los errores 400 del
    /// backend pasan por la tabla de traducción, el resto va tal cual.
    pub fn auth_message(&self) -> String {
        match self {
            ApiError::Auth { code, message } if *code == AUTH_BAD_REQUEST => {
                generate_auth_error(message)
            }
            other => other.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_is_translated() {
        let err = ApiError::Auth {
            code: 400,
            message: "EMAIL_EXISTS".to_string(),
        };
        assert_eq!(err.auth_message(), "A user with this email already exists");
    }

    #[test]
    fn other_failures_keep_raw_message() {
        let err = ApiError::Auth {
            code: 503,
            message: "UNAVAILABLE".to_string(),
        };
        assert_eq!(err.auth_message(), "Request failed with status code 503: UNAVAILABLE");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.auth_message(), "Network error: connection refused");
    }
}
