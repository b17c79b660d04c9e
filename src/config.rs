use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub auth_url: String,
    pub refresh_url: String,
    pub api_key: String,
    pub enable_logging: bool,
    /// Minutos que profesiones/cualidades se consideran frescas
    pub catalog_ttl_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:8080/api/v1".to_string(),
            backend_url_production: "https://roster.example.com/api/v1".to_string(),
            environment: "development".to_string(),
            auth_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
            refresh_url: "https://securetoken.googleapis.com/v1".to_string(),
            api_key: String::new(),
            enable_logging: true,
            catalog_ttl_minutes: 10,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(|s| s.to_string())
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.environment),
            auth_url: option_env!("AUTH_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.auth_url),
            refresh_url: option_env!("REFRESH_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.refresh_url),
            api_key: option_env!("API_KEY").unwrap_or("").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            catalog_ttl_minutes: option_env!("CATALOG_TTL_MINUTES")
                .unwrap_or("10").parse().unwrap_or(defaults.catalog_ttl_minutes),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:8080/api/v1");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://roster.example.com/api/v1");
    }
}
