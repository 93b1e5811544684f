// ============================================================================
// CONFIG - Configuración de la aplicación (tiempo de compilación)
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    API_BASE_PATH, LOGIN_ROUTE, STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_USER,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefijo de la API REST versionada (`/api/v1` por defecto)
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Ruta a la que se fuerza la navegación cuando la API responde 401
    pub login_route: String,
    pub token_storage_key: String,
    pub user_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_PATH.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            login_route: LOGIN_ROUTE.to_string(),
            token_storage_key: STORAGE_KEY_AUTH_TOKEN.to_string(),
            user_storage_key: STORAGE_KEY_USER.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: parse_flag(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            login_route: option_env!("LOGIN_ROUTE")
                .map(str::to_string)
                .unwrap_or(defaults.login_route),
            token_storage_key: defaults.token_storage_key,
            user_storage_key: defaults.user_storage_key,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// URL completa para un path relativo de la API (`/planets/` → `/api/v1/planets/`)
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
