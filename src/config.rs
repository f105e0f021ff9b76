use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_BACKEND_URL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(option_env!("BACKEND_URL"), option_env!("ENABLE_LOGGING"))
    }

    fn from_values(backend_url: Option<&str>, enable_logging: Option<&str>) -> Self {
        let backend_url = backend_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL);

        Self {
            backend_url: normalize_base_url(backend_url),
            enable_logging: enable_logging
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.is_logging_enabled() {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// Configuración leída una sola vez al arrancar; main.rs la pasa como props
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
