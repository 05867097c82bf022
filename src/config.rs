#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:3000".to_string(),
            api_url_production: "https://api.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_development),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// API base URL for the current environment
    pub fn api_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
