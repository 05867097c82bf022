use crate::config::CONFIG;

/// URL base del API de autenticación
/// - `API_URL` en tiempo de compilación tiene prioridad
/// - Si no, la URL del entorno configurado (ver `AppConfig::api_url`)
pub fn api_url() -> &'static str {
    match option_env!("API_URL") {
        Some(url) => url,
        None => CONFIG.api_url(),
    }
}

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

/// localStorage key holding the session token
pub const STORAGE_KEY_TOKEN: &str = "token";

/// Route of the authenticated tab area
pub const TABS_ROUTE: &str = "/tabs";

pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful!";
