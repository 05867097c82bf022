use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Durable key-value storage for the session token.
pub trait TokenStore {
    fn save_token(&self, token: &str) -> Result<(), String>;
}

/// `localStorage` backed store. The token is written as the raw string
/// (no JSON quoting) under [`STORAGE_KEY_TOKEN`](super::STORAGE_KEY_TOKEN).
#[derive(Clone, Copy, Default, PartialEq)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn save_token(&self, token: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(super::STORAGE_KEY_TOKEN, token)
            .map_err(|_| "Error guardando en localStorage".to_string())?;
        Ok(())
    }
}
