// ============================================================================
// AUTH SCREEN - FRONTEND (Yew + WASM)
// ============================================================================
// - Views: componentes html! (sin lógica)
// - ViewModels: estado de pantalla + flujos de envío
// - Hooks: enlazan ViewModel con el estado de Yew
// - Services: HTTP y navegación
// - Models: cuerpos de request/response del API
// ============================================================================

mod config;
mod hooks;
mod models;
mod services;
mod utils;
mod viewmodels;
mod views;

use crate::config::CONFIG;
use crate::views::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Auth screen starting (API: {})", utils::api_url());

    yew::Renderer::<App>::new().render();
}
