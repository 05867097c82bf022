use wasm_bindgen::JsValue;
use web_sys::window;
use yew::Callback;

/// Top-level screens of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Auth,
    Tabs,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Auth => "/",
            Route::Tabs => crate::utils::TABS_ROUTE,
        }
    }
}

pub trait Navigator {
    /// Replace the current entry, so "back" cannot return to it.
    fn replace(&self, route: Route);
}

/// Rewrites the browser history entry and tells the root component.
#[derive(Clone, PartialEq)]
pub struct HistoryNavigator {
    on_route: Callback<Route>,
}

impl HistoryNavigator {
    pub fn new(on_route: Callback<Route>) -> Self {
        Self { on_route }
    }
}

impl Navigator for HistoryNavigator {
    fn replace(&self, route: Route) {
        match window().map(|w| w.history()) {
            Some(Ok(history)) => {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                    log::warn!("⚠️ No se pudo reemplazar el historial: {:?}", e);
                }
            }
            _ => log::warn!("⚠️ History API no disponible"),
        }
        log::info!("🧭 Navegando a {}", route.path());
        self.on_route.emit(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_starts_on_auth_route() {
        assert_eq!(Route::default(), Route::Auth);
        assert_eq!(Route::Auth.path(), "/");
        assert_eq!(Route::Tabs.path(), "/tabs");
    }
}
