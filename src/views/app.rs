// ============================================================================
// APP VIEW - COMPONENTE PRINCIPAL
// ============================================================================
// Decide qué pantalla mostrar según la ruta actual
// ============================================================================

use yew::prelude::*;

use crate::services::Route;
use crate::views::auth::AuthScreen;
use crate::views::tabs::TabsView;

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(Route::default);

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| route.set(next))
    };

    match *route {
        Route::Auth => html! { <AuthScreen {on_navigate} /> },
        Route::Tabs => html! { <TabsView /> },
    }
}
