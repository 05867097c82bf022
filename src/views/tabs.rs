use yew::prelude::*;

/// Authenticated area. Its content lives outside this screen.
#[function_component(TabsView)]
pub fn tabs_view() -> Html {
    html! {
        <div class="tabs-screen">
            <p>{"You are logged in."}</p>
        </div>
    }
}
