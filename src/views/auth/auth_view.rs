use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::hooks::use_auth_screen;
use crate::services::Route;
use crate::viewmodels::Field;
use super::NotificationDialog;

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let handle = use_auth_screen(props.on_navigate.clone());
    let state = &*handle.state;
    let mode = state.mode;

    let on_input = |field: Field| {
        let edit = handle.edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit.emit((field, input.value()));
        })
    };

    let on_submit = {
        let submit = handle.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1 class="auth-title">{mode.title()}</h1>
                <p class="auth-subtitle">{mode.subtitle()}</p>

                <form class="auth-form" onsubmit={on_submit}>
                    <input
                        class="auth-input"
                        type="text"
                        name="username"
                        placeholder="Username"
                        autocapitalize="none"
                        value={state.draft.username.clone()}
                        oninput={on_input(Field::Username)}
                    />

                    if mode.shows_email() {
                        <input
                            class="auth-input"
                            type="email"
                            name="email"
                            placeholder="Email"
                            autocapitalize="none"
                            value={state.draft.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                    }

                    <input
                        class="auth-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        value={state.draft.password.clone()}
                        oninput={on_input(Field::Password)}
                    />

                    <button type="submit" class="btn-primary">
                        {mode.submit_label()}
                    </button>
                </form>

                <button
                    type="button"
                    class="btn-secondary"
                    onclick={handle.toggle_mode.reform(|_: MouseEvent| ())}
                >
                    {mode.toggle_label()}
                </button>
            </div>

            <NotificationDialog
                notification={state.notification.clone()}
                on_dismiss={handle.dismiss.clone()}
            />
        </div>
    }
}
