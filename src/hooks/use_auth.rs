use yew::prelude::*;

use crate::services::{HistoryNavigator, HttpAuthApi, Route};
use crate::utils::LocalTokenStore;
use crate::viewmodels::{AuthAction, AuthScreenState, AuthViewModel, Field};

pub struct UseAuthScreenHandle {
    pub state: UseReducerHandle<AuthScreenState>,
    pub edit: Callback<(Field, String)>,
    pub submit: Callback<()>,
    pub toggle_mode: Callback<()>,
    pub dismiss: Callback<()>,
}

/// Screen state plus the callbacks the view binds to.
///
/// Each submit spawns one request; nothing prevents a second tap while the
/// first is still in flight.
#[hook]
pub fn use_auth_screen(on_navigate: Callback<Route>) -> UseAuthScreenHandle {
    let state = use_reducer(AuthScreenState::default);

    let edit = {
        let state = state.clone();
        Callback::from(move |(field, value): (Field, String)| {
            state.dispatch(AuthAction::Edit(field, value));
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_| {
            let mode = state.mode;
            let draft = state.draft.clone();
            let state = state.clone();
            let on_navigate = on_navigate.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpAuthApi::new();
                let store = LocalTokenStore;
                let navigator = HistoryNavigator::new(on_navigate);
                let vm = AuthViewModel::new(&api, &store, &navigator);

                if let Some(action) = vm.submit(mode, &draft).await {
                    state.dispatch(action);
                }
            });
        })
    };

    let toggle_mode = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(AuthAction::ToggleMode))
    };

    let dismiss = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(AuthAction::Dismiss))
    };

    UseAuthScreenHandle {
        state,
        edit,
        submit,
        toggle_mode,
        dismiss,
    }
}
