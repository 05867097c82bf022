// ============================================================================
// AUTH VIEWMODEL - ESTADO Y LÓGICA DE LA PANTALLA DE AUTENTICACIÓN
// ============================================================================
// Estado puro + acciones (Reducible) y los dos flujos de envío.
// Los efectos (HTTP, storage, navegación) llegan como traits.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{LoginRequest, RegisterRequest};
use crate::services::{user_message, AuthApi, AuthError, Navigator, Route};
use crate::utils::{TokenStore, REGISTRATION_SUCCESS_MESSAGE};

/// Whether the form logs in or registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    /// The email field exists only while registering.
    pub fn shows_email(self) -> bool {
        matches!(self, AuthMode::Register)
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Register => "Create an Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Log in to continue",
            AuthMode::Register => "Join us and get started",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? Register",
            AuthMode::Register => "Already have an account? Login",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Email,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct CredentialsDraft {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl CredentialsDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            Field::Email => self.email = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Notification {
    pub visible: bool,
    pub message: String,
    pub is_success: bool,
}

impl Notification {
    pub fn title(&self) -> &'static str {
        if self.is_success {
            "Success"
        } else {
            "Error"
        }
    }

    fn show(&mut self, message: String, is_success: bool) {
        self.message = message;
        self.is_success = is_success;
        self.visible = true;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    Edit(Field, String),
    ToggleMode,
    Dismiss,
    LoginFailed(String),
    RegisterSucceeded,
    RegisterFailed(String),
}

/// Everything the screen holds while mounted.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthScreenState {
    pub mode: AuthMode,
    pub draft: CredentialsDraft,
    pub notification: Notification,
}

impl AuthScreenState {
    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::Edit(field, value) => self.draft.set(field, value),
            AuthAction::ToggleMode => {
                self.mode = self.mode.toggled();
                self.notification = Notification::default();
            }
            AuthAction::Dismiss => {
                self.notification.visible = false;
                if self.notification.is_success && self.mode == AuthMode::Register {
                    self.mode = AuthMode::Login;
                }
            }
            AuthAction::LoginFailed(message) | AuthAction::RegisterFailed(message) => {
                self.notification.show(message, false);
            }
            AuthAction::RegisterSucceeded => {
                self.notification
                    .show(REGISTRATION_SUCCESS_MESSAGE.to_string(), true);
            }
        }
    }
}

impl Reducible for AuthScreenState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Submit flows. SOLO lógica, devuelve la acción a aplicar al estado.
pub struct AuthViewModel<'a, A, S, N> {
    api: &'a A,
    store: &'a S,
    navigator: &'a N,
}

impl<'a, A: AuthApi, S: TokenStore, N: Navigator> AuthViewModel<'a, A, S, N> {
    pub fn new(api: &'a A, store: &'a S, navigator: &'a N) -> Self {
        Self { api, store, navigator }
    }

    /// On success the token is stored and the tabs replace this screen, so
    /// there is nothing to show: `None`. Otherwise the failure to display.
    pub async fn submit_login(&self, username: &str, password: &str) -> Option<AuthAction> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        match self.login_and_store(&request).await {
            Ok(()) => {
                log::info!("✅ Login exitoso: {}", request.username);
                self.navigator.replace(Route::Tabs);
                None
            }
            Err(e) => {
                log::error!("❌ Error en login: {}", e);
                Some(AuthAction::LoginFailed(user_message(&e)))
            }
        }
    }

    async fn login_and_store(&self, request: &LoginRequest) -> Result<(), AuthError> {
        let data = self.api.login(request).await?;
        self.store
            .save_token(&data.token)
            .map_err(AuthError::unexpected)?;
        log::info!("💾 Token guardado");
        Ok(())
    }

    pub async fn submit_register(&self, username: &str, password: &str, email: &str) -> AuthAction {
        let request = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        };

        match self.api.register(&request).await {
            Ok(()) => {
                log::info!("✅ Registro exitoso: {}", request.username);
                AuthAction::RegisterSucceeded
            }
            Err(e) => {
                log::error!("❌ Error en registro: {}", e);
                AuthAction::RegisterFailed(user_message(&e))
            }
        }
    }

    /// Dispatches on the current mode. The email is only sent when registering.
    pub async fn submit(&self, mode: AuthMode, draft: &CredentialsDraft) -> Option<AuthAction> {
        match mode {
            AuthMode::Login => self.submit_login(&draft.username, &draft.password).await,
            AuthMode::Register => Some(
                self.submit_register(&draft.username, &draft.password, &draft.email)
                    .await,
            ),
        }
    }
}
