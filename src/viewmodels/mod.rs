pub mod auth_viewmodel;

pub use auth_viewmodel::{AuthAction, AuthScreenState, AuthViewModel, Field, Notification};
