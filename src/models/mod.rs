pub mod auth;

pub use auth::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest, TokenData};
