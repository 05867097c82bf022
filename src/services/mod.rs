pub mod auth_service;
pub mod navigation_service;

pub use auth_service::*;
pub use navigation_service::*;
