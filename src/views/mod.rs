pub mod app;
pub mod auth;
pub mod tabs;

pub use app::App;
