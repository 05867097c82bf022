mod auth_view;
mod notification_dialog;

pub use auth_view::*;
pub use notification_dialog::*;
