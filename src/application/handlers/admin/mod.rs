//! Admin handlers.

mod admin_login;

pub use admin_login::{AdminLoginCommand, AdminLoginError, AdminLoginHandler};
