//! Service implementations.

mod static_user_service;

pub use static_user_service::*;
