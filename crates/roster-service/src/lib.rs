//! # Roster Service
//!
//! Service layer for the Roster user service.
//! Exposes the `UserService` interface and its static, in-memory implementation.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::*;
pub use user_service::*;
