//! # Roster REST
//!
//! REST API layer using Axum for the Roster user service.
//! Provides the `/users` endpoint, health probes and OpenAPI documentation.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
