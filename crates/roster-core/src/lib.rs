//! # Roster Core
//!
//! Core types and error definitions shared by every Roster crate:
//! the `User` entity, its typed identifier, and the unified error type.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
