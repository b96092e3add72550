//! # Roster Server Library
//!
//! Core library for the Roster server binary: dependency injection wiring,
//! logging setup, and the HTTP application lifecycle.

pub mod app;
pub mod di;
pub mod logging;
pub mod startup;
