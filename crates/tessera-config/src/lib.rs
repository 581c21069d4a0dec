//! # Tessera Config
//!
//! Configuration management for Tessera.
//! Supports layered configuration from files and environment variables,
//! validated once at load time, with runtime refresh.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
