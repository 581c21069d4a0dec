//! # Tessera Server Library
//!
//! Process-level wiring for the Tessera server: builds every dependency
//! explicitly at startup and serves the REST router.

pub mod app;
pub mod startup;

pub use app::Application;
