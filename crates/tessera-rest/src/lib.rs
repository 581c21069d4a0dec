//! # Tessera REST
//!
//! REST API layer using Axum for Tessera.
//! Provides the `/demo` and `/insurance` endpoints, health checks and the
//! generated OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod listing;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
