//! Custom Axum extractors.

mod params;

pub use params::*;
