//! # Tessera Core
//!
//! Core types, entities, traits, and error definitions for Tessera.
//! Every other crate in the workspace builds on the abstractions defined here:
//! the unified [`TesseraError`], the typed entity identifiers, the three
//! persisted entities and the generic [`Repository`] trait.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
