//! Persisted entities and their table mapping.
//!
//! Each entity is a flat record with a storage-generated id and a handful of
//! string columns. There are no relationships between them.

mod advertisement;
mod insurance;
mod schema;
mod user;

pub use advertisement::*;
pub use insurance::*;
pub use schema::*;
pub use user::*;
