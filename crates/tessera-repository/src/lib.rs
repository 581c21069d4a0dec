//! # Tessera Repository
//!
//! Data access for the three Tessera entities.
//!
//! ```text
//! Controller
//!   ↓  Arc<dyn Repository<E>>   (tessera-core interface)
//! MySql*Repository              (SQLx, one per entity)
//!   ↓  Arc<DatabasePool>
//! MySQL
//! ```
//!
//! With the `memory` feature, [`InMemoryRepository`] provides the same
//! contract without a database.

pub mod mysql;
pub mod pool;
pub mod traits;

#[cfg(feature = "memory")]
pub mod memory;

pub use mysql::*;
pub use pool::*;
pub use traits::*;

#[cfg(feature = "memory")]
pub use memory::InMemoryRepository;
