//! Shared handles to repository implementations.

use std::sync::Arc;
use tessera_core::{Advertisement, Insurance, Repository, User};

/// A repository shared between request handlers.
pub type SharedRepository<E> = Arc<dyn Repository<E>>;

/// Shared user repository.
pub type UserRepository = SharedRepository<User>;

/// Shared insurance repository.
pub type InsuranceRepository = SharedRepository<Insurance>;

/// Shared advertisement repository.
pub type AdvertisementRepository = SharedRepository<Advertisement>;
