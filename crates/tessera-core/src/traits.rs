//! Core traits shared by the storage and HTTP layers.

use crate::{Column, TesseraResult};
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A record mapped one-to-one onto a table row.
///
/// `Draft` is the id-less form submitted for insertion; the storage layer
/// assigns the identifier and hands back the full entity.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// Typed identifier generated by the storage layer.
    type Id: Copy + Eq + Ord + Hash + Display + Debug + From<i32> + Into<i32> + Send + Sync + 'static;

    /// Insertable form without an identifier.
    type Draft: Clone + Debug + Send + Sync + 'static;

    /// Human-readable resource name used in errors and logs.
    const NAME: &'static str;

    /// Backing table.
    const TABLE: &'static str;

    /// Text columns in declaration order, with their widths.
    const COLUMNS: &'static [Column];

    /// Returns the entity's identifier.
    fn id(&self) -> Self::Id;

    /// Builds the persisted entity from a draft and a generated id.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Returns the entity's fields without the identifier.
    fn to_draft(&self) -> Self::Draft;

    /// Returns the draft's values in the same order as [`Entity::COLUMNS`].
    fn column_values(draft: &Self::Draft) -> Vec<&str>;
}

/// Generic repository over one entity type.
///
/// No custom queries: create, read-all, read-by-id, update and delete, plus
/// the two derived lookups every implementation can answer cheaply.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Inserts a draft and returns the stored entity with its generated id.
    async fn save(&self, draft: &E::Draft) -> TesseraResult<E>;

    /// Returns every stored entity, ordered by id.
    async fn find_all(&self) -> TesseraResult<Vec<E>>;

    /// Finds an entity by its id.
    async fn find_by_id(&self, id: E::Id) -> TesseraResult<Option<E>>;

    /// Overwrites the fields of an existing entity.
    ///
    /// Fails with `NotFound` when no row carries the entity's id.
    async fn update(&self, entity: &E) -> TesseraResult<E>;

    /// Deletes an entity by id. Returns whether a row was removed.
    async fn delete(&self, id: E::Id) -> TesseraResult<bool>;

    /// Checks if an entity exists by its id.
    async fn exists(&self, id: E::Id) -> TesseraResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Counts all entities.
    async fn count(&self) -> TesseraResult<u64>;
}

/// Trait for health checks.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}
