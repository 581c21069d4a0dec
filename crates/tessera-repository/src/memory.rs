//! In-memory repository.
//!
//! Behaves like the MySQL implementations: ids come from an
//! auto-increment counter that never reuses values, and values wider than
//! the declared column are rejected the way strict SQL mode rejects them.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tessera_core::{first_overflow, Entity, Repository, TesseraError, TesseraResult};
use tracing::debug;

struct Table<E: Entity> {
    rows: BTreeMap<E::Id, E>,
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<i32>,
}

/// A [`Repository`] keeping rows in a map.
pub struct InMemoryRepository<E: Entity> {
    table: RwLock<Table<E>>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    fn check_widths(draft: &E::Draft) -> TesseraResult<()> {
        match first_overflow(E::COLUMNS, &E::column_values(draft)) {
            Some(column) => Err(TesseraError::Database(format!(
                "Data too long for column '{}' in table '{}' (max {} characters)",
                column.name,
                E::TABLE,
                column.max_len
            ))),
            None => Ok(()),
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn save(&self, draft: &E::Draft) -> TesseraResult<E> {
        Self::check_widths(draft)?;

        let mut table = self.table.write();
        let Some(next_id) = table.next_id else {
            return Err(TesseraError::Internal(format!(
                "Auto-increment ids exhausted in {}",
                E::TABLE
            )));
        };
        let id = E::Id::from(next_id);
        table.next_id = next_id.checked_add(1);

        let entity = E::from_draft(id, draft.clone());
        table.rows.insert(id, entity.clone());
        debug!("Saved {} {} in {}", E::NAME, id, E::TABLE);
        Ok(entity)
    }

    async fn find_all(&self) -> TesseraResult<Vec<E>> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: E::Id) -> TesseraResult<Option<E>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn update(&self, entity: &E) -> TesseraResult<E> {
        Self::check_widths(&entity.to_draft())?;

        let mut table = self.table.write();
        match table.rows.get_mut(&entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(TesseraError::not_found(E::NAME, entity.id())),
        }
    }

    async fn delete(&self, id: E::Id) -> TesseraResult<bool> {
        Ok(self.table.write().rows.remove(&id).is_some())
    }

    async fn exists(&self, id: E::Id) -> TesseraResult<bool> {
        Ok(self.table.read().rows.contains_key(&id))
    }

    async fn count(&self) -> TesseraResult<u64> {
        Ok(self.table.read().rows.len() as u64)
    }
}

impl<E: Entity> std::fmt::Debug for InMemoryRepository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRepository")
            .field("table", &E::TABLE)
            .field("rows", &self.table.read().rows.len())
            .finish()
    }
}
