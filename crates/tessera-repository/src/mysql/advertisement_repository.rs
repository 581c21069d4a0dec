//! MySQL advertisement repository implementation.
//!
//! Not reachable over HTTP; the server builds it so the table stays covered
//! by the same contract as the others.

use super::{inserted_id, row_count};
use crate::DatabasePool;
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use tessera_core::{
    Advertisement, AdvertisementId, NewAdvertisement, Repository, TesseraError, TesseraResult,
};
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT ID AS id, NAME AS name, TYPE AS kind, PRICE AS price_model \
                              FROM ADVERTISEMENT";

/// MySQL advertisement repository backed by `ADVERTISEMENT`.
#[derive(Clone)]
pub struct MySqlAdvertisementRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlAdvertisementRepository {
    /// Creates a new MySQL advertisement repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdvertisementRow {
    id: i32,
    name: String,
    kind: String,
    price_model: String,
}

impl From<AdvertisementRow> for Advertisement {
    fn from(row: AdvertisementRow) -> Self {
        Self {
            id: AdvertisementId::new(row.id),
            name: row.name,
            kind: row.kind,
            price_model: row.price_model,
        }
    }
}

#[async_trait]
impl Repository<Advertisement> for MySqlAdvertisementRepository {
    async fn save(&self, draft: &NewAdvertisement) -> TesseraResult<Advertisement> {
        debug!("Saving new advertisement: {}", draft.name);

        let result = sqlx::query("INSERT INTO ADVERTISEMENT (NAME, TYPE, PRICE) VALUES (?, ?, ?)")
            .bind(&draft.name)
            .bind(&draft.kind)
            .bind(&draft.price_model)
            .execute(self.pool.inner())
            .await?;

        let id = AdvertisementId::new(inserted_id(result.last_insert_id())?);
        self.find_by_id(id).await?.ok_or_else(|| {
            TesseraError::Internal("Failed to fetch inserted advertisement".to_string())
        })
    }

    async fn find_all(&self) -> TesseraResult<Vec<Advertisement>> {
        debug!("Finding all advertisements");

        let rows = sqlx::query_as::<_, AdvertisementRow>(&format!("{SELECT_COLUMNS} ORDER BY ID"))
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Advertisement::from).collect())
    }

    async fn find_by_id(&self, id: AdvertisementId) -> TesseraResult<Option<Advertisement>> {
        debug!("Finding advertisement by id: {}", id);

        let row = sqlx::query_as::<_, AdvertisementRow>(&format!("{SELECT_COLUMNS} WHERE ID = ?"))
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Advertisement::from))
    }

    async fn update(&self, advertisement: &Advertisement) -> TesseraResult<Advertisement> {
        debug!("Updating advertisement: {}", advertisement.id);

        sqlx::query("UPDATE ADVERTISEMENT SET NAME = ?, TYPE = ?, PRICE = ? WHERE ID = ?")
            .bind(&advertisement.name)
            .bind(&advertisement.kind)
            .bind(&advertisement.price_model)
            .bind(advertisement.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        self.find_by_id(advertisement.id)
            .await?
            .ok_or_else(|| TesseraError::not_found("Advertisement", advertisement.id))
    }

    async fn delete(&self, id: AdvertisementId) -> TesseraResult<bool> {
        debug!("Deleting advertisement: {}", id);

        let result = sqlx::query("DELETE FROM ADVERTISEMENT WHERE ID = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> TesseraResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ADVERTISEMENT")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(row_count(count))
    }
}

impl std::fmt::Debug for MySqlAdvertisementRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAdvertisementRepository").finish_non_exhaustive()
    }
}
