//! MySQL insurance repository implementation.

use super::{inserted_id, row_count};
use crate::DatabasePool;
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use tessera_core::{Insurance, InsuranceId, NewInsurance, Repository, TesseraError, TesseraResult};
use tracing::debug;

/// MySQL insurance repository backed by `INSURANCE_TEST`.
#[derive(Clone)]
pub struct MySqlInsuranceRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlInsuranceRepository {
    /// Creates a new MySQL insurance repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InsuranceRow {
    id: i32,
    kind: String,
    name: String,
}

impl From<InsuranceRow> for Insurance {
    fn from(row: InsuranceRow) -> Self {
        Self {
            id: InsuranceId::new(row.id),
            kind: row.kind,
            name: row.name,
        }
    }
}

#[async_trait]
impl Repository<Insurance> for MySqlInsuranceRepository {
    async fn save(&self, draft: &NewInsurance) -> TesseraResult<Insurance> {
        debug!("Saving new insurance: {} ({})", draft.name, draft.kind);

        let result = sqlx::query("INSERT INTO INSURANCE_TEST (TYPE, NAME) VALUES (?, ?)")
            .bind(&draft.kind)
            .bind(&draft.name)
            .execute(self.pool.inner())
            .await?;

        let id = InsuranceId::new(inserted_id(result.last_insert_id())?);
        self.find_by_id(id)
            .await?
            .ok_or_else(|| TesseraError::Internal("Failed to fetch inserted insurance".to_string()))
    }

    async fn find_all(&self) -> TesseraResult<Vec<Insurance>> {
        debug!("Finding all insurances");

        let rows = sqlx::query_as::<_, InsuranceRow>(
            "SELECT ID AS id, TYPE AS kind, NAME AS name FROM INSURANCE_TEST ORDER BY ID",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Insurance::from).collect())
    }

    async fn find_by_id(&self, id: InsuranceId) -> TesseraResult<Option<Insurance>> {
        debug!("Finding insurance by id: {}", id);

        let row = sqlx::query_as::<_, InsuranceRow>(
            "SELECT ID AS id, TYPE AS kind, NAME AS name FROM INSURANCE_TEST WHERE ID = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Insurance::from))
    }

    async fn update(&self, insurance: &Insurance) -> TesseraResult<Insurance> {
        debug!("Updating insurance: {}", insurance.id);

        sqlx::query("UPDATE INSURANCE_TEST SET TYPE = ?, NAME = ? WHERE ID = ?")
            .bind(&insurance.kind)
            .bind(&insurance.name)
            .bind(insurance.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        self.find_by_id(insurance.id)
            .await?
            .ok_or_else(|| TesseraError::not_found("Insurance", insurance.id))
    }

    async fn delete(&self, id: InsuranceId) -> TesseraResult<bool> {
        debug!("Deleting insurance: {}", id);

        let result = sqlx::query("DELETE FROM INSURANCE_TEST WHERE ID = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> TesseraResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM INSURANCE_TEST")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(row_count(count))
    }
}

impl std::fmt::Debug for MySqlInsuranceRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlInsuranceRepository").finish_non_exhaustive()
    }
}
