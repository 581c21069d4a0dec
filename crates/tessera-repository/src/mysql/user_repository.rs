//! MySQL user repository implementation.

use super::{inserted_id, row_count};
use crate::DatabasePool;
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use tessera_core::{NewUser, Repository, TesseraError, TesseraResult, User, UserId};
use tracing::debug;

/// MySQL user repository backed by `USER_TEST`.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
        }
    }
}

#[async_trait]
impl Repository<User> for MySqlUserRepository {
    async fn save(&self, draft: &NewUser) -> TesseraResult<User> {
        debug!("Saving new user: {}", draft.name);

        // MySQL doesn't support RETURNING, so insert then select
        let result = sqlx::query("INSERT INTO USER_TEST (NAME, EMAIL) VALUES (?, ?)")
            .bind(&draft.name)
            .bind(&draft.email)
            .execute(self.pool.inner())
            .await?;

        let id = UserId::new(inserted_id(result.last_insert_id())?);
        self.find_by_id(id)
            .await?
            .ok_or_else(|| TesseraError::Internal("Failed to fetch inserted user".to_string()))
    }

    async fn find_all(&self) -> TesseraResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT ID AS id, NAME AS name, EMAIL AS email FROM USER_TEST ORDER BY ID",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> TesseraResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT ID AS id, NAME AS name, EMAIL AS email FROM USER_TEST WHERE ID = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn update(&self, user: &User) -> TesseraResult<User> {
        debug!("Updating user: {}", user.id);

        // rows_affected is 0 for unchanged rows, so re-read to detect absence
        sqlx::query("UPDATE USER_TEST SET NAME = ?, EMAIL = ? WHERE ID = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| TesseraError::not_found("User", user.id))
    }

    async fn delete(&self, id: UserId) -> TesseraResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM USER_TEST WHERE ID = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> TesseraResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM USER_TEST")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(row_count(count))
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}
