use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Champion, NewUser, PreferenceSet, User};

use super::Store;

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_champions(&self) -> AppResult<Vec<Champion>> {
        let champions = sqlx::query_as::<_, Champion>(
            "SELECT id, name, class, style, difficulty, damage_type, damage, \
             sturdiness, crowd_control, mobility, functionality \
             FROM champions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(champions)
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, email, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, username, email, password_hash, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Email already in use".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at, updated_at \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at, updated_at \
             FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn load_preferences(&self, user_id: Uuid) -> AppResult<Option<PreferenceSet>> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Ok(None);
        }

        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT champion_id FROM user_preferences WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(ids.into_iter().collect()))
    }

    async fn load_other_preferences(
        &self,
        exclude: Uuid,
    ) -> AppResult<Vec<(Uuid, PreferenceSet)>> {
        let rows = sqlx::query_as::<_, (Uuid, i32)>(
            "SELECT user_id, champion_id FROM user_preferences WHERE user_id <> $1",
        )
        .bind(exclude)
        .fetch_all(&self.pool)
        .await?;

        // BTreeMap keeps the population ordered by user id regardless of row
        // order, which keeps downstream ranking reproducible.
        let mut by_user: BTreeMap<Uuid, PreferenceSet> = BTreeMap::new();
        for (user_id, champion_id) in rows {
            by_user.entry(user_id).or_default().insert(champion_id);
        }

        Ok(by_user.into_iter().collect())
    }

    async fn save_preferences(
        &self,
        user_id: Uuid,
        preferences: &PreferenceSet,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_preferences WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for &champion_id in preferences {
            sqlx::query("INSERT INTO user_preferences (user_id, champion_id) VALUES ($1, $2)")
                .bind(user_id)
                .bind(champion_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
