//! SQLite-backed user record store.
//!
//! Only the `image` column is owned by this service. `email` and `name` are
//! mirrored from session claims so profile reads have something to show.

use crate::{DbError, Result as DbErrorResult, UserStore};

use dash_core::{Identity, StoredImagePath, UserProfile};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &SqliteRow) -> DbErrorResult<UserProfile> {
        let id: String = row.try_get("id")?;
        let email: Option<String> = row.try_get("email")?;
        let name: Option<String> = row.try_get("name")?;
        let image: Option<String> = row.try_get("image")?;
        let created_at: i64 = row.try_get("created_at")?;
        let updated_at: i64 = row.try_get("updated_at")?;

        let id = Identity::parse(&id).map_err(|e| DbError::InvalidRecord {
            table: "users",
            column: "id",
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(UserProfile {
            id,
            email,
            name,
            image: image.map(Self::parse_image).transpose()?,
            created_at: Self::parse_timestamp("created_at", created_at)?,
            updated_at: Self::parse_timestamp("updated_at", updated_at)?,
        })
    }

    #[track_caller]
    fn parse_image(raw: String) -> DbErrorResult<StoredImagePath> {
        StoredImagePath::from_record(raw).map_err(|e| DbError::InvalidRecord {
            table: "users",
            column: "image",
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn parse_timestamp(column: &'static str, secs: i64) -> DbErrorResult<DateTime<Utc>> {
        DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::InvalidRecord {
            table: "users",
            column,
            message: format!("timestamp {} out of range", secs),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &Identity) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, name, image, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_profile).transpose()
    }

    async fn get_image(&self, id: &Identity) -> DbErrorResult<Option<StoredImagePath>> {
        let image: Option<Option<String>> =
            sqlx::query_scalar("SELECT image FROM users WHERE id = ?")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await?;

        image.flatten().map(Self::parse_image).transpose()
    }

    async fn set_image(
        &self,
        id: &Identity,
        image: &StoredImagePath,
    ) -> DbErrorResult<Option<StoredImagePath>> {
        let now = Utc::now().timestamp();
        // Write lock before the read: a deferred transaction upgrading from a
        // stale WAL snapshot fails with SQLITE_BUSY_SNAPSHOT instead of waiting
        let mut tx = self.pool.begin_with(BEGIN_IMMEDIATE).await?;

        let previous: Option<Option<String>> =
            sqlx::query_scalar("SELECT image FROM users WHERE id = ?")
                .bind(id.as_str())
                .fetch_optional(&mut *tx)
                .await?;

        sqlx::query(
            r#"
                INSERT INTO users (id, image, created_at, updated_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    image = excluded.image,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(id.as_str())
        .bind(image.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        log::debug!("User {} image set to {}", id, image);

        // The new pointer is committed; an unparseable old value is only logged
        Ok(previous
            .flatten()
            .and_then(|raw| match StoredImagePath::from_record(raw) {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("Ignoring unusable previous image for {}: {}", id, e);
                    None
                }
            }))
    }

    async fn ensure_user(
        &self,
        id: &Identity,
        email: Option<&str>,
        name: Option<&str>,
    ) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, email, name, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    email = COALESCE(excluded.email, users.email),
                    name = COALESCE(excluded.name, users.name),
                    updated_at = CASE
                        WHEN COALESCE(excluded.email, users.email) IS NOT users.email
                          OR COALESCE(excluded.name, users.name) IS NOT users.name
                        THEN excluded.updated_at
                        ELSE users.updated_at
                    END
            "#,
        )
        .bind(id.as_str())
        .bind(email)
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
