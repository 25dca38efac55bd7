//! Profile Repository Implementation
//!
//! PostgreSQL implementation of the ProfileRepository trait.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Profile, ProfileRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Database row representation matching the profiles table schema.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: String,
    user_id: String,
    name: String,
    image_url: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    /// Convert database row to domain Profile entity.
    fn into_profile(self) -> Profile {
        Profile {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            image_url: self.image_url,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL profile repository implementation.
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, user_id, name, image_url, email, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_db_query("select", "profiles", start.elapsed().as_secs_f64());

        Ok(row.map(ProfileRow::into_profile))
    }
}
