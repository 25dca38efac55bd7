//! Server Repository Implementation
//!
//! PostgreSQL implementation of the ServerRepository trait.
//! Loads a server together with its channels and members (with profiles).

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::domain::{
    Channel, ChannelType, Member, MemberRole, MemberWithProfile, Profile, Server,
    ServerAggregate, ServerRepository,
};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Database row representation matching the servers table schema.
#[derive(Debug, sqlx::FromRow)]
struct ServerRow {
    id: String,
    name: String,
    image_url: String,
    invite_code: String,
    profile_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ServerRow {
    fn into_server(self) -> Server {
        Server {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            invite_code: self.invite_code,
            profile_id: self.profile_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Database row representation matching the channels table schema.
#[derive(Debug, sqlx::FromRow)]
struct ChannelRow {
    id: String,
    name: String,
    #[sqlx(rename = "type")]
    channel_type: String, // PostgreSQL ENUM cast to TEXT
    profile_id: String,
    server_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ChannelRow {
    fn into_channel(self) -> Result<Channel, AppError> {
        let channel_type = ChannelType::parse(&self.channel_type).ok_or_else(|| {
            AppError::Internal(format!(
                "Channel {} has unknown type '{}'",
                self.id, self.channel_type
            ))
        })?;

        Ok(Channel {
            id: self.id,
            name: self.name,
            channel_type,
            profile_id: self.profile_id,
            server_id: self.server_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// A members row joined with its profile.
#[derive(Debug, sqlx::FromRow)]
struct MemberProfileRow {
    id: String,
    role: String, // PostgreSQL ENUM cast to TEXT
    profile_id: String,
    server_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    profile_user_id: String,
    profile_name: String,
    profile_image_url: String,
    profile_email: String,
    profile_created_at: DateTime<Utc>,
    profile_updated_at: DateTime<Utc>,
}

impl MemberProfileRow {
    fn into_member(self) -> Result<MemberWithProfile, AppError> {
        let role = MemberRole::parse(&self.role).ok_or_else(|| {
            AppError::Internal(format!("Member {} has unknown role '{}'", self.id, self.role))
        })?;

        Ok(MemberWithProfile {
            profile: Profile {
                id: self.profile_id.clone(),
                user_id: self.profile_user_id,
                name: self.profile_name,
                image_url: self.profile_image_url,
                email: self.profile_email,
                created_at: self.profile_created_at,
                updated_at: self.profile_updated_at,
            },
            member: Member {
                id: self.id,
                role,
                profile_id: self.profile_id,
                server_id: self.server_id,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
        })
    }
}

/// Isolation for the aggregate read. The server, channel and member queries
/// share one snapshot.
const SNAPSHOT_READ: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY";

/// PostgreSQL server repository implementation.
#[derive(Clone)]
pub struct PgServerRepository {
    pool: PgPool,
}

impl PgServerRepository {
    /// Create a new PgServerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_channels(
        conn: &mut PgConnection,
        server_id: &str,
    ) -> Result<Vec<Channel>, AppError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, ChannelRow>(
            r#"
            SELECT id, name, type::TEXT AS type, profile_id, server_id, created_at, updated_at
            FROM channels
            WHERE server_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(server_id)
        .fetch_all(&mut *conn)
        .await?;
        metrics::record_db_query("select", "channels", start.elapsed().as_secs_f64());

        rows.into_iter().map(ChannelRow::into_channel).collect()
    }

    /// Members ordered by role rank; the enum declaration order is the rank.
    async fn load_members(
        conn: &mut PgConnection,
        server_id: &str,
    ) -> Result<Vec<MemberWithProfile>, AppError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, MemberProfileRow>(
            r#"
            SELECT m.id, m.role::TEXT AS role, m.profile_id, m.server_id,
                   m.created_at, m.updated_at,
                   p.user_id AS profile_user_id, p.name AS profile_name,
                   p.image_url AS profile_image_url, p.email AS profile_email,
                   p.created_at AS profile_created_at, p.updated_at AS profile_updated_at
            FROM members m
            INNER JOIN profiles p ON p.id = m.profile_id
            WHERE m.server_id = $1
            ORDER BY m.role ASC, m.created_at ASC
            "#,
        )
        .bind(server_id)
        .fetch_all(&mut *conn)
        .await?;
        metrics::record_db_query("select", "members", start.elapsed().as_secs_f64());

        rows.into_iter().map(MemberProfileRow::into_member).collect()
    }
}

#[async_trait]
impl ServerRepository for PgServerRepository {
    async fn find_with_channels_and_members(
        &self,
        id: &str,
    ) -> Result<Option<ServerAggregate>, AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(SNAPSHOT_READ).execute(&mut *tx).await?;

        let start = Instant::now();
        let row = sqlx::query_as::<_, ServerRow>(
            r#"
            SELECT id, name, image_url, invite_code, profile_id, created_at, updated_at
            FROM servers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        metrics::record_db_query("select", "servers", start.elapsed().as_secs_f64());

        let Some(row) = row else {
            return Ok(None);
        };

        let channels = Self::load_channels(&mut *tx, id).await?;
        let members = Self::load_members(&mut *tx, id).await?;
        tx.commit().await?;

        Ok(Some(ServerAggregate {
            server: row.into_server(),
            channels,
            members,
        }))
    }
}
