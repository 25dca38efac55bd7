//! Server entity, its aggregate, and repository trait.
//!
//! Maps to the `servers` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Channel, MemberWithProfile};
use crate::shared::error::AppError;

/// Represents a server in the chat system.
///
/// Maps to the `servers` table:
/// - id: TEXT PRIMARY KEY (UUID)
/// - name: TEXT NOT NULL
/// - image_url: TEXT NOT NULL
/// - invite_code: TEXT NOT NULL UNIQUE
/// - profile_id: TEXT NOT NULL REFERENCES profiles(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,

    pub name: String,

    pub image_url: String,

    pub invite_code: String,

    /// Owning profile
    pub profile_id: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// A server with its channels and members, as read for the sidebar.
///
/// `channels` are ordered by creation time ascending; `members` by role
/// rank ascending, each with its profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerAggregate {
    pub server: Server,

    pub channels: Vec<Channel>,

    pub members: Vec<MemberWithProfile>,
}

/// Repository trait for Server reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Load a server with its ordered channels and members.
    async fn find_with_channels_and_members(
        &self,
        id: &str,
    ) -> Result<Option<ServerAggregate>, AppError>;
}
