//! Profile entity and repository trait.
//!
//! Maps to the `profiles` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// The application-side record of an authenticated identity.
///
/// Maps to the `profiles` table:
/// - id: TEXT PRIMARY KEY (UUID)
/// - user_id: TEXT NOT NULL UNIQUE (subject issued by the identity provider)
/// - name: TEXT NOT NULL
/// - image_url: TEXT NOT NULL
/// - email: TEXT NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,

    /// Identity provider subject
    pub user_id: String,

    /// Display name
    pub name: String,

    pub image_url: String,

    pub email: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Repository trait for Profile lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile owned by an identity provider subject.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, AppError>;
}
