//! Server Member entity.
//!
//! Maps to the `members` table in the database schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Profile;
use crate::domain::value_objects::Icon;

/// Member privilege rank matching the PostgreSQL ENUM `member_role`.
///
/// Variants are declared in ascending rank, so the derived `Ord` matches
/// the database ordering:
/// ```sql
/// CREATE TYPE member_role AS ENUM ('GUEST', 'MODERATOR', 'ADMIN');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Guest,
    Moderator,
    Admin,
}

impl MemberRole {
    /// Parse the database representation. Matching is exact; any other
    /// spelling yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GUEST" => Some(Self::Guest),
            "MODERATOR" => Some(Self::Moderator),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "GUEST",
            Self::Moderator => "MODERATOR",
            Self::Admin => "ADMIN",
        }
    }

    /// Badge shown next to members with this role. Guests are unmarked.
    pub fn icon(&self) -> Option<Icon> {
        match self {
            Self::Guest => None,
            Self::Moderator => Some(Icon::ShieldCheck),
            Self::Admin => Some(Icon::ShieldAlert),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Moderators and admins can manage channels and invites.
    pub fn can_moderate(&self) -> bool {
        *self >= Self::Moderator
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a profile's membership in a server.
///
/// Maps to the `members` table:
/// - id: TEXT PRIMARY KEY (UUID)
/// - role: member_role NOT NULL DEFAULT 'GUEST'
/// - profile_id: TEXT NOT NULL REFERENCES profiles(id)
/// - server_id: TEXT NOT NULL REFERENCES servers(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,

    pub role: MemberRole,

    pub profile_id: String,

    pub server_id: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// A member loaded together with its profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberWithProfile {
    #[serde(flatten)]
    pub member: Member,

    pub profile: Profile,
}

impl MemberWithProfile {
    /// Whether this membership belongs to the given profile.
    pub fn belongs_to(&self, profile_id: &str) -> bool {
        self.member.profile_id == profile_id
    }
}
