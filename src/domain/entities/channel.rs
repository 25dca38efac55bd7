//! Channel entity.
//!
//! Maps to the `channels` table in the database schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Icon;

/// Channel medium matching the PostgreSQL ENUM `channel_type`.
///
/// Database definition:
/// ```sql
/// CREATE TYPE channel_type AS ENUM ('TEXT', 'AUDIO', 'VIDEO');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelType {
    /// A text channel
    Text,
    /// A voice channel
    Audio,
    /// A video channel
    Video,
}

impl ChannelType {
    /// All channel types in sidebar order.
    pub const ALL: [ChannelType; 3] = [Self::Text, Self::Audio, Self::Video];

    /// Parse the database representation. Matching is exact; any other
    /// spelling yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "TEXT" => Some(Self::Text),
            "AUDIO" => Some(Self::Audio),
            "VIDEO" => Some(Self::Video),
            _ => None,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Audio => "AUDIO",
            Self::Video => "VIDEO",
        }
    }

    /// Icon shown next to channels of this type.
    pub fn icon(&self) -> Icon {
        match self {
            Self::Text => Icon::Hash,
            Self::Audio => Icon::Mic,
            Self::Video => Icon::Video,
        }
    }

    /// Heading used for the sidebar group of this type.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text Channels",
            Self::Audio => "Voice Channels",
            Self::Video => "Video Channels",
        }
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Name of the default channel every server is created with.
/// It cannot be edited or deleted.
pub const DEFAULT_CHANNEL_NAME: &str = "general";

/// Represents a channel inside a server.
///
/// Maps to the `channels` table:
/// - id: TEXT PRIMARY KEY (UUID)
/// - name: TEXT NOT NULL
/// - type: channel_type NOT NULL DEFAULT 'TEXT'
/// - profile_id: TEXT NOT NULL REFERENCES profiles(id)
/// - server_id: TEXT NOT NULL REFERENCES servers(id)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub channel_type: ChannelType,

    /// Profile that created the channel
    pub profile_id: String,

    pub server_id: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Channel {
    /// Whether this is the protected default channel.
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_CHANNEL_NAME
    }
}
