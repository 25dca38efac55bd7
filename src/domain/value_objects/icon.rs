//! Display icons for sidebar entries.
//!
//! Icons are a closed set of tags the client maps to glyphs. Channel and
//! role mappings live next to their enums and are exhaustive matches, so a
//! new channel type or role cannot compile without an icon decision.

use serde::{Deserialize, Serialize};

/// Icon tag attached to sidebar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Text channel marker
    Hash,
    /// Audio channel marker
    Mic,
    /// Video channel marker
    Video,
    /// Moderator badge
    ShieldCheck,
    /// Admin badge
    ShieldAlert,
}

impl Icon {
    /// Tag as sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::Mic => "mic",
            Self::Video => "video",
            Self::ShieldCheck => "shield-check",
            Self::ShieldAlert => "shield-alert",
        }
    }

    /// Accent colour the client applies, if any.
    pub fn tone(&self) -> Option<&'static str> {
        match self {
            Self::ShieldCheck => Some("indigo"),
            Self::ShieldAlert => Some("rose"),
            Self::Hash | Self::Mic | Self::Video => None,
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
