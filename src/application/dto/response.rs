//! Response DTOs
//!
//! The sidebar view handed to the client renderers. Each struct feeds one
//! renderer: the header, the search widget, a section, a channel row or a
//! member row.

use serde::Serialize;

use crate::domain::{
    Channel, ChannelType, HeaderAction, Icon, MemberRole, MemberWithProfile, Server,
};

/// Complete sidebar for one server, as seen by one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarView {
    pub header: HeaderView,
    pub search: Vec<SearchGroup>,
    pub sections: Vec<SectionView>,
}

/// Server header: name, image and the menu the viewer is allowed to open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub server: ServerSummary,
    pub role: Option<MemberRole>,
    pub actions: Vec<HeaderAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerSummary {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// Only disclosed to viewers who may invite people
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
}

impl ServerSummary {
    pub fn for_role(server: &Server, role: Option<MemberRole>) -> Self {
        Self {
            id: server.id.clone(),
            name: server.name.clone(),
            image_url: server.image_url.clone(),
            invite_code: role
                .filter(MemberRole::can_moderate)
                .map(|_| server.invite_code.clone()),
        }
    }
}

/// Kind of entries in a search group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Channel,
    Member,
}

/// One labelled group of the search widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchGroup {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub data: Vec<SearchItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchItem {
    pub id: String,
    pub name: String,
    pub icon: Option<Icon>,
    /// Badge colour for role icons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<&'static str>,
}

impl SearchItem {
    pub fn from_channel(channel: &Channel) -> Self {
        Self {
            id: channel.id.clone(),
            name: channel.name.clone(),
            icon: Some(channel.channel_type.icon()),
            tone: None,
        }
    }

    pub fn from_member(member: &MemberWithProfile) -> Self {
        Self {
            id: member.member.id.clone(),
            name: member.profile.name.clone(),
            icon: member.member.role.icon(),
            tone: member.member.role.icon().and_then(|icon| icon.tone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Channels,
    Members,
}

/// A titled block of rows below the search widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub section_type: SectionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<ChannelType>,
    pub label: String,
    pub role: Option<MemberRole>,
    pub server_id: String,
    pub can_create_channel: bool,
    pub can_manage_members: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<ChannelEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberEntry>,
}

/// Channel row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub icon: Icon,
    pub server_id: String,
    pub role: Option<MemberRole>,
    pub can_manage: bool,
}

/// Member row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberEntry {
    pub id: String,
    pub profile_id: String,
    pub name: String,
    pub image_url: String,
    pub role: MemberRole,
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<&'static str>,
    pub server_id: String,
}

impl From<&MemberWithProfile> for MemberEntry {
    fn from(member: &MemberWithProfile) -> Self {
        Self {
            id: member.member.id.clone(),
            profile_id: member.member.profile_id.clone(),
            name: member.profile.name.clone(),
            image_url: member.profile.image_url.clone(),
            role: member.member.role,
            icon: member.member.role.icon(),
            tone: member.member.role.icon().and_then(|icon| icon.tone()),
            server_id: member.member.server_id.clone(),
        }
    }
}
