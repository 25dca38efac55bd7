//! Sidebar categorization and role rules.

use serde::Serialize;

use crate::domain::entities::{Channel, ChannelType, MemberRole, MemberWithProfile};

/// Channels of one server split by medium. Each channel lands in exactly
/// one group; relative order within a group is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelPartition {
    pub text: Vec<Channel>,
    pub audio: Vec<Channel>,
    pub video: Vec<Channel>,
}

impl ChannelPartition {
    /// Channels of the given type.
    pub fn of(&self, channel_type: ChannelType) -> &[Channel] {
        match channel_type {
            ChannelType::Text => &self.text,
            ChannelType::Audio => &self.audio,
            ChannelType::Video => &self.video,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len() + self.audio.len() + self.video.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Management actions offered in the server header menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAction {
    InvitePeople,
    ServerSettings,
    ManageMembers,
    CreateChannel,
    DeleteServer,
    LeaveServer,
}

/// Pure rules used to shape the sidebar of a server.
pub struct SidebarRules;

impl SidebarRules {
    /// Split channels by medium.
    pub fn partition_channels(channels: &[Channel]) -> ChannelPartition {
        let mut partition = ChannelPartition::default();

        for channel in channels {
            let bucket = match channel.channel_type {
                ChannelType::Text => &mut partition.text,
                ChannelType::Audio => &mut partition.audio,
                ChannelType::Video => &mut partition.video,
            };
            bucket.push(channel.clone());
        }

        partition
    }

    /// Members the current profile can interact with (everyone but itself).
    pub fn visible_members(
        members: &[MemberWithProfile],
        profile_id: &str,
    ) -> Vec<MemberWithProfile> {
        members
            .iter()
            .filter(|m| !m.belongs_to(profile_id))
            .cloned()
            .collect()
    }

    /// Role of the profile in the server, `None` if it is not a member.
    pub fn resolve_role(members: &[MemberWithProfile], profile_id: &str) -> Option<MemberRole> {
        members
            .iter()
            .find(|m| m.belongs_to(profile_id))
            .map(|m| m.member.role)
    }

    /// Header menu entries available to a role.
    pub fn header_actions(role: Option<MemberRole>) -> Vec<HeaderAction> {
        let Some(role) = role else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if role.can_moderate() {
            actions.push(HeaderAction::InvitePeople);
        }
        if role.is_admin() {
            actions.push(HeaderAction::ServerSettings);
            actions.push(HeaderAction::ManageMembers);
        }
        if role.can_moderate() {
            actions.push(HeaderAction::CreateChannel);
        }
        if role.is_admin() {
            actions.push(HeaderAction::DeleteServer);
        } else {
            actions.push(HeaderAction::LeaveServer);
        }
        actions
    }

    pub fn can_create_channel(role: Option<MemberRole>) -> bool {
        role.is_some_and(|r| r.can_moderate())
    }

    pub fn can_manage_members(role: Option<MemberRole>) -> bool {
        role.is_some_and(|r| r.is_admin())
    }

    /// Edit/delete controls on a channel row. The default channel is locked.
    pub fn can_manage_channel(role: Option<MemberRole>, channel: &Channel) -> bool {
        Self::can_create_channel(role) && !channel.is_default()
    }
}
