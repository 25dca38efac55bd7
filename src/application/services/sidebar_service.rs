//! Sidebar Service
//!
//! Resolves the viewer, loads the server aggregate and shapes the sidebar.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{
    ChannelEntry, HeaderView, MemberEntry, SearchGroup, SearchItem, SearchKind, SectionType,
    SectionView, ServerSummary, SidebarView,
};
use crate::domain::{
    ChannelPartition, ChannelType, MemberRole, MemberWithProfile, Profile, ProfileRepository,
    ServerAggregate, ServerRepository, SidebarRules,
};
use crate::shared::error::AppError;

/// Label of the member search group and section.
pub const MEMBERS_LABEL: &str = "Members";

/// Sidebar service trait
#[async_trait]
pub trait SidebarService: Send + Sync {
    /// Build the sidebar of `server_id` for the identity provider subject
    /// `user_id`, or decide where the viewer must be redirected.
    async fn render_sidebar(
        &self,
        user_id: Option<&str>,
        server_id: &str,
    ) -> Result<SidebarOutcome, SidebarError>;
}

/// Where a guarded request is sent instead of a sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// No authenticated profile
    SignIn,
    /// Server does not exist
    Home,
}

impl RedirectTarget {
    /// Metric label for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::Home => "home",
        }
    }
}

/// Result of a sidebar request.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarOutcome {
    Rendered(Box<SidebarView>),
    Redirect(RedirectTarget),
}

/// Sidebar service errors
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    #[error("Store error: {0}")]
    Store(#[from] AppError),
}

/// SidebarService implementation
pub struct SidebarServiceImpl<P, S>
where
    P: ProfileRepository + ?Sized,
    S: ServerRepository + ?Sized,
{
    profile_repo: Arc<P>,
    server_repo: Arc<S>,
}

impl<P, S> SidebarServiceImpl<P, S>
where
    P: ProfileRepository + ?Sized,
    S: ServerRepository + ?Sized,
{
    pub fn new(profile_repo: Arc<P>, server_repo: Arc<S>) -> Self {
        Self {
            profile_repo,
            server_repo,
        }
    }

    async fn current_profile(&self, user_id: Option<&str>) -> Result<Option<Profile>, AppError> {
        match user_id {
            Some(user_id) => self.profile_repo.find_by_user_id(user_id).await,
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<P, S> SidebarService for SidebarServiceImpl<P, S>
where
    P: ProfileRepository + ?Sized,
    S: ServerRepository + ?Sized,
{
    async fn render_sidebar(
        &self,
        user_id: Option<&str>,
        server_id: &str,
    ) -> Result<SidebarOutcome, SidebarError> {
        let Some(profile) = self.current_profile(user_id).await? else {
            tracing::debug!(server_id, "No profile for session, redirecting to sign-in");
            return Ok(SidebarOutcome::Redirect(RedirectTarget::SignIn));
        };

        let Some(aggregate) = self
            .server_repo
            .find_with_channels_and_members(server_id)
            .await?
        else {
            tracing::debug!(server_id, profile_id = %profile.id, "Server not found, redirecting home");
            return Ok(SidebarOutcome::Redirect(RedirectTarget::Home));
        };

        let view = build_sidebar(&aggregate, &profile);
        tracing::debug!(
            server_id,
            profile_id = %profile.id,
            role = ?view.header.role,
            sections = view.sections.len(),
            "Sidebar rendered"
        );

        Ok(SidebarOutcome::Rendered(Box::new(view)))
    }
}

/// Shape a loaded server into the sidebar seen by `profile`.
pub fn build_sidebar(aggregate: &ServerAggregate, profile: &Profile) -> SidebarView {
    let server = &aggregate.server;
    let partition = SidebarRules::partition_channels(&aggregate.channels);
    let members = SidebarRules::visible_members(&aggregate.members, &profile.id);
    let role = SidebarRules::resolve_role(&aggregate.members, &profile.id);

    let header = HeaderView {
        server: ServerSummary::for_role(server, role),
        role,
        actions: SidebarRules::header_actions(role),
    };

    let mut search: Vec<SearchGroup> = ChannelType::ALL
        .iter()
        .map(|channel_type| SearchGroup {
            label: channel_type.label().to_string(),
            kind: SearchKind::Channel,
            data: partition
                .of(*channel_type)
                .iter()
                .map(SearchItem::from_channel)
                .collect(),
        })
        .collect();
    search.push(SearchGroup {
        label: MEMBERS_LABEL.to_string(),
        kind: SearchKind::Member,
        data: members.iter().map(SearchItem::from_member).collect(),
    });

    let mut sections: Vec<SectionView> = ChannelType::ALL
        .iter()
        .filter_map(|channel_type| channel_section(&partition, *channel_type, &server.id, role))
        .collect();
    if let Some(section) = members_section(&members, &server.id, role) {
        sections.push(section);
    }

    SidebarView {
        header,
        search,
        sections,
    }
}

fn channel_section(
    partition: &ChannelPartition,
    channel_type: ChannelType,
    server_id: &str,
    role: Option<MemberRole>,
) -> Option<SectionView> {
    let channels = partition.of(channel_type);
    if channels.is_empty() {
        return None;
    }

    Some(SectionView {
        section_type: SectionType::Channels,
        channel_type: Some(channel_type),
        label: channel_type.label().to_string(),
        role,
        server_id: server_id.to_string(),
        can_create_channel: SidebarRules::can_create_channel(role),
        can_manage_members: false,
        channels: channels
            .iter()
            .map(|channel| ChannelEntry {
                id: channel.id.clone(),
                name: channel.name.clone(),
                channel_type: channel.channel_type,
                icon: channel.channel_type.icon(),
                server_id: server_id.to_string(),
                role,
                can_manage: SidebarRules::can_manage_channel(role, channel),
            })
            .collect(),
        members: Vec::new(),
    })
}

fn members_section(
    members: &[MemberWithProfile],
    server_id: &str,
    role: Option<MemberRole>,
) -> Option<SectionView> {
    if members.is_empty() {
        return None;
    }

    Some(SectionView {
        section_type: SectionType::Members,
        channel_type: None,
        label: MEMBERS_LABEL.to_string(),
        role,
        server_id: server_id.to_string(),
        can_create_channel: false,
        can_manage_members: SidebarRules::can_manage_members(role),
        channels: Vec::new(),
        members: members.iter().map(MemberEntry::from).collect(),
    })
}
