//! Data Transfer Objects
//!
//! DTOs for API response serialization.

pub mod response;

pub use response::{
    ChannelEntry, HeaderView, MemberEntry, SearchGroup, SearchItem, SearchKind, SectionType,
    SectionView, ServerSummary, SidebarView,
};
