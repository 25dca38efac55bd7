//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **SidebarService**: Viewer resolution, server fetch and sidebar shaping

pub mod sidebar_service;

pub use sidebar_service::{
    build_sidebar, RedirectTarget, SidebarError, SidebarOutcome, SidebarService,
    SidebarServiceImpl, MEMBERS_LABEL,
};
