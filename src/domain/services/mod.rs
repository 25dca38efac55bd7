//! # Domain Services
//!
//! Domain services encapsulate business logic that doesn't naturally
//! belong to a single entity.
//!
//! ## Services
//!
//! - **SidebarRules**: Channel partitioning, member visibility and role gates

mod sidebar_rules;

pub use sidebar_rules::*;
