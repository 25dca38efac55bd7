//! # Domain Entities
//!
//! Core domain entities read by the sidebar. All entities map directly to
//! their corresponding database tables.
//!
//! - **Profile**: Application record of an authenticated identity
//! - **Server**: A chat space that owns channels and members
//! - **Channel**: A text, audio or video stream inside a server
//! - **Member**: A profile's membership in a server, carrying a role
//!
//! Repository traits define the data access contracts and are implemented
//! in the infrastructure layer.

mod channel;
mod member;
mod profile;
mod server;

pub use channel::{Channel, ChannelType, DEFAULT_CHANNEL_NAME};
pub use member::{Member, MemberRole, MemberWithProfile};
pub use profile::{Profile, ProfileRepository};
pub use server::{Server, ServerAggregate, ServerRepository};

#[cfg(test)]
pub use profile::MockProfileRepository;
#[cfg(test)]
pub use server::MockServerRepository;
