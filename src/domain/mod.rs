//! # Domain Layer
//!
//! The domain layer contains the core rules of the sidebar.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Profile, Server, Channel, Member)
//! - **value_objects**: Immutable value types (Icon)
//! - **services**: Domain services for categorization and role rules
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Closed enumerations are matched exhaustively

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
