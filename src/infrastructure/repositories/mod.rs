//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **ProfileRepository** - Profile lookup by identity provider subject
//! - **ServerRepository** - Server aggregate with channels and members
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgProfileRepository, PgServerRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let profile_repo = PgProfileRepository::new(pool.clone());
//!     let server_repo = PgServerRepository::new(pool);
//! }
//! ```

pub mod profile_repository;
pub mod server_repository;

pub use profile_repository::PgProfileRepository;
pub use server_repository::PgServerRepository;
