//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Icon**: Display tag for channels and member roles

mod icon;

pub use icon::*;
