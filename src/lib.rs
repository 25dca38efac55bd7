//! # Chat Sidebar Library
//!
//! This crate serves the sidebar of a chat server:
//! - Resolves the viewer's profile from a bearer JWT
//! - Loads the server with its channels and members from PostgreSQL
//! - Splits channels by medium, hides the viewer from the member list
//!   and resolves the viewer's role
//! - Returns a JSON view for the header, search widget and sections
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, repository traits and sidebar rules
//! - **Application Layer**: Sidebar service and view DTOs
//! - **Infrastructure Layer**: Database, repositories and metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chat_sidebar/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities, value objects, and traits
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Database, repositories and metrics
//! +-- presentation/  HTTP routes and middleware
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
