//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! post storage and HTML sanitization.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory store only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;
pub mod sanitize;

// Re-exports
pub use database::{DatabaseConfig, InMemoryPostRepository};
pub use sanitize::AmmoniaSanitizer;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};
