//! # Blog Core
//!
//! The domain layer of the blog API: the `Post` record, the ports that
//! infrastructure implements, and the service enforcing post business rules.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
