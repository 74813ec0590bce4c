//! PostgreSQL repository implementations.

use super::entity::post::Entity as PostEntity;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
///
/// Implements `PostRepository` through the generic base, mapping rows of the
/// `posts` table to `blog_core::domain::Post`.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;
