use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `T` is the stored record, `N` the creation input and `ID` the key type.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Persist a new entity; the store assigns its id and timestamps.
    async fn insert(&self, new: N) -> Result<T, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Every stored entity, in key order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Update an already-identified entity and refresh its modification time.
    ///
    /// Returns `RepoError::NotFound` when no row carries the entity's id.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning the number of rows removed.
    /// An unknown id removes nothing and is not an error.
    async fn delete_by_id(&self, id: ID) -> Result<u64, RepoError>;
}

/// Post repository.
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {}

impl<R> PostRepository for R where R: BaseRepository<Post, NewPost, i32> {}
