//! Post service - business rules between the API boundary and the store.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::{DomainError, RepoError};
use crate::ports::{BaseRepository, HtmlSanitizer, PostRepository};

/// Orchestrates sanitize-before-store, partial merges and not-found signaling.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    sanitizer: Arc<dyn HtmlSanitizer>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, sanitizer: Arc<dyn HtmlSanitizer>) -> Self {
        Self { posts, sanitizer }
    }

    /// Create a post with sanitized content and zero views.
    pub async fn create(&self, mut new: NewPost) -> Result<Post, DomainError> {
        new.content = self.sanitizer.sanitize(&new.content);

        let post = self.posts.insert(new).await?;
        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// All posts as stored.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    /// Fetch a post and count the view.
    ///
    /// The read-increment-save sequence is not atomic: concurrent reads of the
    /// same post may lose increments.
    pub async fn get_by_id(&self, id: i32) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        post.record_view();
        let post = self.persist(post).await?;
        tracing::debug!(post_id = id, views = post.views, "Post viewed");
        Ok(post)
    }

    /// Merge the present fields of `changes` onto an existing post.
    pub async fn update(&self, id: i32, mut changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        if changes.is_empty() {
            tracing::debug!(post_id = id, "Update carries no changes; touching updated_at only");
        }

        if let Some(content) = changes.content.as_deref() {
            changes.content = Some(self.sanitizer.sanitize(content));
        }

        post.apply(changes);
        let post = self.persist(post).await?;
        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    /// Hard-delete a post.
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let affected = self.posts.delete_by_id(id).await?;

        if affected == 0 {
            return Err(DomainError::post_not_found(id));
        }

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }

    async fn persist(&self, post: Post) -> Result<Post, DomainError> {
        let id = post.id;
        self.posts.save(post).await.map_err(|e| match e {
            // Removed between the read and the write.
            RepoError::NotFound => DomainError::post_not_found(id),
            other => other.into(),
        })
    }
}
