//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

struct Table {
    rows: BTreeMap<i32, Post>,
    next_id: i32,
}

/// In-memory post store using a `BTreeMap` behind an async RwLock.
///
/// Ids are never reused, even after deletion.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, NewPost, i32> for InMemoryPostRepository {
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("post id sequence exhausted".to_string()))?;

        let now = Utc::now();
        let post = Post {
            id,
            title: new.title,
            content: new.content,
            author: new.author,
            author_id: new.author_id,
            views: 0,
            created_at: now,
            updated_at: now,
        };

        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let stored = table.rows.get_mut(&entity.id).ok_or(RepoError::NotFound)?;
        entity.created_at = stored.created_at;
        entity.updated_at = Utc::now();
        *stored = entity.clone();

        Ok(entity)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, RepoError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> NewPost {
        NewPost::new(title.to_string(), "<p>x</p>".to_string(), Some(1))
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();

        let first = repo.insert(new_post("a")).await.unwrap();
        let second = repo.insert(new_post("b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.views, 0);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(new_post("a")).await.unwrap();

        assert_eq!(repo.delete_by_id(first.id).await.unwrap(), 1);
        let second = repo.insert(new_post("b")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_save_refreshes_updated_at_only() {
        let repo = InMemoryPostRepository::new();
        let mut post = repo.insert(new_post("a")).await.unwrap();
        let created_at = post.created_at;

        post.views = 3;
        post.created_at = Utc::now() + chrono::Duration::days(1);
        let saved = repo.save(post).await.unwrap();

        assert_eq!(saved.views, 3);
        assert_eq!(saved.created_at, created_at);
        assert!(saved.updated_at >= created_at);
    }

    #[tokio::test]
    async fn test_save_unknown_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let mut post = repo.insert(new_post("a")).await.unwrap();
        post.id = 77;

        assert!(matches!(repo.save(post).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_unknown_affects_nothing() {
        let repo = InMemoryPostRepository::new();
        assert_eq!(repo.delete_by_id(9).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = InMemoryPostRepository::new();
        for title in ["a", "b", "c"] {
            repo.insert(new_post(title)).await.unwrap();
        }

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }
}
