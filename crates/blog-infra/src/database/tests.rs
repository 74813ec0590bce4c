use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn repository(db: DatabaseConnection) -> Arc<dyn PostRepository> {
    Arc::new(PostgresPostRepository::new(db))
}

fn model(id: i32, title: &str, views: i32, at: DateTime<FixedOffset>) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        content: "<p>Content</p>".to_owned(),
        author: None,
        author_id: Some(42),
        views,
        created_at: at,
        updated_at: at,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let now = Utc::now().fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(1, "Test Post", 4, now)]])
        .into_connection();

    let repo = repository(db);

    let result: Option<Post> = repo.find_by_id(1).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 1);
    assert_eq!(post.views, 4);
    assert_eq!(post.author_id, Some(42));
}

#[tokio::test]
async fn test_find_missing_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = repository(db);

    let result: Option<Post> = repo.find_by_id(5).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let now = Utc::now().fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(12, "Fresh", 0, now)]])
        .into_connection();

    let repo = repository(db);

    let post: Post = repo
        .insert(NewPost::new(
            "Fresh".to_owned(),
            "<p>Content</p>".to_owned(),
            Some(42),
        ))
        .await
        .unwrap();

    assert_eq!(post.id, 12);
    assert_eq!(post.views, 0);
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn test_find_all_orders_by_id() {
    let now = Utc::now().fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(1, "a", 0, now), model(2, "b", 3, now)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts: Vec<Post> = {
        let posts: &dyn PostRepository = &repo;
        posts.find_all().await.unwrap()
    };
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[1].title, "b");

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains(r#"ORDER BY \"posts\".\"id\" ASC"#), "{log}");
}

#[tokio::test]
async fn test_save_returns_updated_row() {
    let created = Utc::now().fixed_offset();
    let mut updated = model(3, "Renamed", 1, created);
    updated.updated_at = Utc::now().fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![updated.clone()]])
        .into_connection();

    let repo = repository(db);

    let mut post: Post = model(3, "Original", 1, created).into();
    post.title = "Renamed".to_owned();

    let saved: Post = repo.save(post).await.unwrap();
    assert_eq!(saved.title, "Renamed");
    assert_eq!(saved.created_at, DateTime::<Utc>::from(created));
}

#[tokio::test]
async fn test_save_missing_row_is_not_found() {
    let now = Utc::now().fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = repository(db);

    let result: Result<Post, RepoError> = repo.save(model(8, "Gone", 0, now).into()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_reports_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = repository(db);

    assert_eq!(repo.delete_by_id(1).await.unwrap(), 1);
    assert_eq!(repo.delete_by_id(1).await.unwrap(), 0);
}
