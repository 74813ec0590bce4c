//! Post handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use blog_core::domain::{NewPost, Post, PostChanges};
use blog_shared::ErrorResponse;
use blog_shared::dto::{CreatePostRequest, MessageResponse, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

pub(crate) fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        author_id: post.author_id,
        views: post.views,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// POST /posts
#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state
        .posts
        .create(NewPost::new(req.title, req.content, Some(req.author_id)))
        .await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /posts
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses((status = 200, description = "All posts", body = [PostResponse]))
)]
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list_all()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
///
/// Every successful fetch counts as a view.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post, with its view counted", body = PostResponse),
        (status = 404, description = "No post with this id", body = ErrorResponse)
    )
)]
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PATCH /posts/{id}
#[utoipa::path(
    patch,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "No post with this id", body = ErrorResponse)
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let changes = PostChanges {
        title: req.title,
        content: req.content,
        author_id: req.author_id,
    };
    let post = state.posts.update(path.into_inner(), changes).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /posts/{id}
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 404, description = "No post with this id", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Post with id {} was deleted successfully.", id),
    }))
}
