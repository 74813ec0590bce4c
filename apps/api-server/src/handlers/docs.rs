//! OpenAPI document and Swagger UI for the posts API.

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use blog_shared::dto::{CreatePostRequest, MessageResponse, PostResponse, UpdatePostRequest};
use blog_shared::{ErrorResponse, FieldError};

use super::posts;

#[derive(OpenApi)]
#[openapi(
    info(title = "Blog API", description = "Create, read, update and delete blog posts."),
    paths(
        posts::create_post,
        posts::list_posts,
        posts::get_post,
        posts::update_post,
        posts::delete_post
    ),
    components(schemas(
        CreatePostRequest,
        UpdatePostRequest,
        PostResponse,
        MessageResponse,
        ErrorResponse,
        FieldError
    )),
    tags((name = "posts", description = "Blog post management"))
)]
pub struct ApiDoc;

/// Swagger UI at `/api-docs/` backed by the document at `/api-docs/openapi.json`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::redirect("/api-docs", "/api-docs/")).service(
        SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;

    use super::*;

    #[::core::prelude::v1::test]
    fn test_document_lists_post_routes() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Blog API");
        assert!(doc.paths.paths.contains_key("/posts"));
        assert!(doc.paths.paths.contains_key("/posts/{id}"));
    }

    #[actix_web::test]
    async fn test_openapi_json_is_served() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["info"]["title"], "Blog API");
        assert!(body["paths"]["/posts/{id}"].is_object());
    }

    #[actix_web::test]
    async fn test_swagger_ui_is_mounted_at_api_docs() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/api-docs/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).to_lowercase().contains("swagger"));

        let req = test::TestRequest::get().uri("/api-docs").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_redirection());
        assert_eq!(resp.headers().get("location").unwrap(), "/api-docs/");
    }
}
