//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "title must be 1 to 255 characters"))]
    #[schema(example = "Hello, world")]
    pub title: String,

    /// HTML body; sanitized before it is stored.
    #[validate(length(min = 1, message = "content must not be empty"))]
    #[schema(example = "<p>First post</p>")]
    pub content: String,

    #[schema(example = 1)]
    pub author_id: i32,
}

/// Partial update of a post. Absent (or null) fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 255, message = "title must be 1 to 255 characters"))]
    #[serde(default)]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "content must not be empty"))]
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub author_id: Option<i32>,
}

/// A stored post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub author_id: Option<i32>,
    pub views: i32,
    /// RFC 3339 timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp.
    pub updated_at: String,
}

/// Confirmation returned after a delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_uses_camel_case() {
        let req: CreatePostRequest = serde_json::from_value(json!({
            "title": "t",
            "content": "c",
            "authorId": 3
        }))
        .unwrap();

        assert_eq!(req.author_id, 3);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_unknown_fields() {
        let result = serde_json::from_value::<CreatePostRequest>(json!({
            "title": "t",
            "content": "c",
            "authorId": 3,
            "views": 100
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_requires_author_id() {
        let result = serde_json::from_value::<CreatePostRequest>(json!({
            "title": "t",
            "content": "c"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_title_fails_validation() {
        let req = CreatePostRequest {
            title: String::new(),
            content: "c".to_string(),
            author_id: 1,
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_update_request_null_is_absent() {
        let req: UpdatePostRequest =
            serde_json::from_value(json!({ "title": null, "content": "x" })).unwrap();

        assert!(req.title.is_none());
        assert_eq!(req.content.as_deref(), Some("x"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_validates_present_fields() {
        let req = UpdatePostRequest {
            content: Some(String::new()),
            ..Default::default()
        };

        assert!(req.validate().is_err());
        assert!(UpdatePostRequest::default().validate().is_ok());
    }
}
