use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    /// Always holds sanitized HTML.
    pub content: String,
    pub author: Option<String>,
    pub author_id: Option<i32>,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Count one successful read of this post.
    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    /// Merge the fields present in `changes`, leaving the others untouched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author_id) = changes.author_id {
            self.author_id = Some(author_id);
        }
    }
}

/// Input for creating a post. The store assigns id, views and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub author_id: Option<i32>,
}

impl NewPost {
    pub fn new(title: String, content: String, author_id: Option<i32>) -> Self {
        Self {
            title,
            content,
            author: None,
            author_id,
        }
    }
}

/// Partial update of a post; `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i32>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        let now = Utc::now();
        Post {
            id: 7,
            title: "Original".to_string(),
            content: "<p>Body</p>".to_string(),
            author: Some("Kim".to_string()),
            author_id: Some(3),
            views: 2,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut post = sample();
        post.apply(PostChanges {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "Renamed");
        assert_eq!(post.content, "<p>Body</p>");
        assert_eq!(post.author_id, Some(3));
        assert_eq!(post.views, 2);
    }

    #[test]
    fn test_record_view_saturates() {
        let mut post = sample();
        post.record_view();
        assert_eq!(post.views, 3);

        post.views = i32::MAX;
        post.record_view();
        assert_eq!(post.views, i32::MAX);
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(PostChanges::default().is_empty());
        assert!(
            !PostChanges {
                author_id: Some(1),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
