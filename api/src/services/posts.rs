//! Blog post CRUD, publishing, and tag assignment.

use serde::Serialize;

use crate::client::client;
use crate::error::ApiError;
use crate::models::Post;

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PostFilters<'a> {
    pub published: Option<bool>,
    pub tag_id: Option<&'a str>,
}

impl PostFilters<'_> {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(published) = self.published {
            params.push(("published", published.to_string()));
        }
        if let Some(tag_id) = self.tag_id {
            params.push(("tagId", tag_id.to_string()));
        }
        params
    }
}

pub async fn list(filters: PostFilters<'_>) -> Result<Vec<Post>, ApiError> {
    client().get_query("/posts", &filters.query_params()).await
}

pub async fn get(id: &str) -> Result<Post, ApiError> {
    client().get(&format!("/posts/{id}")).await
}

pub async fn get_by_slug(slug: &str) -> Result<Post, ApiError> {
    client().get(&format!("/posts/slug/{slug}")).await
}

pub async fn create(input: &PostInput) -> Result<Post, ApiError> {
    client().post("/posts", input).await
}

pub async fn update(id: &str, input: &PostInput) -> Result<Post, ApiError> {
    client().patch(&format!("/posts/{id}"), input).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/posts/{id}")).await
}

pub async fn publish(id: &str) -> Result<Post, ApiError> {
    client().post_empty(&format!("/posts/{id}/publish")).await
}

pub async fn unpublish(id: &str) -> Result<Post, ApiError> {
    client().post_empty(&format!("/posts/{id}/unpublish")).await
}

pub async fn add_tags(post_id: &str, tag_ids: &[String]) -> Result<Post, ApiError> {
    client()
        .post(&format!("/posts/{post_id}/tags"), &tag_assignment(tag_ids))
        .await
}

pub async fn remove_tag(post_id: &str, tag_id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/posts/{post_id}/tags/{tag_id}")).await
}

fn tag_assignment(tag_ids: &[String]) -> serde_json::Value {
    serde_json::json!({ "tagIds": tag_ids })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_params() {
        assert!(PostFilters::default().query_params().is_empty());
    }

    #[test]
    fn filters_map_to_camel_case_params() {
        let filters = PostFilters {
            published: Some(true),
            tag_id: Some("t9"),
        };
        assert_eq!(
            filters.query_params(),
            vec![("published", "true".to_string()), ("tagId", "t9".to_string())]
        );
    }

    #[test]
    fn tag_filter_alone_skips_published() {
        let filters = PostFilters {
            published: None,
            tag_id: Some("t9"),
        };
        assert_eq!(filters.query_params(), vec![("tagId", "t9".to_string())]);
    }

    #[test]
    fn tag_assignment_uses_camel_case_key() {
        assert_eq!(
            tag_assignment(&["t1".to_string(), "t2".to_string()]),
            serde_json::json!({ "tagIds": ["t1", "t2"] })
        );
    }
}
