//! Project CRUD and ordering.

use serde::Serialize;

use crate::client::client;
use crate::error::ApiError;
use crate::models::Project;

/// Create/update payload. `None` fields are omitted on the wire, so the
/// same type serves PATCH updates.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology_ids: Option<Vec<String>>,
}

pub async fn list(featured: Option<bool>) -> Result<Vec<Project>, ApiError> {
    match featured {
        Some(flag) => {
            client()
                .get_query("/projects", &[("featured", flag.to_string())])
                .await
        }
        None => client().get("/projects").await,
    }
}

pub async fn get(id: &str) -> Result<Project, ApiError> {
    client().get(&format!("/projects/{id}")).await
}

pub async fn create(input: &ProjectInput) -> Result<Project, ApiError> {
    client().post("/projects", input).await
}

pub async fn update(id: &str, input: &ProjectInput) -> Result<Project, ApiError> {
    client().patch(&format!("/projects/{id}"), input).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/projects/{id}")).await
}

pub async fn drafts() -> Result<Vec<Project>, ApiError> {
    client().get("/projects/my/drafts").await
}

pub async fn archived() -> Result<Vec<Project>, ApiError> {
    client().get("/projects/my/archived").await
}

pub async fn toggle_featured(id: &str) -> Result<Project, ApiError> {
    client().patch_empty(&format!("/projects/{id}/featured")).await
}

pub async fn clone_project(id: &str) -> Result<Project, ApiError> {
    client().post_empty(&format!("/projects/{id}/clone")).await
}

pub async fn reorder(project_ids: &[String]) -> Result<Vec<Project>, ApiError> {
    client()
        .post("/projects/reorder", &reorder_payload(project_ids))
        .await
}

fn reorder_payload(project_ids: &[String]) -> serde_json::Value {
    serde_json::json!({ "projectIds": project_ids })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_payload_uses_camel_case_key() {
        let ids = vec!["p2".to_string(), "p1".to_string()];
        assert_eq!(
            reorder_payload(&ids),
            serde_json::json!({ "projectIds": ["p2", "p1"] })
        );
    }

    #[test]
    fn project_input_omits_unset_fields() {
        let input = ProjectInput {
            title: Some("Folio".into()),
            featured: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "title": "Folio", "featured": true })
        );
    }

    #[test]
    fn project_input_renames_fields_to_camel_case() {
        let input = ProjectInput {
            live_url: Some("https://folio.dev".into()),
            technology_ids: Some(vec!["t1".into()]),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "liveUrl": "https://folio.dev",
                "technologyIds": ["t1"],
            })
        );
    }
}
