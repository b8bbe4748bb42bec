//! Technology catalog CRUD.

use serde::Serialize;

use crate::client::client;
use crate::error::ApiError;
use crate::models::{Technology, TechnologyWithStats};

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

pub async fn list() -> Result<Vec<Technology>, ApiError> {
    client().get("/technologies").await
}

pub async fn list_with_stats() -> Result<Vec<TechnologyWithStats>, ApiError> {
    client().get("/technologies/with-stats").await
}

pub async fn get(id: &str) -> Result<Technology, ApiError> {
    client().get(&format!("/technologies/{id}")).await
}

pub async fn create(input: &TechnologyInput) -> Result<Technology, ApiError> {
    client().post("/technologies", input).await
}

pub async fn update(id: &str, input: &TechnologyInput) -> Result<Technology, ApiError> {
    client().patch(&format!("/technologies/{id}"), input).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/technologies/{id}")).await
}
