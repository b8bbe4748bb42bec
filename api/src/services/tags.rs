//! Tag CRUD.

use crate::client::client;
use crate::error::ApiError;
use crate::models::Tag;

pub async fn list() -> Result<Vec<Tag>, ApiError> {
    client().get("/tags").await
}

pub async fn get(id: &str) -> Result<Tag, ApiError> {
    client().get(&format!("/tags/{id}")).await
}

pub async fn create(name: &str) -> Result<Tag, ApiError> {
    client()
        .post("/tags", &serde_json::json!({ "name": name }))
        .await
}

pub async fn update(id: &str, name: &str) -> Result<Tag, ApiError> {
    client()
        .patch(&format!("/tags/{id}"), &serde_json::json!({ "name": name }))
        .await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/tags/{id}")).await
}
