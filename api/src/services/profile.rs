//! Profile read/write for the authenticated user.

use serde::Serialize;

use crate::client::client;
use crate::error::ApiError;
use crate::models::Profile;

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

pub async fn mine() -> Result<Profile, ApiError> {
    client().get("/profile/me").await
}

pub async fn by_user(user_id: &str) -> Result<Profile, ApiError> {
    client().get(&format!("/profile/user/{user_id}")).await
}

pub async fn create(input: &ProfileInput) -> Result<Profile, ApiError> {
    client().post("/profile", input).await
}

pub async fn update(input: &ProfileInput) -> Result<Profile, ApiError> {
    client().patch("/profile", input).await
}

pub async fn delete() -> Result<(), ApiError> {
    client().delete("/profile").await
}
