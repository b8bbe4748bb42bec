//! Contact messages: public send, admin inbox.

use serde::Serialize;

use crate::client::client;
use crate::error::ApiError;
use crate::models::{ContactMessage, ContactStats};

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Portfolio owner the message is addressed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_username: Option<String>,
}

/// Public endpoint; no auth required.
pub async fn send(input: &ContactInput) -> Result<ContactMessage, ApiError> {
    client().post("/contact", input).await
}

pub async fn list() -> Result<Vec<ContactMessage>, ApiError> {
    client().get("/contact").await
}

pub async fn unread() -> Result<Vec<ContactMessage>, ApiError> {
    client().get("/contact/unread").await
}

pub async fn stats() -> Result<ContactStats, ApiError> {
    client().get("/contact/stats").await
}

pub async fn get(id: &str) -> Result<ContactMessage, ApiError> {
    client().get(&format!("/contact/{id}")).await
}

/// The only mutation a message supports.
pub async fn mark_read(id: &str) -> Result<ContactMessage, ApiError> {
    client().patch_empty(&format!("/contact/{id}/read")).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/contact/{id}")).await
}
