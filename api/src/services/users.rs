//! User administration (admin-only endpoints, gated server-side).

use serde::Deserialize;

use crate::client::client;
use crate::error::ApiError;
use crate::models::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub projects_count: u32,
    pub skills_count: u32,
    pub technologies_count: u32,
    pub posts_count: u32,
}

pub async fn list() -> Result<Vec<User>, ApiError> {
    client().get("/users").await
}

pub async fn get(id: &str) -> Result<User, ApiError> {
    client().get(&format!("/users/{id}")).await
}

pub async fn get_by_username(username: &str) -> Result<User, ApiError> {
    client().get(&format!("/users/username/{username}")).await
}

pub async fn activate(id: &str) -> Result<User, ApiError> {
    client().patch_empty(&format!("/users/{id}/activate")).await
}

pub async fn deactivate(id: &str) -> Result<User, ApiError> {
    client().patch_empty(&format!("/users/{id}/deactivate")).await
}

pub async fn set_role(id: &str, role: Role) -> Result<User, ApiError> {
    client()
        .patch(&format!("/users/{id}/role"), &serde_json::json!({ "role": role }))
        .await
}

pub async fn set_password(id: &str, password: &str) -> Result<User, ApiError> {
    client()
        .patch(
            &format!("/users/{id}/password"),
            &serde_json::json!({ "password": password }),
        )
        .await
}

pub async fn stats(id: &str) -> Result<UserStats, ApiError> {
    client().get(&format!("/users/{id}/stats")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_decode_from_camel_case_body() {
        let stats: UserStats = serde_json::from_value(serde_json::json!({
            "projectsCount": 4,
            "skillsCount": 12,
            "technologiesCount": 7,
            "postsCount": 2,
        }))
        .unwrap();
        assert_eq!(stats.projects_count, 4);
        assert_eq!(stats.skills_count, 12);
        assert_eq!(stats.technologies_count, 7);
        assert_eq!(stats.posts_count, 2);
    }
}
