//! Skill CRUD. Skills hang off a profile; creation is profile-scoped.

use serde::Serialize;

use crate::client::client;
use crate::error::ApiError;
use crate::models::Skill;

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkillInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

pub async fn mine() -> Result<Vec<Skill>, ApiError> {
    client().get("/skills/my").await
}

pub async fn by_profile(profile_id: &str) -> Result<Vec<Skill>, ApiError> {
    client().get(&format!("/skills/profile/{profile_id}")).await
}

pub async fn create(profile_id: &str, input: &SkillInput) -> Result<Skill, ApiError> {
    client()
        .post(&format!("/skills/profile/{profile_id}"), input)
        .await
}

pub async fn update(id: &str, input: &SkillInput) -> Result<Skill, ApiError> {
    client().patch(&format!("/skills/{id}"), input).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/skills/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    // A level-only update must not wipe the other fields server-side.
    #[test]
    fn skill_input_serializes_only_set_fields() {
        let input = SkillInput {
            level: Some(4),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, serde_json::json!({ "level": 4 }));
    }
}
