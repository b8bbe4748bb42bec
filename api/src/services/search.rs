//! Global search and autocomplete suggestions.

use crate::client::client;
use crate::error::ApiError;
use crate::models::{Project, SearchResults, SearchSuggestions};

/// `GET /search?q=` — categorized top matches across all public content.
pub async fn global(query: &str) -> Result<SearchResults, ApiError> {
    client().get_query("/search", &[("q", query)]).await
}

/// `GET /search/suggestions?q=` — autocomplete strings per category.
pub async fn suggestions(query: &str) -> Result<SearchSuggestions, ApiError> {
    client()
        .get_query("/search/suggestions", &[("q", query)])
        .await
}

/// Public projects using a given technology.
pub async fn projects_by_technology(technology_id: &str) -> Result<Vec<Project>, ApiError> {
    client()
        .get(&format!("/search/by-technology/{technology_id}"))
        .await
}
