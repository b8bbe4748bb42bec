//! Public portfolio lookups.

use serde::Deserialize;

use crate::client::client;
use crate::error::ApiError;
use crate::models::PortfolioData;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Availability {
    pub available: bool,
}

pub async fn by_username(username: &str) -> Result<PortfolioData, ApiError> {
    client().get(&format!("/portfolio/{username}")).await
}

pub async fn check_username(username: &str) -> Result<Availability, ApiError> {
    client()
        .get(&format!("/portfolio/check-username/{username}"))
        .await
}

pub async fn check_email(email: &str) -> Result<Availability, ApiError> {
    client()
        .get_query("/users/check-email", &[("email", email)])
        .await
}
