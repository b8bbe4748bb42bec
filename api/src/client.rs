//! Shared HTTP client.
//!
//! One [`ApiClient`] for the whole app: it joins paths onto the configured
//! base URL, attaches the bearer token when one is stored, and applies the
//! global 401 policy (clear token, bounce to `/login`). Services never talk
//! to `reqwest` directly.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::token;

/// Base URL baked in at compile time, overridable with `FOLIO_API_URL`.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// The process-wide client.
pub fn client() -> &'static ApiClient {
    CLIENT.get_or_init(|| {
        ApiClient::new(option_env!("FOLIO_API_URL").unwrap_or(DEFAULT_API_URL))
    })
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.get(self.url(path));
        self.send(req).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.http.get(self.url(path)).query(query);
        self.send(req).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.http.post(self.url(path)).json(body);
        self.send(req).await
    }

    /// POST with no body, for action endpoints like `/posts/{id}/publish`.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.post(self.url(path));
        self.send(req).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.http.patch(self.url(path)).json(body);
        self.send(req).await
    }

    /// PATCH with no body, for toggles like `/projects/{id}/featured`.
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.patch(self.url(path));
        self.send(req).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.http.put(self.url(path)).json(body);
        self.send(req).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let req = self.http.delete(self.url(path));
        let resp = self.execute(req).await?;
        Self::check_status(resp).await?;
        Ok(())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = self.execute(req).await?;
        let resp = Self::check_status(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn execute(
        &self,
        mut req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        if let Some(token) = token::get() {
            req = req.bearer_auth(token);
        }
        Ok(req.send().await?)
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.as_u16() == 401 {
            tracing::warn!(url = %resp.url(), "request rejected as unauthorized");
            // Bad login attempts are also 401; only an expired session
            // (a stored token the server rejected) gets bounced.
            if token::get().is_some() {
                token::clear();
                redirect_to_login();
            }
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            tracing::warn!(%status, url = %resp.url(), "request failed");
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_message(&body),
            });
        }
        Ok(resp)
    }
}

/// Pull the human-readable `message` out of an error body when the backend
/// sent JSON; fall back to the raw text.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message") {
            match message {
                serde_json::Value::String(s) => return s.clone(),
                // Validation errors arrive as an array of strings.
                serde_json::Value::Array(parts) => {
                    let joined: Vec<&str> =
                        parts.iter().filter_map(|p| p.as_str()).collect();
                    if !joined.is_empty() {
                        return joined.join(", ");
                    }
                }
                _ => {}
            }
        }
    }
    body.trim().to_string()
}

fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joining_normalizes_slashes() {
        let client = ApiClient::new("http://localhost:3000/api/v1/");
        assert_eq!(client.url("/search"), "http://localhost:3000/api/v1/search");
        assert_eq!(client.url("projects/p1"), "http://localhost:3000/api/v1/projects/p1");
    }

    #[test]
    fn extract_message_handles_json_and_plain_bodies() {
        assert_eq!(extract_message(r#"{"message": "not found"}"#), "not found");
        assert_eq!(
            extract_message(r#"{"message": ["email invalid", "password too short"]}"#),
            "email invalid, password too short"
        );
        assert_eq!(extract_message("boom"), "boom");
    }
}
