//! Authentication: sessions, password recovery, email verification, 2FA.
//!
//! `login` and `register` store the returned bearer token; `logout` clears
//! it and sends the browser back to the login page.

use serde::Deserialize;

use crate::client::client;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginCredentials, RegisterData, User};
use crate::token;

/// Response shape for action endpoints that only report back a message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorSecret {
    pub message: String,
    pub secret: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorVerification {
    pub message: String,
    #[serde(default)]
    pub valid: Option<bool>,
}

pub async fn login(credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
    let resp: AuthResponse = client().post("/auth/login", credentials).await?;
    token::set(&resp.access_token);
    Ok(resp)
}

pub async fn register(data: &RegisterData) -> Result<AuthResponse, ApiError> {
    let resp: AuthResponse = client().post("/auth/register", data).await?;
    token::set(&resp.access_token);
    Ok(resp)
}

/// The user behind the stored token.
pub async fn me() -> Result<User, ApiError> {
    client().get("/auth/me").await
}

/// Clear the token and return to the login page. Purely client-side.
pub fn logout() {
    token::clear();
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

pub async fn forgot_password(email: &str) -> Result<MessageResponse, ApiError> {
    client()
        .post("/auth/forgot-password", &serde_json::json!({ "email": email }))
        .await
}

pub async fn verify_reset_code(email: &str, code: &str) -> Result<MessageResponse, ApiError> {
    client()
        .post(
            "/auth/verify-reset-code",
            &serde_json::json!({ "email": email, "code": code }),
        )
        .await
}

pub async fn reset_password(
    email: &str,
    code: &str,
    password: &str,
) -> Result<MessageResponse, ApiError> {
    client()
        .post(
            "/auth/reset-password",
            &serde_json::json!({ "email": email, "code": code, "password": password }),
        )
        .await
}

pub async fn verify_email(verification_token: &str) -> Result<MessageResponse, ApiError> {
    client()
        .post(
            "/auth/verify-email",
            &serde_json::json!({ "token": verification_token }),
        )
        .await
}

pub async fn resend_verification_email(email: &str) -> Result<MessageResponse, ApiError> {
    client()
        .post(
            "/auth/resend-verification",
            &serde_json::json!({ "email": email }),
        )
        .await
}

pub async fn enable_2fa() -> Result<TwoFactorSecret, ApiError> {
    client().post_empty("/auth/2fa/enable").await
}

pub async fn verify_2fa(code: &str) -> Result<TwoFactorVerification, ApiError> {
    client()
        .post("/auth/2fa/verify", &serde_json::json!({ "code": code }))
        .await
}

pub async fn disable_2fa() -> Result<MessageResponse, ApiError> {
    client().post_empty("/auth/2fa/disable").await
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedToken {
    pub access_token: String,
}

pub async fn refresh_token() -> Result<RefreshedToken, ApiError> {
    let resp: RefreshedToken = client().post_empty("/auth/refresh-token").await?;
    token::set(&resp.access_token);
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refreshed_token_decodes_from_camel_case_body() {
        let resp: RefreshedToken =
            serde_json::from_value(serde_json::json!({ "accessToken": "jwt-2" })).unwrap();
        assert_eq!(resp.access_token, "jwt-2");
    }

    #[test]
    fn two_factor_verification_tolerates_missing_valid_flag() {
        let resp: TwoFactorVerification =
            serde_json::from_value(serde_json::json!({ "message": "ok" })).unwrap();
        assert_eq!(resp.valid, None);
    }
}
