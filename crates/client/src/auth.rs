//! Login/register against the backend.
//!
//! The backend validates credentials but issues no bearer token; the session
//! token is generated locally and is only a marker for "logged in", never a
//! cryptographically validated credential.

use api_types::auth::{LoginRequest, RegisterRequest, User};
use chrono::Utc;
use reqwest::StatusCode;
use thiserror::Error;

use crate::{error_message, parse_or_echo, ApiClient};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },
}

/// A completed login: the user record plus the locally-generated token.
#[derive(Clone, Debug)]
pub struct AuthSuccess {
    pub token: String,
    pub user: User,
}

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, AuthError> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .http()
            .post(self.url("login"))
            .json(&payload)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            if matches!(status.as_u16(), 401 | 404) {
                return Err(AuthError::InvalidCredentials);
            }
            return Err(AuthError::Server {
                status,
                message: error_message(resp).await,
            });
        }

        // The endpoint answers with an array of matching users; an empty
        // array means the credentials matched nothing.
        let users: Vec<User> = resp.json().await?;
        let user = users.into_iter().next().ok_or(AuthError::InvalidCredentials)?;

        let token = format!("token_{}_{}", user.id, Utc::now().timestamp_millis());
        tracing::debug!(user_id = user.id, "login succeeded");
        Ok(AuthSuccess { token, user })
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, AuthError> {
        let resp = self
            .http()
            .post(self.url("register"))
            .json(request)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            if status.as_u16() == 409 {
                return Err(AuthError::EmailTaken);
            }
            return Err(AuthError::Server {
                status,
                message: error_message(resp).await,
            });
        }

        let fallback = User {
            id: 0,
            name: request.name.clone(),
            email: request.email.clone(),
            created_at: None,
        };
        let body = resp.bytes().await?;
        Ok(parse_or_echo(&body, &fallback))
    }
}
