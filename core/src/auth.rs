//! Session token state and the login exchange payloads.
//!
//! # Design
//! The client owns exactly one `TokenState`. It starts `Empty`, becomes
//! `Populated` after a successful login or an explicit injection, and is
//! only ever replaced by a newer token. Nothing in the request path looks at
//! expiry; a stale token surfaces as a 401 from the server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Relative path of the login endpoint. Requests to it never trigger
/// authorization themselves.
pub const LOGIN_PATH: &str = "wms/auth/login/";

/// Bearer credential plus the metadata the server issued with it.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub token: String,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub refresh_token: Option<String>,
}

impl SessionToken {
    /// A token without metadata, as supplied through manual injection.
    pub fn bare(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            issued_at: None,
            expires_at: None,
            refresh_token: None,
        }
    }

    /// Whether `now` is past the server-declared expiry. Informational only.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionToken")
            .field("token", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Two-state token cell owned by one client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TokenState {
    #[default]
    Empty,
    Populated(SessionToken),
}

impl TokenState {
    pub fn is_empty(&self) -> bool {
        matches!(self, TokenState::Empty)
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            TokenState::Empty => None,
            TokenState::Populated(token) => Some(token),
        }
    }

    /// Store `token`, discarding whatever was held before.
    pub fn replace(&mut self, token: SessionToken) {
        *self = TokenState::Populated(token);
    }
}

/// Body of `POST wms/auth/login/`.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login response. `iat`/`exp` are unix seconds.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl From<LoginResponse> for SessionToken {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            issued_at: response.iat.and_then(|secs| DateTime::from_timestamp(secs, 0)),
            expires_at: response.exp.and_then(|secs| DateTime::from_timestamp(secs, 0)),
            refresh_token: response.refresh_token.filter(|t| !t.is_empty()),
        }
    }
}
