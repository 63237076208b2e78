//! Admin authentication against the backend auth endpoint, and the
//! server-side session store that remembers signed-in admins.

use crate::config::{Config, MAX_SESSION_TTL_HOURS};
use crate::security::{constant_time_compare, random_token};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("auth backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Tokens returned by a successful password sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: Option<TokenUser>,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    email: Option<String>,
}

/// Client for the backend's password sign-in and sign-out endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    pub fn new(http: reqwest::Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        Self::new(http, &config.supabase_url, &config.supabase_anon_key)
    }

    /// Exchange email and password for an access token.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to send request to auth API"))?;

        let status = response.status();
        if status.as_u16() == 400 || status.as_u16() == 401 {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Auth API error ({}): {}", status, body).into());
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| anyhow::Error::new(e).context("Failed to parse auth API response"))?;

        let email = token
            .user
            .and_then(|user| user.email)
            .unwrap_or_else(|| email.trim().to_string());

        Ok(AuthSession {
            access_token: token.access_token,
            email,
        })
    }

    /// Revoke an access token. Failures are logged and otherwise ignored.
    pub async fn sign_out(&self, access_token: &str) {
        let url = format!("{}/auth/v1/logout", self.base_url);

        let result = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => warn!("Auth sign-out returned {}", response.status()),
            Err(e) => warn!("Auth sign-out failed: {}", e),
        }
    }
}

// ==================== Sessions ====================

/// A signed-in admin.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
    pub access_token: String,
    pub csrf_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// Constant-time check of a submitted CSRF token.
    pub fn verify_csrf(&self, submitted: &str) -> bool {
        constant_time_compare(&self.csrf_token, submitted)
    }
}

/// In-memory admin sessions keyed by an unguessable id.
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, AdminSession>>,
}

impl SessionStore {
    /// `ttl_hours` is clamped to `0..=MAX_SESSION_TTL_HOURS`.
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            ttl: Duration::hours(ttl_hours.clamp(0, MAX_SESSION_TTL_HOURS)),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Store a new session and return its id (the cookie value).
    pub fn create(&self, auth: AuthSession) -> String {
        let id = random_token();
        let session = AdminSession {
            email: auth.email,
            access_token: auth.access_token,
            csrf_token: random_token(),
            expires_at: Utc::now()
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };

        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        sessions.retain(|_, s| s.expires_at > now);
        info!(email = %session.email, "Admin session created");
        sessions.insert(id.clone(), session);
        id
    }

    /// Look up a live session. Expired sessions are dropped.
    pub fn get(&self, id: &str) -> Option<AdminSession> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        match sessions.get(id) {
            Some(session) if session.expires_at > Utc::now() => Some(session.clone()),
            Some(_) => {
                sessions.remove(id);
                None
            }
            None => None,
        }
    }

    /// Remove a session, returning it if it existed.
    pub fn remove(&self, id: &str) -> Option<AdminSession> {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// How long a new session stays valid.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn auth_session(email: &str) -> AuthSession {
        AuthSession {
            access_token: "token".to_string(),
            email: email.to_string(),
        }
    }

    // ==================== SessionStore Tests ====================

    #[test]
    fn test_create_and_get_session() {
        let store = SessionStore::new(12);
        let id = store.create(auth_session("owner@example.com"));

        let session = store.get(&id).unwrap();
        assert_eq!(session.email, "owner@example.com");
        assert_eq!(session.csrf_token.len(), 64);
        assert!(session.verify_csrf(&session.csrf_token.clone()));
        assert!(!session.verify_csrf("forged"));
    }

    #[test]
    fn test_unknown_session_is_none() {
        let store = SessionStore::new(12);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_expired_session_is_dropped() {
        let store = SessionStore::new(0);
        let id = store.create(auth_session("owner@example.com"));
        assert!(store.get(&id).is_none());
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn test_remove_session() {
        let store = SessionStore::new(12);
        let id = store.create(auth_session("owner@example.com"));
        assert!(store.remove(&id).is_some());
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn test_sessions_have_distinct_ids_and_csrf_tokens() {
        let store = SessionStore::new(12);
        let a = store.create(auth_session("a@example.com"));
        let b = store.create(auth_session("b@example.com"));
        assert_ne!(a, b);
        assert_ne!(store.get(&a).unwrap().csrf_token, store.get(&b).unwrap().csrf_token);
    }

    #[test]
    fn test_oversized_ttl_is_clamped() {
        let store = SessionStore::new(10_000_000_000);
        assert_eq!(store.ttl(), Duration::hours(MAX_SESSION_TTL_HOURS));

        let id = store.create(auth_session("owner@example.com"));
        assert!(store.get(&id).is_some());
    }

    #[test]
    fn test_negative_ttl_expires_immediately() {
        let store = SessionStore::new(-5);
        assert_eq!(store.ttl(), Duration::zero());
        let id = store.create(auth_session("owner@example.com"));
        assert!(store.get(&id).is_none());
    }

    // ==================== AuthClient Tests ====================

    #[tokio::test]
    async fn test_sign_in_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("apikey", "anon-key"))
            .and(body_json(serde_json::json!({
                "email": "owner@example.com",
                "password": "hunter2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "jwt-token",
                "token_type": "bearer",
                "user": { "email": "owner@example.com" }
            })))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(reqwest::Client::new(), &mock_server.uri(), "anon-key");
        let session = client.sign_in("owner@example.com", "hunter2").await.unwrap();

        assert_eq!(session.access_token, "jwt-token");
        assert_eq!(session.email, "owner@example.com");
    }

    #[tokio::test]
    async fn test_sign_in_invalid_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(reqwest::Client::new(), &mock_server.uri(), "anon-key");
        let err = client.sign_in("owner@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_sign_in_backend_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(reqwest::Client::new(), &mock_server.uri(), "anon-key");
        let err = client.sign_in("owner@example.com", "pw").await.unwrap_err();
        match err {
            AuthError::Backend(e) => assert!(e.to_string().contains("503")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sign_out_sends_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("authorization", "Bearer jwt-token"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(reqwest::Client::new(), &mock_server.uri(), "anon-key");
        client.sign_out("jwt-token").await;
    }
}
