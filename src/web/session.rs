//! Admin session cookie handling and request extractors.

use crate::auth::AdminSession;
use crate::security::constant_time_compare;
use crate::web::AppState;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;
use std::convert::Infallible;

pub const SESSION_COOKIE: &str = "admin_session";

pub const LOGIN_PATH: &str = "/admin-login";

/// Double-submit token for the sign-in form, scoped to the login path.
pub const LOGIN_CSRF_COOKIE: &str = "login_csrf";

/// Cookie carrying a new admin session id. Lives as long as the session.
pub fn session_cookie(id: String, ttl: chrono::Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(ttl.num_seconds()))
        .build()
}

/// Removal cookie for the admin session. Path must match `session_cookie`.
pub fn session_removal() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

pub fn login_csrf_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((LOGIN_CSRF_COOKIE, token))
        .path(LOGIN_PATH)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::hours(1))
        .build()
}

pub fn login_csrf_removal() -> Cookie<'static> {
    Cookie::build((LOGIN_CSRF_COOKIE, "")).path(LOGIN_PATH).build()
}

/// Whether the submitted sign-in token matches the one in the jar.
pub fn verify_login_csrf(jar: &CookieJar, submitted: &str) -> bool {
    match jar.get(LOGIN_CSRF_COOKIE).map(|c| c.value_trimmed()) {
        Some(expected) if !expected.is_empty() => constant_time_compare(expected, submitted),
        _ => false,
    }
}

/// Look up the live session named by the request's session cookie.
pub fn session_from_headers(headers: &HeaderMap, state: &AppState) -> Option<(String, AdminSession)> {
    let jar = CookieJar::from_headers(headers);
    let id = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value_trimmed())
        .filter(|id| !id.is_empty())?;
    state.sessions.get(id).map(|session| (id.to_string(), session))
}

/// A signed-in admin. Requests without a live session are redirected to
/// the login page.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub session_id: String,
    pub session: AdminSession,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        session_from_headers(&parts.headers, state)
            .map(|(session_id, session)| AdminUser { session_id, session })
            .ok_or_else(|| Redirect::to(LOGIN_PATH))
    }
}

/// The admin session, if any. Public pages use it to show admin links.
#[derive(Debug, Clone)]
pub struct MaybeAdmin(pub Option<AdminSession>);

impl MaybeAdmin {
    pub fn is_admin(&self) -> bool {
        self.0.is_some()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeAdmin {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(MaybeAdmin(session_from_headers(&parts.headers, state).map(|(_, session)| session)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc".to_string(), chrono::Duration::hours(12), false);
        assert_eq!(cookie.name(), "admin_session");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(43_200)));
        assert!(!cookie.to_string().contains("Secure"));
    }

    #[test]
    fn test_session_cookie_secure_flag() {
        let cookie = session_cookie("abc".to_string(), chrono::Duration::hours(1), true);
        assert_eq!(cookie.secure(), Some(true));
        assert!(cookie.to_string().contains("Secure"));
    }

    #[test]
    fn test_session_cookie_max_age_for_longest_ttl() {
        let ttl = chrono::Duration::hours(crate::config::MAX_SESSION_TTL_HOURS);
        let cookie = session_cookie("abc".to_string(), ttl, false);
        assert_eq!(cookie.max_age(), Some(Duration::hours(87_600)));
    }

    #[test]
    fn test_login_csrf_cookie_scoped_to_login_form() {
        let cookie = login_csrf_cookie("tok".to_string(), false);
        assert_eq!(cookie.path(), Some(LOGIN_PATH));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_verify_login_csrf() {
        let jar = CookieJar::new().add(login_csrf_cookie("tok-123".to_string(), false));
        assert!(verify_login_csrf(&jar, "tok-123"));
        assert!(!verify_login_csrf(&jar, "tok-124"));
        assert!(!verify_login_csrf(&jar, ""));
        assert!(!verify_login_csrf(&CookieJar::new(), ""));
        assert!(!verify_login_csrf(&CookieJar::new(), "tok-123"));
    }

    #[test]
    fn test_session_removal_matches_cookie_path() {
        let cookie = session_removal();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.path(), Some("/"));
    }
}
