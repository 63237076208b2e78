//! Language selection carried by the `lang` cookie.

use crate::i18n::Language;
use crate::security::safe_redirect_target;
use axum::async_trait;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;
use serde::Deserialize;
use std::convert::Infallible;

pub const LANG_COOKIE: &str = "lang";

/// The language of the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale(pub Language);

impl Locale {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let jar = CookieJar::from_headers(headers);
        Locale(Language::resolve(jar.get(LANG_COOKIE).map(|c| c.value_trimmed())))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Locale::from_headers(&parts.headers))
    }
}

/// Cookie persisting the language for a year.
pub fn lang_cookie(lang: Language) -> Cookie<'static> {
    Cookie::build((LANG_COOKIE, lang.code()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .build()
}

/// Link that switches to `lang` and comes back to `current`.
pub fn switch_href(lang: Language, current: &str) -> String {
    format!("/lang/{}?next={}", lang.code(), urlencoding::encode(current))
}

#[derive(Debug, Deserialize)]
pub struct SwitchQuery {
    pub next: Option<String>,
}

/// GET /lang/:code
pub async fn switch_language(
    jar: CookieJar,
    Path(code): Path<String>,
    Query(query): Query<SwitchQuery>,
) -> impl IntoResponse {
    let lang = Language::resolve(Some(&code));
    let target = safe_redirect_target(query.next.as_deref()).to_string();
    (jar.add(lang_cookie(lang)), Redirect::to(&target))
}
