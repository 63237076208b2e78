//! HTTP surface: shared state, routes and the error-page layer.

pub mod admin;
pub mod forms;
pub mod locale;
pub mod public;
pub mod session;
pub mod templates;
pub mod views;

use crate::auth::{AuthClient, SessionStore};
use crate::config::Config;
use crate::db::Database;
use crate::error::{AppError, ErrorPage};
use crate::storage::StorageClient;
use anyhow::{Context, Result};
use axum::extract::{DefaultBodyLimit, Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use locale::Locale;
use session::session_from_headers;
use std::sync::Arc;
use std::time::Duration;
use templates::{render, StatusTemplate};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;
use views::Page;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
    pub storage: StorageClient,
    pub auth: AuthClient,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            storage: StorageClient::from_config(http.clone(), &config),
            auth: AuthClient::from_config(http, &config),
            sessions: Arc::new(SessionStore::new(config.session_ttl_hours)),
            config: Arc::new(config),
            db,
        })
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_mb * 1024 * 1024;
    let static_files = ServeDir::new(&state.config.static_dir);

    let public = Router::new()
        .route("/", get(public::home))
        .route("/yachts", get(public::yachts_list))
        .route("/yachts-list", get(public::yachts_list))
        .route("/yacht/:id", get(public::yacht_detail))
        .route("/yachts/:id", get(public::yacht_detail))
        .route("/locations", get(public::locations_list))
        .route("/location/:id", get(public::location_detail))
        .route("/locations/:id", get(public::location_detail))
        .route("/articles", get(public::articles_list))
        .route("/articles/:id", get(public::article_detail))
        .route("/lang/:code", get(locale::switch_language))
        .route("/health", get(health));

    let admin = Router::new()
        .route("/admin-login", get(admin::login_page).post(admin::login_submit))
        .route("/admin/logout", post(admin::logout))
        .route("/admin", get(admin::dashboard))
        .route("/admin-panel", get(admin::dashboard))
        .route("/admin/yachts", post(admin::yacht_create))
        .route("/admin/yachts/new", get(admin::yacht_new))
        .route("/admin/yachts/:id", post(admin::yacht_update))
        .route("/admin/yachts/:id/edit", get(admin::yacht_edit))
        .route("/admin/yachts/:id/delete", post(admin::yacht_delete))
        .route(
            "/admin/yachts/:id/images/:image_id/delete",
            post(admin::yacht_image_delete),
        )
        .route(
            "/admin/yachts/:id/images/:image_id/primary",
            post(admin::yacht_image_primary),
        )
        .route("/admin/locations", post(admin::location_create))
        .route("/admin/locations/new", get(admin::location_new))
        .route("/admin/locations/:id", post(admin::location_update))
        .route("/admin/locations/:id/edit", get(admin::location_edit))
        .route("/admin/locations/:id/delete", post(admin::location_delete))
        .route("/admin/articles", post(admin::article_create))
        .route("/admin/articles/new", get(admin::article_new))
        .route("/admin/articles/:id", post(admin::article_update))
        .route("/admin/articles/:id/edit", get(admin::article_edit))
        .route("/admin/articles/:id/delete", post(admin::article_delete));

    Router::new()
        .merge(public)
        .merge(admin)
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn_with_state(state.clone(), error_pages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Replace the empty body of a failed handler response with the localized
/// status page.
async fn error_pages(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Locale(lang) = Locale::from_headers(request.headers());
    let admin = session_from_headers(request.headers(), &state).map(|(_, session)| session);
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    let response = next.run(request).await;
    let Some(kind) = response.extensions().get::<ErrorPage>().copied() else {
        return response;
    };

    let s = lang.strings();
    let (heading, message) = match kind {
        ErrorPage::NotFound => (s.not_found_title, s.not_found_body),
        ErrorPage::BadRequest | ErrorPage::Internal => (s.error_title, s.error_body),
    };
    let page = Page::new(&state.config, lang, admin.as_ref(), &path, heading, "");
    let template = StatusTemplate {
        page,
        heading: heading.to_string(),
        message: message.to_string(),
        back_href: "/".to_string(),
        back_label: s.back_home.to_string(),
    };

    match render(template) {
        Ok(body) => {
            let (mut parts, _) = response.into_parts();
            parts.headers.remove(CONTENT_LENGTH);
            let page = body.into_response();
            for (name, value) in page.headers() {
                parts.headers.insert(name.clone(), value.clone());
            }
            let (_, body) = page.into_parts();
            Response::from_parts(parts, body)
        }
        Err(e) => {
            error!(error = %e, "Failed to render error page");
            response
        }
    }
}
