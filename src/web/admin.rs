//! Admin login, dashboard and content forms.

use crate::auth::AuthError;
use crate::catalog::count_by_location;
use crate::db::LocationOrder;
use crate::error::{AppError, AppResult};
use crate::i18n::Language;
use crate::models::{ArticleDraft, Location, NewYachtImage, Yacht};
use crate::security::random_token;
use crate::storage::{article_image_path, yacht_image_path, StorageClient};
use crate::web::forms::{
    ArticleFormValues, CsrfForm, DashboardQuery, FormError, LocationFormValues, LoginForm,
    MultipartForm, NoticeQuery, UploadedFile, YachtFormValues,
};
use crate::web::locale::Locale;
use crate::web::public::{current_path, location_options};
use crate::web::session::{
    login_csrf_cookie, login_csrf_removal, session_cookie, session_removal, verify_login_csrf,
    AdminUser, MaybeAdmin,
};
use crate::web::templates::{
    render, AdminDashboardTemplate, AdminImage, AdminLoginTemplate, ArticleFormTemplate,
    LocationFormTemplate, LocationOption, YachtFormTemplate,
};
use crate::web::views::{AdminRow, Flash, Notice, Page};
use crate::web::AppState;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use std::future::Future;
use tracing::{info, warn};
use uuid::Uuid;

fn admin_page(state: &AppState, lang: Language, admin: &AdminUser, uri: &Uri, title: &str) -> Page {
    Page::new(&state.config, lang, Some(&admin.session), current_path(uri), title, "admin")
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

fn check_csrf(admin: &AdminUser, submitted: &str) -> Result<(), FormError> {
    if admin.session.verify_csrf(submitted) {
        Ok(())
    } else {
        Err(FormError::SessionExpired)
    }
}

/// Reject a form-encoded POST with a stale or forged CSRF token.
fn require_csrf(admin: &AdminUser, submitted: &str) -> AppResult<()> {
    check_csrf(admin, submitted).map_err(|_| AppError::BadRequest("CSRF token mismatch".to_string()))
}

// ==================== Login ====================

/// Render the sign-in form with a fresh double-submit token.
fn login_form(
    state: &AppState,
    jar: CookieJar,
    lang: Language,
    uri: &Uri,
    email: String,
    error: Option<String>,
) -> AppResult<(CookieJar, Html<String>)> {
    let token = random_token();
    let page = Page::new(&state.config, lang, None, current_path(uri), lang.strings().admin_login, "admin");
    let body = render(AdminLoginTemplate {
        page,
        csrf_token: token.clone(),
        email,
        error,
    })?;
    Ok((jar.add(login_csrf_cookie(token, state.config.cookie_secure)), body))
}

/// GET /admin-login
pub async fn login_page(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: MaybeAdmin,
    jar: CookieJar,
    uri: Uri,
) -> AppResult<Response> {
    if admin.is_admin() {
        return Ok(Redirect::to("/admin").into_response());
    }
    Ok(login_form(&state, jar, lang, &uri, String::new(), None)?.into_response())
}

/// POST /admin-login
pub async fn login_submit(
    State(state): State<AppState>,
    Locale(lang): Locale,
    jar: CookieJar,
    uri: Uri,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let s = lang.strings();
    let email = form.email.trim().to_string();

    if !verify_login_csrf(&jar, &form.csrf_token) {
        warn!("Sign-in rejected: login token mismatch");
        let page = login_form(&state, jar, lang, &uri, email, Some(s.session_expired.to_string()))?;
        return Ok((StatusCode::FORBIDDEN, page).into_response());
    }

    let result = if email.is_empty() || form.password.is_empty() {
        Err(AuthError::InvalidCredentials)
    } else {
        match state.auth.sign_in(&email, &form.password).await {
            Ok(session) if !state.config.is_admin_email(&session.email) => {
                warn!(email = %session.email, "Sign-in rejected: not an admin email");
                state.auth.sign_out(&session.access_token).await;
                Err(AuthError::InvalidCredentials)
            }
            other => other,
        }
    };

    match result {
        Ok(session) => {
            let id = state.sessions.create(session);
            let cookie = session_cookie(id, state.sessions.ttl(), state.config.cookie_secure);
            let jar = jar.remove(login_csrf_removal()).add(cookie);
            Ok((jar, Redirect::to("/admin")).into_response())
        }
        Err(err) => {
            let (status, message) = match &err {
                AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, s.login_error),
                AuthError::Backend(e) => {
                    warn!("Admin sign-in failed: {:#}", e);
                    (StatusCode::BAD_GATEWAY, s.login_failed)
                }
            };
            let page = login_form(&state, jar, lang, &uri, email, Some(message.to_string()))?;
            Ok((status, page).into_response())
        }
    }
}

/// POST /admin/logout
pub async fn logout(
    State(state): State<AppState>,
    admin: AdminUser,
    jar: CookieJar,
    Form(form): Form<CsrfForm>,
) -> AppResult<Response> {
    require_csrf(&admin, &form.csrf_token)?;

    state.auth.sign_out(&admin.session.access_token).await;
    state.sessions.remove(&admin.session_id);
    info!(email = %admin.session.email, "Admin signed out");

    Ok((jar.remove(session_removal()), Redirect::to("/")).into_response())
}

// ==================== Dashboard ====================

/// GET /admin, /admin-panel
pub async fn dashboard(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Response> {
    let (yachts, locations, articles) = futures::try_join!(
        state.db.list_active_yachts(),
        state.db.list_active_locations(LocationOrder::Newest, None),
        state.db.list_active_articles(),
    )?;

    let s = lang.strings();
    let (tab, rows, add_href, add_label) = match query.tab.as_deref() {
        Some("locations") => {
            let location_ids: Vec<_> = yachts.iter().map(|y| y.location_id).collect();
            let counts = count_by_location(&location_ids);
            (
                "locations",
                locations.iter().map(|l| AdminRow::location(l, &counts, lang)).collect(),
                "/admin/locations/new",
                s.add_location,
            )
        }
        Some("articles") => (
            "articles",
            articles.iter().map(|a| AdminRow::article(a, lang)).collect(),
            "/admin/articles/new",
            s.add_article,
        ),
        _ => (
            "yachts",
            yachts.iter().map(|y| AdminRow::yacht(y, lang)).collect(),
            "/admin/yachts/new",
            s.add_yacht,
        ),
    };

    let page = admin_page(&state, lang, &admin, &uri, s.admin_panel);
    Ok(render(AdminDashboardTemplate {
        page,
        tab,
        flash: Flash::from_query(query.msg.as_deref(), query.failed, lang),
        rows,
        add_href,
        add_label,
        yacht_count: yachts.len(),
        location_count: locations.len(),
        article_count: articles.len(),
    })?
    .into_response())
}

// ==================== Yachts ====================

/// Active locations plus the yacht's stored one, even if it has since been
/// deactivated. Without it the form would post an empty location.
fn yacht_location_options(
    active: &[Location],
    current: Option<&Location>,
    selected: Option<Uuid>,
    lang: Language,
) -> Vec<LocationOption> {
    let mut options = location_options(active, selected, lang);
    if let Some(current) = current.filter(|c| !active.iter().any(|l| l.id == c.id)) {
        options.extend(location_options(std::slice::from_ref(current), selected, lang));
    }
    options
}

#[allow(clippy::too_many_arguments)]
async fn render_yacht_form(
    state: &AppState,
    lang: Language,
    admin: &AdminUser,
    uri: &Uri,
    yacht: Option<&Yacht>,
    values: YachtFormValues,
    flash: Option<Flash>,
    error: Option<FormError>,
) -> AppResult<Response> {
    let s = lang.strings();
    let active = state.db.list_active_locations(LocationOrder::Name, None).await?;
    let selected = Uuid::parse_str(values.location_id.trim()).ok();
    let current = yacht.and_then(|yacht| yacht.location.as_ref());

    let (heading, action, submit_label) = match yacht {
        Some(yacht) => (s.edit_yacht, format!("/admin/yachts/{}", yacht.id), s.update),
        None => (s.add_yacht, "/admin/yachts".to_string(), s.create),
    };
    let images = yacht
        .map(|yacht| {
            yacht
                .images
                .iter()
                .map(|image| AdminImage {
                    url: image.image_url.clone(),
                    is_primary: image.is_primary,
                    delete_action: format!("/admin/yachts/{}/images/{}/delete", yacht.id, image.id),
                    primary_action: format!("/admin/yachts/{}/images/{}/primary", yacht.id, image.id),
                })
                .collect()
        })
        .unwrap_or_default();

    let status = if error.is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    let body = render(YachtFormTemplate {
        page: admin_page(state, lang, admin, uri, heading),
        heading: heading.to_string(),
        action,
        submit_label: submit_label.to_string(),
        values,
        locations: yacht_location_options(&active, current, selected, lang),
        images,
        flash,
        error: error.map(|e| e.message(lang).to_string()),
    })?;
    Ok((status, body).into_response())
}

/// Upload files one at a time and hand each stored file to `record`.
///
/// Returns how many files failed to upload or record. The first recorded
/// image becomes primary when the yacht has none; order indexes continue
/// after the current max.
async fn store_yacht_images<F, Fut>(
    storage: &StorageClient,
    bucket: &str,
    yacht: &Yacht,
    files: Vec<UploadedFile>,
    mut record: F,
) -> usize
where
    F: FnMut(NewYachtImage) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let mut failed = 0;
    let mut stored = 0;
    let needs_primary = !yacht.images.iter().any(|image| image.is_primary);
    let first_index = yacht.next_order_index();

    for (i, file) in files.into_iter().enumerate() {
        let path = yacht_image_path(yacht.id, i, &file.file_name);
        let result = match storage.upload(bucket, &path, file.bytes, &file.content_type).await {
            Ok(object) => {
                record(NewYachtImage {
                    yacht_id: yacht.id,
                    image_url: object.public_url,
                    image_path: object.path,
                    is_primary: needs_primary && stored == 0,
                    order_index: first_index + stored,
                })
                .await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => stored += 1,
            Err(e) => {
                warn!(yacht_id = %yacht.id, file = %file.file_name, "Image upload failed: {:#}", e);
                failed += 1;
            }
        }
    }

    if stored > 0 {
        info!(yacht_id = %yacht.id, stored, "Stored yacht images");
    }
    failed
}

async fn upload_yacht_images(state: &AppState, yacht: &Yacht, files: Vec<UploadedFile>) -> usize {
    let bucket = &state.config.yacht_images_bucket;
    store_yacht_images(&state.storage, bucket, yacht, files, |image| async move {
        state.db.add_yacht_image(&image).await.map(|_| ())
    })
    .await
}

/// GET /admin/yachts/new
pub async fn yacht_new(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
) -> AppResult<Response> {
    render_yacht_form(&state, lang, &admin, &uri, None, YachtFormValues::blank(), None, None).await
}

/// GET /admin/yachts/:id/edit
pub async fn yacht_edit(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    Path(id): Path<String>,
    Query(query): Query<NoticeQuery>,
) -> AppResult<Response> {
    let yacht = state.db.get_yacht(parse_id(&id)?).await?.ok_or(AppError::NotFound)?;
    let values = YachtFormValues::from_yacht(&yacht);
    let flash = Flash::from_query(query.msg.as_deref(), None, lang);
    render_yacht_form(&state, lang, &admin, &uri, Some(&yacht), values, flash, None).await
}

/// POST /admin/yachts
pub async fn yacht_create(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    multipart: Multipart,
) -> AppResult<Response> {
    let mut form = MultipartForm::read(multipart).await?;
    let values = YachtFormValues::from_multipart(&form);

    let draft = match check_csrf(&admin, &form.text("csrf_token")).and_then(|_| values.validate()) {
        Ok(draft) => draft,
        Err(err) => return render_yacht_form(&state, lang, &admin, &uri, None, values, None, Some(err)).await,
    };

    let created = match state.db.create_yacht(&draft).await {
        Ok(id) => state.db.get_yacht(id).await,
        Err(e) => Err(e),
    };
    let yacht = match created {
        Ok(Some(yacht)) => yacht,
        Ok(None) => return Err(AppError::NotFound),
        Err(e) => {
            warn!("Error saving yacht: {:#}", e);
            return Ok(Redirect::to(&Notice::YachtError.redirect_url("yachts", 0)).into_response());
        }
    };

    let failed = upload_yacht_images(&state, &yacht, form.take_files("images")).await;
    Ok(Redirect::to(&Notice::YachtSaved.redirect_url("yachts", failed)).into_response())
}

/// POST /admin/yachts/:id
pub async fn yacht_update(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    let yacht = state.db.get_yacht(id).await?.ok_or(AppError::NotFound)?;

    let mut form = MultipartForm::read(multipart).await?;
    let values = YachtFormValues::from_multipart(&form);

    let draft = match check_csrf(&admin, &form.text("csrf_token")).and_then(|_| values.validate()) {
        Ok(draft) => draft,
        Err(err) => {
            return render_yacht_form(&state, lang, &admin, &uri, Some(&yacht), values, None, Some(err)).await
        }
    };

    match state.db.update_yacht(id, &draft).await {
        Ok(true) => info!(yacht_id = %id, "Yacht updated"),
        Ok(false) => return Err(AppError::NotFound),
        Err(e) => {
            warn!(yacht_id = %id, "Error saving yacht: {:#}", e);
            return Ok(Redirect::to(&Notice::YachtError.redirect_url("yachts", 0)).into_response());
        }
    }

    let failed = upload_yacht_images(&state, &yacht, form.take_files("images")).await;
    Ok(Redirect::to(&Notice::YachtSaved.redirect_url("yachts", failed)).into_response())
}

/// POST /admin/yachts/:id/delete
pub async fn yacht_delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    Form(form): Form<CsrfForm>,
) -> AppResult<Response> {
    require_csrf(&admin, &form.csrf_token)?;
    let notice = match state.db.deactivate_yacht(parse_id(&id)?).await {
        Ok(true) => Notice::YachtDeleted,
        Ok(false) => return Err(AppError::NotFound),
        Err(e) => {
            warn!("Error deleting yacht: {:#}", e);
            Notice::DeleteError
        }
    };
    Ok(Redirect::to(&notice.redirect_url("yachts", 0)).into_response())
}

fn images_updated_url(yacht_id: Uuid) -> String {
    format!("/admin/yachts/{}/edit?msg={}", yacht_id, Notice::ImagesUpdated.key())
}

/// POST /admin/yachts/:id/images/:image_id/delete
pub async fn yacht_image_delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Path((id, image_id)): Path<(String, String)>,
    Form(form): Form<CsrfForm>,
) -> AppResult<Response> {
    require_csrf(&admin, &form.csrf_token)?;
    let (id, image_id) = (parse_id(&id)?, parse_id(&image_id)?);

    if !state.db.delete_yacht_image(id, image_id).await? {
        return Err(AppError::NotFound);
    }
    info!(yacht_id = %id, image_id = %image_id, "Yacht image removed");
    Ok(Redirect::to(&images_updated_url(id)).into_response())
}

/// POST /admin/yachts/:id/images/:image_id/primary
pub async fn yacht_image_primary(
    State(state): State<AppState>,
    admin: AdminUser,
    Path((id, image_id)): Path<(String, String)>,
    Form(form): Form<CsrfForm>,
) -> AppResult<Response> {
    require_csrf(&admin, &form.csrf_token)?;
    let (id, image_id) = (parse_id(&id)?, parse_id(&image_id)?);

    if !state.db.set_primary_image(id, image_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Redirect::to(&images_updated_url(id)).into_response())
}

// ==================== Locations ====================

fn render_location_form(
    state: &AppState,
    lang: Language,
    admin: &AdminUser,
    uri: &Uri,
    id: Option<Uuid>,
    values: LocationFormValues,
    error: Option<FormError>,
) -> AppResult<Response> {
    let s = lang.strings();
    let (heading, action, submit_label) = match id {
        Some(id) => (s.edit_location, format!("/admin/locations/{}", id), s.update),
        None => (s.add_location, "/admin/locations".to_string(), s.create),
    };
    let status = if error.is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    let body = render(LocationFormTemplate {
        page: admin_page(state, lang, admin, uri, heading),
        heading: heading.to_string(),
        action,
        submit_label: submit_label.to_string(),
        values,
        error: error.map(|e| e.message(lang).to_string()),
    })?;
    Ok((status, body).into_response())
}

/// GET /admin/locations/new
pub async fn location_new(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
) -> AppResult<Response> {
    render_location_form(&state, lang, &admin, &uri, None, LocationFormValues::default(), None)
}

/// GET /admin/locations/:id/edit
pub async fn location_edit(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let location = state.db.get_location(parse_id(&id)?).await?.ok_or(AppError::NotFound)?;
    let values = LocationFormValues::from_location(&location);
    render_location_form(&state, lang, &admin, &uri, Some(location.id), values, None)
}

/// POST /admin/locations
pub async fn location_create(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    Form(values): Form<LocationFormValues>,
) -> AppResult<Response> {
    let draft = match check_csrf(&admin, &values.csrf_token).and_then(|_| values.validate()) {
        Ok(draft) => draft,
        Err(err) => return render_location_form(&state, lang, &admin, &uri, None, values, Some(err)),
    };

    let notice = match state.db.create_location(&draft).await {
        Ok(_) => Notice::LocationSaved,
        Err(e) => {
            warn!("Error saving location: {:#}", e);
            Notice::LocationError
        }
    };
    Ok(Redirect::to(&notice.redirect_url("locations", 0)).into_response())
}

/// POST /admin/locations/:id
pub async fn location_update(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    Path(id): Path<String>,
    Form(values): Form<LocationFormValues>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    let draft = match check_csrf(&admin, &values.csrf_token).and_then(|_| values.validate()) {
        Ok(draft) => draft,
        Err(err) => return render_location_form(&state, lang, &admin, &uri, Some(id), values, Some(err)),
    };

    let notice = match state.db.update_location(id, &draft).await {
        Ok(true) => Notice::LocationSaved,
        Ok(false) => return Err(AppError::NotFound),
        Err(e) => {
            warn!(location_id = %id, "Error saving location: {:#}", e);
            Notice::LocationError
        }
    };
    Ok(Redirect::to(&notice.redirect_url("locations", 0)).into_response())
}

/// POST /admin/locations/:id/delete
pub async fn location_delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    Form(form): Form<CsrfForm>,
) -> AppResult<Response> {
    require_csrf(&admin, &form.csrf_token)?;
    let notice = match state.db.deactivate_location(parse_id(&id)?).await {
        Ok(true) => Notice::LocationDeleted,
        Ok(false) => return Err(AppError::NotFound),
        Err(e) => {
            warn!("Error deleting location: {:#}", e);
            Notice::DeleteError
        }
    };
    Ok(Redirect::to(&notice.redirect_url("locations", 0)).into_response())
}

// ==================== Articles ====================

#[allow(clippy::too_many_arguments)]
fn render_article_form(
    state: &AppState,
    lang: Language,
    admin: &AdminUser,
    uri: &Uri,
    id: Option<Uuid>,
    values: ArticleFormValues,
    image_url: Option<String>,
    error: Option<FormError>,
) -> AppResult<Response> {
    let s = lang.strings();
    let (heading, action, submit_label) = match id {
        Some(id) => (s.edit_article, format!("/admin/articles/{}", id), s.update),
        None => (s.add_article, "/admin/articles".to_string(), s.create),
    };
    let status = if error.is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    let body = render(ArticleFormTemplate {
        page: admin_page(state, lang, admin, uri, heading),
        heading: heading.to_string(),
        action,
        submit_label: submit_label.to_string(),
        values,
        image_url,
        error: error.map(|e| e.message(lang).to_string()),
    })?;
    Ok((status, body).into_response())
}

/// Upload the article image, if one was chosen, and attach it to the draft.
async fn attach_article_image(
    state: &AppState,
    draft: &mut ArticleDraft,
    file: Option<UploadedFile>,
) -> anyhow::Result<()> {
    let Some(file) = file else {
        return Ok(());
    };
    let path = article_image_path(&file.file_name);
    let object = state
        .storage
        .upload(&state.config.article_images_bucket, &path, file.bytes, &file.content_type)
        .await?;
    draft.image_url = Some(object.public_url);
    draft.image_path = Some(object.path);
    Ok(())
}

/// GET /admin/articles/new
pub async fn article_new(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
) -> AppResult<Response> {
    render_article_form(&state, lang, &admin, &uri, None, ArticleFormValues::default(), None, None)
}

/// GET /admin/articles/:id/edit
pub async fn article_edit(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let article = state.db.get_article(parse_id(&id)?).await?.ok_or(AppError::NotFound)?;
    let values = ArticleFormValues::from_article(&article);
    render_article_form(&state, lang, &admin, &uri, Some(article.id), values, article.image_url, None)
}

/// POST /admin/articles
pub async fn article_create(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    multipart: Multipart,
) -> AppResult<Response> {
    let mut form = MultipartForm::read(multipart).await?;
    let values = ArticleFormValues::from_multipart(&form);

    let mut draft = match check_csrf(&admin, &form.text("csrf_token")).and_then(|_| values.validate()) {
        Ok(draft) => draft,
        Err(err) => return render_article_form(&state, lang, &admin, &uri, None, values, None, Some(err)),
    };

    let file = form.take_files("image").into_iter().next();
    let saved = match attach_article_image(&state, &mut draft, file).await {
        Ok(()) => state.db.create_article(&draft).await.map(|_| ()),
        Err(e) => Err(e),
    };

    let notice = match saved {
        Ok(()) => Notice::ArticleSaved,
        Err(e) => {
            warn!("Error saving article: {:#}", e);
            Notice::ArticleError
        }
    };
    Ok(Redirect::to(&notice.redirect_url("articles", 0)).into_response())
}

/// POST /admin/articles/:id
pub async fn article_update(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: AdminUser,
    uri: Uri,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    let article = state.db.get_article(id).await?.ok_or(AppError::NotFound)?;

    let mut form = MultipartForm::read(multipart).await?;
    let values = ArticleFormValues::from_multipart(&form);

    let mut draft = match check_csrf(&admin, &form.text("csrf_token")).and_then(|_| values.validate()) {
        Ok(draft) => draft,
        Err(err) => {
            return render_article_form(&state, lang, &admin, &uri, Some(id), values, article.image_url, Some(err))
        }
    };

    let file = form.take_files("image").into_iter().next();
    let saved = match attach_article_image(&state, &mut draft, file).await {
        Ok(()) => state.db.update_article(id, &draft).await,
        Err(e) => Err(e),
    };

    let notice = match saved {
        Ok(true) => Notice::ArticleSaved,
        Ok(false) => return Err(AppError::NotFound),
        Err(e) => {
            warn!(article_id = %id, "Error saving article: {:#}", e);
            Notice::ArticleError
        }
    };
    Ok(Redirect::to(&notice.redirect_url("articles", 0)).into_response())
}

/// POST /admin/articles/:id/delete
pub async fn article_delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    Form(form): Form<CsrfForm>,
) -> AppResult<Response> {
    require_csrf(&admin, &form.csrf_token)?;
    let notice = match state.db.deactivate_article(parse_id(&id)?).await {
        Ok(true) => Notice::ArticleDeleted,
        Ok(false) => return Err(AppError::NotFound),
        Err(e) => {
            warn!("Error deleting article: {:#}", e);
            Notice::DeleteError
        }
    };
    Ok(Redirect::to(&notice.redirect_url("articles", 0)).into_response())
}
