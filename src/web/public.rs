//! Public list and detail pages.

use crate::catalog::{self, parse_location_filter};
use crate::db::LocationOrder;
use crate::error::AppResult;
use crate::i18n::{fill, Language};
use crate::models::{Localized, Location};
use crate::web::forms::ListQuery;
use crate::web::locale::Locale;
use crate::web::session::MaybeAdmin;
use crate::web::templates::{
    render, ArticleDetailTemplate, ArticlesTemplate, HomeTemplate, LocationDetailTemplate,
    LocationOption, LocationsTemplate, StatusTemplate, YachtDetailTemplate, YachtsTemplate,
};
use crate::web::views::{
    ArticleCard, ArticleDetail, LocationCard, LocationDetail, Page, YachtCard, YachtDetail,
};
use crate::web::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

/// Records shown per section on the home page.
pub const HOME_SECTION_LIMIT: i64 = 6;

pub fn current_path(uri: &Uri) -> &str {
    uri.path_and_query().map(|p| p.as_str()).unwrap_or("/")
}

/// 404 page with a record-specific message and a way back.
pub fn not_found_page(
    page: Page,
    message: &str,
    back_href: &str,
    back_label: &str,
) -> AppResult<Response> {
    let heading = page.s.not_found_title.to_string();
    let body = render(StatusTemplate {
        page,
        heading,
        message: message.to_string(),
        back_href: back_href.to_string(),
        back_label: back_label.to_string(),
    })?;
    Ok((StatusCode::NOT_FOUND, body).into_response())
}

pub fn location_options(locations: &[Location], selected: Option<Uuid>, lang: Language) -> Vec<LocationOption> {
    locations
        .iter()
        .map(|location| LocationOption {
            id: location.id.to_string(),
            name: location.name(lang).to_string(),
            selected: Some(location.id) == selected,
        })
        .collect()
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: MaybeAdmin,
    uri: Uri,
) -> AppResult<Response> {
    let (featured, locations, counts) = futures::try_join!(
        state.db.list_featured_yachts(HOME_SECTION_LIMIT),
        state
            .db
            .list_active_locations(LocationOrder::Newest, Some(HOME_SECTION_LIMIT)),
        state.db.yacht_counts_by_location(),
    )?;

    let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), "", "home");
    Ok(render(HomeTemplate {
        page,
        featured: featured.iter().map(|y| YachtCard::new(y, lang)).collect(),
        locations: locations
            .iter()
            .map(|l| LocationCard::new(l, &counts, lang))
            .collect(),
    })?
    .into_response())
}

/// GET /yachts, /yachts-list
pub async fn yachts_list(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: MaybeAdmin,
    uri: Uri,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let (yachts, locations) = futures::try_join!(
        state.db.list_active_yachts(),
        state.db.list_active_locations(LocationOrder::Name, None),
    )?;

    let term = query.q.unwrap_or_default();
    let selected = parse_location_filter(query.location.as_deref());
    let yachts = catalog::filter_yachts(yachts, &term, selected, lang);

    let s = lang.strings();
    let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), s.all_yachts, "yachts");
    Ok(render(YachtsTemplate {
        page,
        showing: fill(s.showing_yachts, &[("count", &yachts.len().to_string())]),
        yachts: yachts.iter().map(|y| YachtCard::new(y, lang)).collect(),
        locations: location_options(&locations, selected, lang),
        q: term,
    })?
    .into_response())
}

/// GET /yacht/:id, /yachts/:id
pub async fn yacht_detail(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: MaybeAdmin,
    uri: Uri,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let s = lang.strings();
    let yacht = match Uuid::parse_str(&id) {
        Ok(id) => state.db.get_active_yacht(id).await?,
        Err(_) => None,
    };

    let Some(yacht) = yacht else {
        let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), s.yacht_not_found, "yachts");
        return not_found_page(page, s.yacht_not_found, "/yachts", s.back_to_yachts);
    };

    let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), yacht.name(lang), "yachts");
    Ok(render(YachtDetailTemplate {
        page,
        yacht: YachtDetail::new(&yacht, &state.config, lang),
    })?
    .into_response())
}

/// GET /locations
pub async fn locations_list(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: MaybeAdmin,
    uri: Uri,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let (locations, counts) = futures::try_join!(
        state.db.list_active_locations(LocationOrder::Newest, None),
        state.db.yacht_counts_by_location(),
    )?;

    let term = query.q.unwrap_or_default();
    let locations = catalog::search(locations, &term, lang);

    let s = lang.strings();
    let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), s.locations_title, "locations");
    Ok(render(LocationsTemplate {
        page,
        showing: fill(s.showing_locations, &[("count", &locations.len().to_string())]),
        locations: locations
            .iter()
            .map(|l| LocationCard::new(l, &counts, lang))
            .collect(),
        q: term,
    })?
    .into_response())
}

/// GET /location/:id, /locations/:id
pub async fn location_detail(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: MaybeAdmin,
    uri: Uri,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let s = lang.strings();
    let found = match Uuid::parse_str(&id) {
        Ok(id) => {
            let (location, yachts) = futures::try_join!(
                state.db.get_active_location(id),
                state.db.list_yachts_in_location(id),
            )?;
            location.map(|location| (location, yachts))
        }
        Err(_) => None,
    };

    let Some((location, yachts)) = found else {
        let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), s.location_not_found, "locations");
        return not_found_page(page, s.location_not_found, "/locations", s.back_to_locations);
    };

    let name = location.name(lang);
    let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), name, "locations");
    Ok(render(LocationDetailTemplate {
        page,
        heading: fill(s.yachts_in_location, &[("name", name)]),
        location: LocationDetail::new(&location, lang),
        yachts: yachts.iter().map(|y| YachtCard::new(y, lang)).collect(),
    })?
    .into_response())
}

/// GET /articles
pub async fn articles_list(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: MaybeAdmin,
    uri: Uri,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let articles = state.db.list_active_articles().await?;
    let total = articles.len();

    let term = query.q.unwrap_or_default();
    let articles = catalog::search(articles, &term, lang);

    let s = lang.strings();
    let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), s.articles_title, "articles");
    Ok(render(ArticlesTemplate {
        page,
        showing: fill(
            s.showing_articles,
            &[("shown", &articles.len().to_string()), ("total", &total.to_string())],
        ),
        articles: articles.iter().map(|a| ArticleCard::new(a, lang)).collect(),
        q: term.trim().to_string(),
    })?
    .into_response())
}

/// GET /articles/:id
pub async fn article_detail(
    State(state): State<AppState>,
    Locale(lang): Locale,
    admin: MaybeAdmin,
    uri: Uri,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let s = lang.strings();
    let article = match Uuid::parse_str(&id) {
        Ok(id) => state.db.get_active_article(id).await?,
        Err(_) => None,
    };

    let Some(article) = article else {
        let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), s.article_not_found, "articles");
        return not_found_page(page, s.article_not_found, "/articles", s.back_to_articles);
    };

    let page = Page::new(&state.config, lang, admin.0.as_ref(), current_path(&uri), article.name(lang), "articles");
    Ok(render(ArticleDetailTemplate {
        page,
        article: ArticleDetail::new(&article, lang),
    })?
    .into_response())
}
