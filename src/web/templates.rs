use crate::error::{AppError, AppResult};
use crate::web::forms::{ArticleFormValues, LocationFormValues, YachtFormValues};
use crate::web::views::{
    AdminRow, ArticleCard, ArticleDetail, Flash, LocationCard, LocationDetail, Page, YachtCard,
    YachtDetail,
};
use askama::Template;
use axum::response::Html;

/// Option in the location dropdowns.
#[derive(Debug, Clone)]
pub struct LocationOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// An existing yacht image on the edit form.
#[derive(Debug, Clone)]
pub struct AdminImage {
    pub url: String,
    pub is_primary: bool,
    pub delete_action: String,
    pub primary_action: String,
}

pub fn render<T: Template>(template: T) -> AppResult<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("Failed to render template")))
}

// ==================== Public ====================

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: Page,
    pub featured: Vec<YachtCard>,
    pub locations: Vec<LocationCard>,
}

#[derive(Template)]
#[template(path = "yachts.html")]
pub struct YachtsTemplate {
    pub page: Page,
    pub yachts: Vec<YachtCard>,
    pub locations: Vec<LocationOption>,
    pub q: String,
    pub showing: String,
}

#[derive(Template)]
#[template(path = "yacht_detail.html")]
pub struct YachtDetailTemplate {
    pub page: Page,
    pub yacht: YachtDetail,
}

#[derive(Template)]
#[template(path = "locations.html")]
pub struct LocationsTemplate {
    pub page: Page,
    pub locations: Vec<LocationCard>,
    pub q: String,
    pub showing: String,
}

#[derive(Template)]
#[template(path = "location_detail.html")]
pub struct LocationDetailTemplate {
    pub page: Page,
    pub location: LocationDetail,
    pub heading: String,
    pub yachts: Vec<YachtCard>,
}

#[derive(Template)]
#[template(path = "articles.html")]
pub struct ArticlesTemplate {
    pub page: Page,
    pub articles: Vec<ArticleCard>,
    pub q: String,
    pub showing: String,
}

#[derive(Template)]
#[template(path = "article_detail.html")]
pub struct ArticleDetailTemplate {
    pub page: Page,
    pub article: ArticleDetail,
}

/// Not-found and error pages.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    pub page: Page,
    pub heading: String,
    pub message: String,
    pub back_href: String,
    pub back_label: String,
}

// ==================== Admin ====================

#[derive(Template)]
#[template(path = "admin_login.html")]
pub struct AdminLoginTemplate {
    pub page: Page,
    pub csrf_token: String,
    pub email: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
pub struct AdminDashboardTemplate {
    pub page: Page,
    pub tab: &'static str,
    pub flash: Option<Flash>,
    pub rows: Vec<AdminRow>,
    pub add_href: &'static str,
    pub add_label: &'static str,
    pub yacht_count: usize,
    pub location_count: usize,
    pub article_count: usize,
}

#[derive(Template)]
#[template(path = "yacht_form.html")]
pub struct YachtFormTemplate {
    pub page: Page,
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub values: YachtFormValues,
    pub locations: Vec<LocationOption>,
    pub images: Vec<AdminImage>,
    pub flash: Option<Flash>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "location_form.html")]
pub struct LocationFormTemplate {
    pub page: Page,
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub values: LocationFormValues,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "article_form.html")]
pub struct ArticleFormTemplate {
    pub page: Page,
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub values: ArticleFormValues,
    pub image_url: Option<String>,
    pub error: Option<String>,
}
