//! View models handed to the templates.
//!
//! Everything here is already localized; templates only lay it out.

use crate::auth::AdminSession;
use crate::config::Config;
use crate::contact::{self, ContactLinks};
use crate::i18n::{excerpt, fill, format_date, format_price, Language, LanguageStrings};
use crate::models::{Article, Localized, Location, Yacht};
use crate::security::is_web_url;
use crate::web::locale::switch_href;
use chrono::{Datelike, Utc};
use std::collections::HashMap;

/// Characters kept in article card excerpts.
pub const EXCERPT_CHARS: usize = 150;

/// Features shown on a yacht card.
const CARD_FEATURES: usize = 3;

/// Shared layout data: language, navigation, footer.
#[derive(Debug, Clone)]
pub struct Page {
    pub lang: &'static str,
    pub dir: &'static str,
    pub s: &'static LanguageStrings,
    pub title: String,
    pub nav: &'static str,
    pub switch_href: String,
    pub switch_label: &'static str,
    pub switch_title: &'static str,
    pub is_admin: bool,
    pub csrf_token: String,
    pub contact: ContactLinks,
    pub year: i32,
}

impl Page {
    pub fn new(
        config: &Config,
        lang: Language,
        admin: Option<&AdminSession>,
        current_path: &str,
        title: &str,
        nav: &'static str,
    ) -> Self {
        let s = lang.strings();
        let title = if title.is_empty() {
            s.brand_name.to_string()
        } else {
            format!("{} | {}", title, s.brand_name)
        };
        let other = lang.other();

        Self {
            lang: lang.code(),
            dir: lang.dir(),
            s,
            title,
            nav,
            switch_href: switch_href(other, current_path),
            switch_label: other.config().switch_label,
            switch_title: other.native_name(),
            is_admin: admin.is_some(),
            csrf_token: admin.map(|a| a.csrf_token.clone()).unwrap_or_default(),
            contact: contact::site_links(config, lang),
            year: Utc::now().year(),
        }
    }
}

// ==================== Cards ====================

#[derive(Debug, Clone)]
pub struct YachtCard {
    pub href: String,
    pub name: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub features: Vec<String>,
    pub featured: bool,
}

impl YachtCard {
    pub fn new(yacht: &Yacht, lang: Language) -> Self {
        Self {
            href: format!("/yacht/{}", yacht.id),
            name: yacht.name(lang).to_string(),
            description: yacht.description(lang).map(str::to_string),
            thumbnail: yacht.thumbnail().map(|image| image.image_url.clone()),
            price: yacht.price.map(|price| format_price(price, yacht.currency())),
            location: yacht.location.as_ref().map(|l| l.name(lang).to_string()),
            features: yacht
                .features(lang)
                .iter()
                .take(CARD_FEATURES)
                .cloned()
                .collect(),
            featured: yacht.is_featured,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocationCard {
    pub href: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub yacht_count: String,
}

impl LocationCard {
    pub fn new(location: &Location, counts: &HashMap<uuid::Uuid, usize>, lang: Language) -> Self {
        let count = counts.get(&location.id).copied().unwrap_or(0);
        Self {
            href: format!("/location/{}", location.id),
            name: location.name(lang).to_string(),
            description: location.description(lang).map(str::to_string),
            image_url: location.image_url.clone().filter(|url| !url.is_empty()),
            yacht_count: fill(lang.strings().yacht_count, &[("count", &count.to_string())]),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleCard {
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub date: String,
}

impl ArticleCard {
    pub fn new(article: &Article, lang: Language) -> Self {
        Self {
            href: format!("/articles/{}", article.id),
            title: article.name(lang).to_string(),
            excerpt: excerpt(article.description(lang).unwrap_or_default(), EXCERPT_CHARS),
            image_url: article.image_url.clone().filter(|url| !url.is_empty()),
            date: format_date(lang, &article.created_at),
        }
    }
}

// ==================== Details ====================

#[derive(Debug, Clone)]
pub struct ImageView {
    pub url: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone)]
pub struct YachtDetail {
    pub name: String,
    pub description: Option<String>,
    pub images: Vec<ImageView>,
    pub features: Vec<String>,
    pub price: Option<String>,
    pub location_name: Option<String>,
    pub location_href: Option<String>,
    pub map_link: Option<String>,
    pub contact: ContactLinks,
    pub featured: bool,
}

impl YachtDetail {
    pub fn new(yacht: &Yacht, config: &Config, lang: Language) -> Self {
        Self {
            name: yacht.name(lang).to_string(),
            description: yacht.description(lang).map(str::to_string),
            images: yacht
                .images
                .iter()
                .map(|image| ImageView {
                    url: image.image_url.clone(),
                    is_primary: image.is_primary,
                })
                .collect(),
            features: yacht.features(lang).to_vec(),
            price: yacht.price.map(|price| format_price(price, yacht.currency())),
            location_name: yacht.location.as_ref().map(|l| l.name(lang).to_string()),
            location_href: yacht.location.as_ref().map(|l| format!("/location/{}", l.id)),
            map_link: yacht
                .google_maps_link
                .clone()
                .filter(|link| is_web_url(link)),
            contact: contact::yacht_links(config, yacht, lang),
            featured: yacht.is_featured,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocationDetail {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub map_link: Option<String>,
}

impl LocationDetail {
    pub fn new(location: &Location, lang: Language) -> Self {
        let map_link = match (location.latitude, location.longitude) {
            (Some(lat), Some(lng)) => Some(format!("https://www.google.com/maps?q={},{}", lat, lng)),
            _ => None,
        };
        Self {
            name: location.name(lang).to_string(),
            description: location.description(lang).map(str::to_string),
            image_url: location.image_url.clone().filter(|url| !url.is_empty()),
            map_link,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleDetail {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image_url: Option<String>,
    pub date: String,
}

impl ArticleDetail {
    pub fn new(article: &Article, lang: Language) -> Self {
        Self {
            title: article.name(lang).to_string(),
            paragraphs: article
                .description(lang)
                .unwrap_or_default()
                .split('\n')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            image_url: article.image_url.clone().filter(|url| !url.is_empty()),
            date: format_date(lang, &article.created_at),
        }
    }
}

// ==================== Admin ====================

/// A row in one of the dashboard tables.
#[derive(Debug, Clone)]
pub struct AdminRow {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub edit_href: String,
    pub delete_action: String,
}

impl AdminRow {
    pub fn yacht(yacht: &Yacht, lang: Language) -> Self {
        let price = yacht
            .price
            .map(|price| format_price(price, yacht.currency()))
            .unwrap_or_else(|| lang.strings().price_on_request.to_string());
        let subtitle = match &yacht.location {
            Some(location) => format!("{} · {}", location.name(lang), price),
            None => price,
        };
        Self {
            id: yacht.id.to_string(),
            title: yacht.name(lang).to_string(),
            subtitle,
            edit_href: format!("/admin/yachts/{}/edit", yacht.id),
            delete_action: format!("/admin/yachts/{}/delete", yacht.id),
        }
    }

    pub fn location(location: &Location, counts: &HashMap<uuid::Uuid, usize>, lang: Language) -> Self {
        let count = counts.get(&location.id).copied().unwrap_or(0);
        Self {
            id: location.id.to_string(),
            title: location.name(lang).to_string(),
            subtitle: fill(lang.strings().yacht_count, &[("count", &count.to_string())]),
            edit_href: format!("/admin/locations/{}/edit", location.id),
            delete_action: format!("/admin/locations/{}/delete", location.id),
        }
    }

    pub fn article(article: &Article, lang: Language) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.name(lang).to_string(),
            subtitle: format_date(lang, &article.created_at),
            edit_href: format!("/admin/articles/{}/edit", article.id),
            delete_action: format!("/admin/articles/{}/delete", article.id),
        }
    }
}

/// Outcome of the previous admin action, carried in `?msg=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    YachtSaved,
    YachtDeleted,
    LocationSaved,
    LocationDeleted,
    ArticleSaved,
    ArticleDeleted,
    ImagesUpdated,
    YachtError,
    LocationError,
    ArticleError,
    DeleteError,
}

impl Notice {
    pub fn key(&self) -> &'static str {
        match self {
            Notice::YachtSaved => "yacht_saved",
            Notice::YachtDeleted => "yacht_deleted",
            Notice::LocationSaved => "location_saved",
            Notice::LocationDeleted => "location_deleted",
            Notice::ArticleSaved => "article_saved",
            Notice::ArticleDeleted => "article_deleted",
            Notice::ImagesUpdated => "images_updated",
            Notice::YachtError => "yacht_error",
            Notice::LocationError => "location_error",
            Notice::ArticleError => "article_error",
            Notice::DeleteError => "delete_error",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [
            Notice::YachtSaved,
            Notice::YachtDeleted,
            Notice::LocationSaved,
            Notice::LocationDeleted,
            Notice::ArticleSaved,
            Notice::ArticleDeleted,
            Notice::ImagesUpdated,
            Notice::YachtError,
            Notice::LocationError,
            Notice::ArticleError,
            Notice::DeleteError,
        ]
        .into_iter()
        .find(|notice| notice.key() == key)
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::YachtError | Notice::LocationError | Notice::ArticleError | Notice::DeleteError
        )
    }

    pub fn message(&self, lang: Language) -> &'static str {
        let s = lang.strings();
        match self {
            Notice::YachtSaved => s.yacht_saved,
            Notice::YachtDeleted => s.yacht_deleted,
            Notice::LocationSaved => s.location_saved,
            Notice::LocationDeleted => s.location_deleted,
            Notice::ArticleSaved => s.article_saved,
            Notice::ArticleDeleted => s.article_deleted,
            Notice::ImagesUpdated => s.image_updated,
            Notice::YachtError => s.error_saving_yacht,
            Notice::LocationError => s.error_saving_location,
            Notice::ArticleError => s.error_saving_article,
            Notice::DeleteError => s.error_deleting,
        }
    }

    /// Dashboard URL showing this notice on `tab`.
    pub fn redirect_url(&self, tab: &str, failed_uploads: usize) -> String {
        let mut url = format!("/admin?tab={}&msg={}", tab, self.key());
        if failed_uploads > 0 {
            url.push_str(&format!("&failed={}", failed_uploads));
        }
        url
    }
}

/// Rendered flash message.
#[derive(Debug, Clone)]
pub struct Flash {
    pub message: String,
    pub is_error: bool,
}

impl Flash {
    pub fn from_query(msg: Option<&str>, failed: Option<usize>, lang: Language) -> Option<Self> {
        let notice = Notice::from_key(msg?)?;
        let mut message = notice.message(lang).to_string();
        let failed = failed.unwrap_or(0);
        if failed > 0 {
            message.push_str(". ");
            message.push_str(&fill(lang.strings().images_failed, &[("count", &failed.to_string())]));
        }
        Some(Self {
            message,
            is_error: notice.is_error() || failed > 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{article, image, location, yacht};

    // ==================== Card Tests ====================

    #[test]
    fn test_yacht_card_english_and_arabic() {
        let mut y = yacht("Sea Breeze", "نسيم البحر");
        y.price = Some(1000.0);

        let en = YachtCard::new(&y, Language::ENGLISH);
        assert_eq!(en.name, "Sea Breeze");
        assert_eq!(en.price.as_deref(), Some("1000 USD"));
        assert_eq!(en.href, format!("/yacht/{}", y.id));
        assert!(en.thumbnail.is_none());

        let ar = YachtCard::new(&y, Language::ARABIC);
        assert_eq!(ar.name, "نسيم البحر");
        assert_eq!(ar.price, en.price);
        assert_eq!(ar.href, en.href);
    }

    #[test]
    fn test_yacht_card_thumbnail_is_primary_image() {
        let mut y = yacht("Sea Breeze", "نسيم البحر");
        y.images = vec![image(y.id, 0, false), image(y.id, 1, true)];
        let card = YachtCard::new(&y, Language::ENGLISH);
        assert_eq!(card.thumbnail, Some(y.images[1].image_url.clone()));
    }

    #[test]
    fn test_yacht_card_limits_features() {
        let mut y = yacht("Sea Breeze", "نسيم البحر");
        y.features_en = vec!["A", "B", "C", "D"].into_iter().map(String::from).collect();
        assert_eq!(YachtCard::new(&y, Language::ENGLISH).features.len(), 3);
    }

    #[test]
    fn test_location_card_count() {
        let l = location("Marina", "المارينا");
        let counts = HashMap::from([(l.id, 4)]);
        assert_eq!(LocationCard::new(&l, &counts, Language::ENGLISH).yacht_count, "4 Yachts");
        assert_eq!(LocationCard::new(&l, &HashMap::new(), Language::ARABIC).yacht_count, "0 يخت");
    }

    #[test]
    fn test_article_card_excerpt_and_date() {
        let a = article("Sailing tips", &"x".repeat(200));
        let card = ArticleCard::new(&a, Language::ENGLISH);
        assert_eq!(card.excerpt.chars().count(), 153);
        assert_eq!(card.date, "January 5, 2025");
        assert_eq!(card.href, format!("/articles/{}", a.id));
    }

    // ==================== Detail Tests ====================

    #[test]
    fn test_yacht_detail_contact_and_map() {
        let config = Config::test_default();
        let mut y = yacht("Sea Breeze", "نسيم البحر");
        y.google_maps_link = Some(" ".to_string());
        let detail = YachtDetail::new(&y, &config, Language::ENGLISH);
        assert!(detail.map_link.is_none());

        y.google_maps_link = Some("javascript:alert(1)".to_string());
        assert!(YachtDetail::new(&y, &config, Language::ENGLISH).map_link.is_none());

        y.google_maps_link = Some("https://maps.google.com/?q=sokhna".to_string());
        assert_eq!(
            YachtDetail::new(&y, &config, Language::ENGLISH).map_link.as_deref(),
            Some("https://maps.google.com/?q=sokhna")
        );
        assert_eq!(detail.contact.phone, "tel:01064283248");
    }

    #[test]
    fn test_location_detail_map_needs_both_coordinates() {
        let mut l = location("Marina", "المارينا");
        l.latitude = Some(29.6);
        assert!(LocationDetail::new(&l, Language::ENGLISH).map_link.is_none());
        l.longitude = Some(32.3);
        assert_eq!(
            LocationDetail::new(&l, Language::ENGLISH).map_link.as_deref(),
            Some("https://www.google.com/maps?q=29.6,32.3")
        );
    }

    #[test]
    fn test_article_detail_splits_paragraphs() {
        let a = article("Tips", "First line\n\n  Second line  \n");
        assert_eq!(ArticleDetail::new(&a, Language::ENGLISH).paragraphs, vec!["First line", "Second line"]);
    }

    // ==================== Admin Row Tests ====================

    #[test]
    fn test_location_row_stays_in_one_language() {
        let l = location("Marina", "المارينا");
        let counts = HashMap::from([(l.id, 2)]);

        let row = AdminRow::location(&l, &counts, Language::ENGLISH);
        assert_eq!(row.title, "Marina");
        assert_eq!(row.subtitle, "2 Yachts");

        let row = AdminRow::location(&l, &HashMap::new(), Language::ARABIC);
        assert_eq!(row.title, "المارينا");
        assert_eq!(row.subtitle, "0 يخت");
        assert!(!row.subtitle.contains("Marina"));
    }

    // ==================== Notice Tests ====================

    #[test]
    fn test_notice_key_roundtrip() {
        assert_eq!(Notice::from_key("yacht_saved"), Some(Notice::YachtSaved));
        assert_eq!(Notice::from_key("<script>"), None);
    }

    #[test]
    fn test_flash_with_failed_uploads() {
        let flash = Flash::from_query(Some("yacht_saved"), Some(2), Language::ENGLISH).unwrap();
        assert_eq!(flash.message, "Yacht saved successfully. 2 image(s) failed to upload");
        assert!(flash.is_error);
    }

    #[test]
    fn test_redirect_url() {
        assert_eq!(Notice::YachtSaved.redirect_url("yachts", 0), "/admin?tab=yachts&msg=yacht_saved");
        assert_eq!(
            Notice::YachtSaved.redirect_url("yachts", 1),
            "/admin?tab=yachts&msg=yacht_saved&failed=1"
        );
    }

    #[test]
    fn test_page_layout_values() {
        let config = Config::test_default();
        let page = Page::new(&config, Language::ARABIC, None, "/yachts", "اليخوت", "yachts");
        assert_eq!(page.lang, "ar");
        assert_eq!(page.dir, "rtl");
        assert_eq!(page.switch_label, "EN");
        assert_eq!(page.switch_title, "English");
        assert_eq!(page.switch_href, "/lang/en?next=%2Fyachts");
        assert_eq!(page.title, "اليخوت | السخنة");
        assert!(!page.is_admin);
    }
}
