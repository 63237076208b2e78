//! Records stored in the backend tables and the drafts admins submit.
//!
//! Every `_en` / `_ar` pair is selected through [`Localized`] so a rendered
//! block never mixes languages.

use crate::i18n::{Language, DEFAULT_CURRENCY};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub type Timestamp = DateTime<Utc>;

// ==================== Localized ====================

/// A record with bilingual name and description fields.
pub trait Localized {
    fn name_pair(&self) -> (&str, &str);
    fn description_pair(&self) -> (Option<&str>, Option<&str>);

    fn name(&self, lang: Language) -> &str {
        let (en, ar) = self.name_pair();
        lang.t(en, ar)
    }

    /// The description in `lang`, or `None` when that side is blank.
    fn description(&self, lang: Language) -> Option<&str> {
        let (en, ar) = self.description_pair();
        let text = if lang == Language::ARABIC { ar } else { en };
        text.filter(|t| !t.trim().is_empty())
    }
}

// ==================== Locations ====================

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Localized for Location {
    fn name_pair(&self) -> (&str, &str) {
        (&self.name_en, &self.name_ar)
    }

    fn description_pair(&self) -> (Option<&str>, Option<&str>) {
        (self.description_en.as_deref(), self.description_ar.as_deref())
    }
}

/// Fields an admin submits for a location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationDraft {
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&Location> for LocationDraft {
    fn from(location: &Location) -> Self {
        Self {
            name_en: location.name_en.clone(),
            name_ar: location.name_ar.clone(),
            description_en: location.description_en.clone(),
            description_ar: location.description_ar.clone(),
            image_url: location.image_url.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

// ==================== Yacht Images ====================

/// A row from the `yacht_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct YachtImage {
    pub id: Uuid,
    pub yacht_id: Uuid,
    pub image_url: String,
    pub image_path: String,
    pub is_primary: bool,
    pub order_index: i32,
    pub created_at: Timestamp,
}

/// Sort images ascending by `order_index`, keeping insertion order on ties.
pub fn sort_images(images: &mut [YachtImage]) {
    images.sort_by_key(|image| image.order_index);
}

/// The thumbnail image: the first flagged primary, else the first one.
///
/// Expects `images` already sorted with [`sort_images`].
pub fn primary_image(images: &[YachtImage]) -> Option<&YachtImage> {
    images
        .iter()
        .find(|image| image.is_primary)
        .or_else(|| images.first())
}

/// Image row to insert after a successful upload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewYachtImage {
    pub yacht_id: Uuid,
    pub image_url: String,
    pub image_path: String,
    pub is_primary: bool,
    pub order_index: i32,
}

// ==================== Yachts ====================

/// A row from the `yachts` table, with its images and location attached
/// after loading.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Yacht {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub features_en: Vec<String>,
    pub features_ar: Vec<String>,
    pub price: Option<f64>,
    pub price_currency: String,
    pub is_featured: bool,
    pub is_active: bool,
    pub location_id: Option<Uuid>,
    pub contact_whatsapp: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub google_maps_link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(skip)]
    pub images: Vec<YachtImage>,
    #[sqlx(skip)]
    pub location: Option<Location>,
}

impl Yacht {
    pub fn features(&self, lang: Language) -> &[String] {
        if lang == Language::ARABIC {
            &self.features_ar
        } else {
            &self.features_en
        }
    }

    pub fn thumbnail(&self) -> Option<&YachtImage> {
        primary_image(&self.images)
    }

    pub fn currency(&self) -> &str {
        match self.price_currency.trim() {
            "" => DEFAULT_CURRENCY,
            c => c,
        }
    }

    /// Order index for the next uploaded image.
    pub fn next_order_index(&self) -> i32 {
        self.images
            .iter()
            .map(|image| image.order_index + 1)
            .max()
            .unwrap_or(0)
    }
}

impl Localized for Yacht {
    fn name_pair(&self) -> (&str, &str) {
        (&self.name_en, &self.name_ar)
    }

    fn description_pair(&self) -> (Option<&str>, Option<&str>) {
        (self.description_en.as_deref(), self.description_ar.as_deref())
    }
}

/// Fields an admin submits for a yacht.
#[derive(Debug, Clone, PartialEq)]
pub struct YachtDraft {
    pub name_en: String,
    pub name_ar: String,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub features_en: Vec<String>,
    pub features_ar: Vec<String>,
    pub price: Option<f64>,
    pub price_currency: String,
    pub is_featured: bool,
    pub location_id: Option<Uuid>,
    pub contact_whatsapp: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub google_maps_link: Option<String>,
}

impl Default for YachtDraft {
    fn default() -> Self {
        Self {
            name_en: String::new(),
            name_ar: String::new(),
            description_en: None,
            description_ar: None,
            features_en: Vec::new(),
            features_ar: Vec::new(),
            price: None,
            price_currency: DEFAULT_CURRENCY.to_string(),
            is_featured: false,
            location_id: None,
            contact_whatsapp: None,
            contact_phone: None,
            contact_email: None,
            google_maps_link: None,
        }
    }
}

impl From<&Yacht> for YachtDraft {
    fn from(yacht: &Yacht) -> Self {
        Self {
            name_en: yacht.name_en.clone(),
            name_ar: yacht.name_ar.clone(),
            description_en: yacht.description_en.clone(),
            description_ar: yacht.description_ar.clone(),
            features_en: yacht.features_en.clone(),
            features_ar: yacht.features_ar.clone(),
            price: yacht.price,
            price_currency: yacht.price_currency.clone(),
            is_featured: yacht.is_featured,
            location_id: yacht.location_id,
            contact_whatsapp: yacht.contact_whatsapp.clone(),
            contact_phone: yacht.contact_phone.clone(),
            contact_email: yacht.contact_email.clone(),
            google_maps_link: yacht.google_maps_link.clone(),
        }
    }
}

// ==================== Articles ====================

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: Uuid,
    pub title_en: String,
    pub title_ar: String,
    pub content_en: String,
    pub content_ar: String,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Localized for Article {
    fn name_pair(&self) -> (&str, &str) {
        (&self.title_en, &self.title_ar)
    }

    fn description_pair(&self) -> (Option<&str>, Option<&str>) {
        (Some(&self.content_en), Some(&self.content_ar))
    }
}

/// Fields an admin submits for an article.
///
/// `image_url` / `image_path` are only set when a new image was uploaded;
/// `None` keeps the stored image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleDraft {
    pub title_en: String,
    pub title_ar: String,
    pub content_en: String,
    pub content_ar: String,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
}

impl From<&Article> for ArticleDraft {
    fn from(article: &Article) -> Self {
        Self {
            title_en: article.title_en.clone(),
            title_ar: article.title_ar.clone(),
            content_en: article.content_en.clone(),
            content_ar: article.content_ar.clone(),
            image_url: article.image_url.clone(),
            image_path: article.image_path.clone(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    // ==================== Localized Tests ====================

    #[test]
    fn test_name_selects_language_side() {
        let yacht = yacht("Sea Breeze", "نسيم البحر");
        assert_eq!(yacht.name(Language::ENGLISH), "Sea Breeze");
        assert_eq!(yacht.name(Language::ARABIC), "نسيم البحر");
    }

    #[test]
    fn test_description_never_falls_back_to_other_language() {
        let mut yacht = yacht("Sea Breeze", "نسيم البحر");
        yacht.description_en = Some("A fast yacht".to_string());
        assert_eq!(yacht.description(Language::ENGLISH), Some("A fast yacht"));
        assert_eq!(yacht.description(Language::ARABIC), None);
    }

    #[test]
    fn test_blank_description_is_none() {
        let mut location = location("Marina", "المارينا");
        location.description_en = Some("   ".to_string());
        assert_eq!(location.description(Language::ENGLISH), None);
    }

    #[test]
    fn test_article_title_and_content_localized() {
        let article = article("Sailing tips", "Always check the wind.");
        assert_eq!(article.name(Language::ENGLISH), "Sailing tips");
        assert_eq!(article.description(Language::ARABIC), Some("محتوى"));
    }

    #[test]
    fn test_features_per_language() {
        let mut yacht = yacht("Sea Breeze", "نسيم البحر");
        yacht.features_en = vec!["Jacuzzi".to_string()];
        yacht.features_ar = vec!["جاكوزي".to_string()];
        assert_eq!(yacht.features(Language::ENGLISH), ["Jacuzzi".to_string()]);
        assert_eq!(yacht.features(Language::ARABIC), ["جاكوزي".to_string()]);
    }

    // ==================== Image Tests ====================

    #[test]
    fn test_sort_images_by_order_index() {
        let id = Uuid::new_v4();
        let mut images = vec![image(id, 2, false), image(id, 0, false), image(id, 1, false)];
        sort_images(&mut images);
        let order: Vec<_> = images.iter().map(|i| i.order_index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_images_is_stable() {
        let id = Uuid::new_v4();
        let first = image(id, 1, false);
        let second = image(id, 1, true);
        let (first_id, second_id) = (first.id, second.id);
        let mut images = vec![first, second];
        sort_images(&mut images);
        assert_eq!(images[0].id, first_id);
        assert_eq!(images[1].id, second_id);
    }

    #[test]
    fn test_primary_image_prefers_flag() {
        let id = Uuid::new_v4();
        let images = vec![image(id, 0, false), image(id, 1, true)];
        assert_eq!(primary_image(&images).unwrap().order_index, 1);
    }

    #[test]
    fn test_primary_image_falls_back_to_first() {
        let id = Uuid::new_v4();
        let images = vec![image(id, 0, false), image(id, 1, false)];
        assert_eq!(primary_image(&images).unwrap().order_index, 0);
        assert!(primary_image(&[]).is_none());
    }

    #[test]
    fn test_next_order_index_continues_after_max() {
        let mut yacht = yacht("A", "ا");
        assert_eq!(yacht.next_order_index(), 0);
        yacht.images = vec![image(yacht.id, 0, true), image(yacht.id, 4, false)];
        assert_eq!(yacht.next_order_index(), 5);
    }

    #[test]
    fn test_currency_defaults_to_usd() {
        let mut yacht = yacht("A", "ا");
        yacht.price_currency = String::new();
        assert_eq!(yacht.currency(), "USD");
    }

    #[test]
    fn test_draft_from_yacht_roundtrips_fields() {
        let mut yacht = yacht("Sea Breeze", "نسيم البحر");
        yacht.price = Some(1000.0);
        let draft = YachtDraft::from(&yacht);
        assert_eq!(draft.name_en, "Sea Breeze");
        assert_eq!(draft.price, Some(1000.0));
        assert_eq!(draft.price_currency, "USD");
    }
}
