//! Admin form payloads and their validation into drafts.

use crate::error::{AppError, AppResult};
use crate::i18n::{Language, DEFAULT_CURRENCY};
use crate::models::{Article, ArticleDraft, Location, LocationDraft, Yacht, YachtDraft};
use crate::security::is_web_url;
use axum::extract::Multipart;
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Body of admin POSTs that carry nothing but the CSRF token.
#[derive(Debug, Deserialize)]
pub struct CsrfForm {
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub location: Option<String>,
}

/// `?msg=` on the yacht edit page after an image action.
#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    pub msg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub msg: Option<String>,
    pub failed: Option<usize>,
}

/// Why a submitted form was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    RequiredFields,
    InvalidPrice,
    InvalidCoordinates,
    InvalidLocation,
    InvalidMapLink,
    SessionExpired,
}

impl FormError {
    pub fn message(&self, lang: Language) -> &'static str {
        let s = lang.strings();
        match self {
            FormError::RequiredFields => s.required_fields,
            FormError::InvalidPrice => s.invalid_price,
            FormError::InvalidCoordinates => s.invalid_coordinates,
            FormError::InvalidLocation => s.invalid_location,
            FormError::InvalidMapLink => s.invalid_map_link,
            FormError::SessionExpired => s.session_expired,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required(value: &str) -> Result<String, FormError> {
    optional(value).ok_or(FormError::RequiredFields)
}

/// Split a comma-separated feature list, dropping blanks.
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number(raw: &str) -> Option<Result<f64, ()>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.parse::<f64>().map_err(|_| ()).and_then(|n| {
        if n.is_finite() {
            Ok(n)
        } else {
            Err(())
        }
    }))
}

// ==================== Uploads ====================

/// A file part from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Text fields and files of a multipart submission.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<(String, UploadedFile)>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;

                    // Browsers send an empty part when no file was chosen
                    if file_name.is_empty() || bytes.is_empty() {
                        continue;
                    }
                    form.files.push((
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        },
                    ));
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn checked(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .map(|v| matches!(v.as_str(), "on" | "true" | "1"))
            .unwrap_or(false)
    }

    pub fn take_files(&mut self, name: &str) -> Vec<UploadedFile> {
        let (matching, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.files).into_iter().partition(|(field, _)| field == name);
        self.files = rest;
        matching.into_iter().map(|(_, file)| file).collect()
    }
}

// ==================== Yacht Form ====================

/// Raw yacht form values, kept as typed so the form can be re-rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YachtFormValues {
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub features_en: String,
    pub features_ar: String,
    pub price: String,
    pub price_currency: String,
    pub location_id: String,
    pub is_featured: bool,
    pub contact_whatsapp: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub google_maps_link: String,
}

impl YachtFormValues {
    pub fn blank() -> Self {
        Self {
            price_currency: DEFAULT_CURRENCY.to_string(),
            ..Default::default()
        }
    }

    pub fn from_yacht(yacht: &Yacht) -> Self {
        Self {
            name_en: yacht.name_en.clone(),
            name_ar: yacht.name_ar.clone(),
            description_en: yacht.description_en.clone().unwrap_or_default(),
            description_ar: yacht.description_ar.clone().unwrap_or_default(),
            features_en: yacht.features_en.join(", "),
            features_ar: yacht.features_ar.join(", "),
            price: yacht.price.map(|p| p.to_string()).unwrap_or_default(),
            price_currency: yacht.price_currency.clone(),
            location_id: yacht.location_id.map(|id| id.to_string()).unwrap_or_default(),
            is_featured: yacht.is_featured,
            contact_whatsapp: yacht.contact_whatsapp.clone().unwrap_or_default(),
            contact_phone: yacht.contact_phone.clone().unwrap_or_default(),
            contact_email: yacht.contact_email.clone().unwrap_or_default(),
            google_maps_link: yacht.google_maps_link.clone().unwrap_or_default(),
        }
    }

    pub fn from_multipart(form: &MultipartForm) -> Self {
        Self {
            name_en: form.text("name_en"),
            name_ar: form.text("name_ar"),
            description_en: form.text("description_en"),
            description_ar: form.text("description_ar"),
            features_en: form.text("features_en"),
            features_ar: form.text("features_ar"),
            price: form.text("price"),
            price_currency: form.text("price_currency"),
            location_id: form.text("location_id"),
            is_featured: form.checked("is_featured"),
            contact_whatsapp: form.text("contact_whatsapp"),
            contact_phone: form.text("contact_phone"),
            contact_email: form.text("contact_email"),
            google_maps_link: form.text("google_maps_link"),
        }
    }

    pub fn validate(&self) -> Result<YachtDraft, FormError> {
        let name_en = required(&self.name_en)?;
        let name_ar = required(&self.name_ar)?;

        let price = match parse_number(&self.price) {
            None => None,
            Some(Ok(price)) if price >= 0.0 => Some(price),
            Some(_) => return Err(FormError::InvalidPrice),
        };

        let location_id = match self.location_id.trim() {
            "" => None,
            raw => Some(Uuid::parse_str(raw).map_err(|_| FormError::InvalidLocation)?),
        };

        let google_maps_link = match optional(&self.google_maps_link) {
            Some(link) if !is_web_url(&link) => return Err(FormError::InvalidMapLink),
            link => link,
        };

        Ok(YachtDraft {
            name_en,
            name_ar,
            description_en: optional(&self.description_en),
            description_ar: optional(&self.description_ar),
            features_en: parse_features(&self.features_en),
            features_ar: parse_features(&self.features_ar),
            price,
            price_currency: optional(&self.price_currency)
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            is_featured: self.is_featured,
            location_id,
            contact_whatsapp: optional(&self.contact_whatsapp),
            contact_phone: optional(&self.contact_phone),
            contact_email: optional(&self.contact_email),
            google_maps_link,
        })
    }
}

// ==================== Location Form ====================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationFormValues {
    pub csrf_token: String,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub image_url: String,
    pub latitude: String,
    pub longitude: String,
}

impl LocationFormValues {
    pub fn from_location(location: &Location) -> Self {
        Self {
            csrf_token: String::new(),
            name_en: location.name_en.clone(),
            name_ar: location.name_ar.clone(),
            description_en: location.description_en.clone().unwrap_or_default(),
            description_ar: location.description_ar.clone().unwrap_or_default(),
            image_url: location.image_url.clone().unwrap_or_default(),
            latitude: location.latitude.map(|v| v.to_string()).unwrap_or_default(),
            longitude: location.longitude.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<LocationDraft, FormError> {
        let name_en = required(&self.name_en)?;
        let name_ar = required(&self.name_ar)?;

        let (latitude, longitude) = match (parse_number(&self.latitude), parse_number(&self.longitude)) {
            (None, None) => (None, None),
            (Some(Ok(lat)), Some(Ok(lng)))
                if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) =>
            {
                (Some(lat), Some(lng))
            }
            _ => return Err(FormError::InvalidCoordinates),
        };

        Ok(LocationDraft {
            name_en,
            name_ar,
            description_en: optional(&self.description_en),
            description_ar: optional(&self.description_ar),
            image_url: optional(&self.image_url),
            latitude,
            longitude,
        })
    }
}

// ==================== Article Form ====================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFormValues {
    pub title_en: String,
    pub title_ar: String,
    pub content_en: String,
    pub content_ar: String,
}

impl ArticleFormValues {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title_en: article.title_en.clone(),
            title_ar: article.title_ar.clone(),
            content_en: article.content_en.clone(),
            content_ar: article.content_ar.clone(),
        }
    }

    pub fn from_multipart(form: &MultipartForm) -> Self {
        Self {
            title_en: form.text("title_en"),
            title_ar: form.text("title_ar"),
            content_en: form.text("content_en"),
            content_ar: form.text("content_ar"),
        }
    }

    /// Validate text fields. The image is attached after upload.
    pub fn validate(&self) -> Result<ArticleDraft, FormError> {
        Ok(ArticleDraft {
            title_en: required(&self.title_en)?,
            title_ar: required(&self.title_ar)?,
            content_en: required(&self.content_en)?,
            content_ar: required(&self.content_ar)?,
            image_url: None,
            image_path: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::yacht;

    fn valid_yacht_values() -> YachtFormValues {
        YachtFormValues {
            name_en: " Sea Breeze ".to_string(),
            name_ar: "نسيم البحر".to_string(),
            features_en: "Jacuzzi, , Sun deck,".to_string(),
            price: "1000".to_string(),
            price_currency: "usd".to_string(),
            ..YachtFormValues::blank()
        }
    }

    // ==================== Yacht Validation ====================

    #[test]
    fn test_yacht_validate_success() {
        let draft = valid_yacht_values().validate().unwrap();
        assert_eq!(draft.name_en, "Sea Breeze");
        assert_eq!(draft.features_en, vec!["Jacuzzi", "Sun deck"]);
        assert!(draft.features_ar.is_empty());
        assert_eq!(draft.price, Some(1000.0));
        assert_eq!(draft.price_currency, "USD");
        assert_eq!(draft.description_en, None);
        assert_eq!(draft.location_id, None);
    }

    #[test]
    fn test_yacht_validate_requires_both_names() {
        let mut values = valid_yacht_values();
        values.name_ar = "   ".to_string();
        assert_eq!(values.validate(), Err(FormError::RequiredFields));
    }

    #[test]
    fn test_yacht_validate_rejects_bad_price() {
        let mut values = valid_yacht_values();
        values.price = "cheap".to_string();
        assert_eq!(values.validate(), Err(FormError::InvalidPrice));
        values.price = "-5".to_string();
        assert_eq!(values.validate(), Err(FormError::InvalidPrice));
        values.price = "".to_string();
        assert_eq!(values.validate().unwrap().price, None);
    }

    #[test]
    fn test_yacht_validate_location() {
        let mut values = valid_yacht_values();
        values.location_id = "nope".to_string();
        assert_eq!(values.validate(), Err(FormError::InvalidLocation));

        let id = Uuid::new_v4();
        values.location_id = id.to_string();
        assert_eq!(values.validate().unwrap().location_id, Some(id));
    }

    #[test]
    fn test_yacht_validate_map_link_scheme() {
        let mut values = valid_yacht_values();
        values.google_maps_link = "javascript:alert(document.cookie)".to_string();
        assert_eq!(values.validate(), Err(FormError::InvalidMapLink));

        values.google_maps_link = " https://maps.app.goo.gl/xyz ".to_string();
        assert_eq!(
            values.validate().unwrap().google_maps_link.as_deref(),
            Some("https://maps.app.goo.gl/xyz")
        );

        values.google_maps_link = "  ".to_string();
        assert_eq!(values.validate().unwrap().google_maps_link, None);
    }

    #[test]
    fn test_yacht_values_from_record() {
        let mut y = yacht("Sea Breeze", "نسيم البحر");
        y.features_en = vec!["Jacuzzi".to_string(), "Sun deck".to_string()];
        y.price = Some(1500.0);
        let values = YachtFormValues::from_yacht(&y);
        assert_eq!(values.features_en, "Jacuzzi, Sun deck");
        assert_eq!(values.price, "1500");
        assert_eq!(values.validate().unwrap(), YachtDraft::from(&y));
    }

    // ==================== Location Validation ====================

    #[test]
    fn test_location_coordinates_both_or_neither() {
        let mut values = LocationFormValues {
            name_en: "Marina".to_string(),
            name_ar: "المارينا".to_string(),
            ..Default::default()
        };
        let draft = values.validate().unwrap();
        assert_eq!((draft.latitude, draft.longitude), (None, None));

        values.latitude = "29.6".to_string();
        assert_eq!(values.validate(), Err(FormError::InvalidCoordinates));

        values.longitude = "32.35".to_string();
        let draft = values.validate().unwrap();
        assert_eq!((draft.latitude, draft.longitude), (Some(29.6), Some(32.35)));

        values.latitude = "200".to_string();
        assert_eq!(values.validate(), Err(FormError::InvalidCoordinates));
    }

    // ==================== Article Validation ====================

    #[test]
    fn test_article_requires_all_text() {
        let values = ArticleFormValues {
            title_en: "Tips".to_string(),
            title_ar: "نصائح".to_string(),
            content_en: "Body".to_string(),
            content_ar: String::new(),
        };
        assert_eq!(values.validate(), Err(FormError::RequiredFields));
    }

    #[test]
    fn test_form_error_messages_localized() {
        assert_eq!(FormError::RequiredFields.message(Language::ENGLISH), "Please fill in all required fields");
        assert_eq!(FormError::RequiredFields.message(Language::ARABIC), "يرجى ملء جميع الحقول المطلوبة");
    }

    #[test]
    fn test_take_files_filters_by_field() {
        let file = |name: &str| UploadedFile {
            file_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![1],
        };
        let mut form = MultipartForm {
            fields: HashMap::new(),
            files: vec![
                ("images".to_string(), file("a.jpg")),
                ("other".to_string(), file("b.jpg")),
                ("images".to_string(), file("c.jpg")),
            ],
        };
        let images = form.take_files("images");
        let names: Vec<_> = images.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "c.jpg"]);
        assert_eq!(form.files.len(), 1);
    }
}
