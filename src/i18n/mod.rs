//! Internationalization (i18n) module for the bilingual site.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe Language value, text selection and string tables
//! - `strings`: Centralized localized UI strings
//! - `format`: Per-language dates, prices and excerpts
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::Language;
//!
//! // Get canonical language (English)
//! let canonical = Language::canonical();
//!
//! // Create language from code
//! let arabic = Language::from_code("ar")?;
//! assert_eq!(arabic.dir(), "rtl");
//!
//! // The switcher offers the other language
//! assert_eq!(arabic.other(), canonical);
//! ```

mod format;
mod language;
mod registry;
mod strings;

pub use format::{excerpt, format_date, format_price, DEFAULT_CURRENCY};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
pub use strings::{fill, LanguageStrings, ARABIC_STRINGS, ENGLISH_STRINGS};
