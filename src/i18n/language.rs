//! Language type: validated language representation.

use crate::i18n::registry::TextDirection;
use crate::i18n::strings::{LanguageStrings, ARABIC_STRINGS, ENGLISH_STRINGS};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// Only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code ("en" or "ar")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const ARABIC: Language = Language { code: "ar" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Resolve an optional, untrusted code (cookie or path segment),
    /// falling back to the canonical language.
    pub fn resolve(code: Option<&str>) -> Language {
        code.map(str::trim)
            .and_then(|code| Language::from_code(&code.to_ascii_lowercase()).ok())
            .unwrap_or_else(Language::canonical)
    }

    /// Get the canonical (source) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Value for the HTML `dir` attribute ("ltr" or "rtl").
    pub fn dir(&self) -> &'static str {
        self.config().direction.as_str()
    }

    pub fn is_rtl(&self) -> bool {
        self.config().direction == TextDirection::Rtl
    }

    /// The other language of the pair, used by the language switcher.
    pub fn other(&self) -> Language {
        if *self == Language::ARABIC {
            Language::ENGLISH
        } else {
            Language::ARABIC
        }
    }

    /// Fixed UI strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        if *self == Language::ARABIC {
            &ARABIC_STRINGS
        } else {
            &ENGLISH_STRINGS
        }
    }

    /// Pick the text matching this language.
    pub fn t<'a>(&self, en_text: &'a str, ar_text: &'a str) -> &'a str {
        if *self == Language::ARABIC {
            ar_text
        } else {
            en_text
        }
    }
}
