//! Language type: the closed set of languages the site is published in.
//!
//! Adding a language means adding a variant here, an entry in the registry,
//! and a column to every dictionary entry. The dictionary macro refuses to
//! compile until every entry has the new column.

use crate::i18n::{I18nError, LanguageConfig, LanguageRegistry};
use serde::Serialize;
use std::fmt;

/// A supported language.
///
/// Every value of this type is a valid active language; there is no way to
/// construct an unsupported one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

/// Text-flow orientation of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Language {
    /// ISO 639-1 code, also used as the URL segment (e.g., "en", "ar").
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Direction is a pure function of language.
    pub const fn direction(self) -> Direction {
        match self {
            Language::English => Direction::Ltr,
            Language::Arabic => Direction::Rtl,
        }
    }

    /// Strict construction from a language code.
    ///
    /// Unlike [`resolve`](crate::i18n::resolve), this reports unknown and
    /// disabled codes instead of falling back. Matching is exact and
    /// case-sensitive.
    ///
    /// # Example
    /// ```
    /// use petra_site::i18n::Language;
    ///
    /// assert_eq!(Language::from_code("ar").unwrap(), Language::Arabic);
    /// assert!(Language::from_code("AR").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(config.language),
            Some(_) => Err(I18nError::LanguageDisabled(code.to_string())),
            None => Err(I18nError::UnknownLanguage(code.to_string())),
        }
    }

    /// The language used when the URL carries no usable language segment.
    pub fn default_language() -> Language {
        LanguageRegistry::get().default_language().language
    }

    /// Full registry entry for this language.
    ///
    /// # Panics
    /// Panics if the registry has no entry for a variant, which is a
    /// programming error caught by the registry tests.
    pub fn config(self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("every Language variant has a registry entry")
    }

    /// English name of the language (e.g., "Arabic").
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Name of the language in its own script (e.g., "العربية").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the fallback language.
    pub fn is_default(self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Code Tests ====================

    #[test]
    fn test_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Arabic.code(), "ar");
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(Language::Arabic.to_string(), "ar");
        assert_eq!(Direction::Rtl.to_string(), "rtl");
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::English);
        assert_eq!(language.name(), "English");
    }

    #[test]
    fn test_from_code_arabic() {
        let language = Language::from_code("ar").expect("Should succeed");
        assert_eq!(language, Language::Arabic);
        assert_eq!(language.native_name(), "العربية");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(matches!(result, Err(I18nError::UnknownLanguage(_))));
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("Ar").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== Direction Tests ====================

    #[test]
    fn test_direction_mapping_is_fixed() {
        assert_eq!(Language::Arabic.direction(), Direction::Rtl);
        assert_eq!(Language::English.direction(), Direction::Ltr);
    }

    #[test]
    fn test_direction_matches_registry() {
        for config in LanguageRegistry::get().list_all() {
            assert_eq!(config.language.direction(), config.direction);
        }
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Rtl).unwrap();
        assert_eq!(json, "\"rtl\"");
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_language_is_arabic() {
        assert_eq!(Language::default_language(), Language::Arabic);
        assert!(Language::Arabic.is_default());
        assert!(!Language::English.is_default());
    }

    #[test]
    fn test_language_serializes_as_code() {
        let json = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(json, "\"en\"");
    }
}
