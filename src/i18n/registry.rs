//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a lazily initialized singleton behind `OnceLock`; it is
//! built on first access and never mutated afterwards.

use crate::i18n::{Direction, Language};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The enumeration value this entry describes
    pub language: Language,

    /// ISO 639-1 language code, also the URL segment (e.g., "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "Arabic")
    pub name: &'static str,

    /// Native name of the language (e.g., "العربية")
    pub native_name: &'static str,

    /// Text direction pages in this language use
    pub direction: Direction,

    /// Whether unresolvable URL segments fall back to this language (exactly one)
    pub is_default: bool,

    /// Whether this language is served
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact, case-sensitive code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// All languages, including disabled ones.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The default language configuration.
    ///
    /// # Panics
    /// Panics if zero or several languages are marked default; that is a
    /// configuration error in `default_languages`.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Languages the site is published in. Arabic comes first and is the default.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::Arabic,
            code: Language::Arabic.code(),
            name: "Arabic",
            native_name: "العربية",
            direction: Direction::Rtl,
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            language: Language::English,
            code: Language::English.code(),
            name: "English",
            native_name: "English",
            direction: Direction::Ltr,
            is_default: false,
            enabled: true,
        },
    ]
}
