//! Internationalization (i18n) module for the bilingual site.
//!
//! All language-related logic lives here: which languages exist, how a URL
//! segment becomes an active language, which direction a page flows, and how
//! a content key becomes display text.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: The closed `Language` enumeration and its `Direction`
//! - `dictionary`: Compile-time checked dictionary; every key carries every language
//! - `lookup`: String-keyed lookup with fallback-to-key
//! - `resolver`: URL segment resolution and language switching
//! - `document`: Writes the language tag and direction to the rendering environment
//! - `validator`: Startup sanity checks over the dictionary
//! - `metrics`: Request counters per resolved language
//!
//! # Example
//!
//! ```rust
//! use petra_site::i18n::{resolve_path, t, Direction, Language};
//!
//! let state = resolve_path("/ar/about");
//! assert_eq!(state.language, Language::Arabic);
//! assert_eq!(state.direction, Direction::Rtl);
//! assert_eq!(t(state.language, "panel.title"), "اكتشف بترا");
//! ```

mod dictionary;
mod document;
mod language;
mod lookup;
mod metrics;
mod registry;
mod resolver;
mod validator;

use thiserror::Error;

pub use dictionary::Key;
pub use document::{DirectionSync, DocumentRoot, RenderEnvironment};
pub use language::{Direction, Language};
pub use lookup::{keys_in_namespace, t};
pub use metrics::{LanguageMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{
    home_path, lang_link, resolve, resolve_path, split_route, switch_language, LanguageState,
    Navigation,
};
pub use validator::{DictionaryValidator, ValidationReport};

/// Errors raised by the strict corners of the i18n layer.
///
/// Resolution and lookup never fail; these are only produced by
/// `Language::from_code` and by startup validation.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Language '{0}' is not enabled")]
    LanguageDisabled(String),

    #[error("Dictionary validation failed: {}", .0.join("; "))]
    InvalidDictionary(Vec<String>),
}
