//! String-keyed lookup over the dictionary.
//!
//! The view layer mostly asks for text by dotted key string. A string that
//! names no key comes back unchanged, so gaps show up in the rendered page
//! instead of failing the render.

use crate::i18n::{Key, Language};
use std::collections::HashMap;
use std::sync::OnceLock;

static KEY_INDEX: OnceLock<HashMap<&'static str, Key>> = OnceLock::new();

fn key_index() -> &'static HashMap<&'static str, Key> {
    KEY_INDEX.get_or_init(|| Key::ALL.iter().map(|key| (key.as_str(), *key)).collect())
}

impl Key {
    /// Parse a dotted key string (e.g., "nav.home"). Exact match only.
    pub fn from_key_str(key: &str) -> Option<Key> {
        key_index().get(key).copied()
    }
}

/// Translate `key` into `language`, falling back to the key itself.
///
/// Pure: the result depends only on the arguments and the static dictionary.
///
/// # Example
/// ```
/// use petra_site::i18n::{t, Language};
///
/// assert_eq!(t(Language::English, "panel.title"), "Discover Petra");
/// assert_eq!(t(Language::Arabic, "no.such.key"), "no.such.key");
/// ```
pub fn t(language: Language, key: &str) -> &str {
    match Key::from_key_str(key) {
        Some(found) => found.text(language),
        None => key,
    }
}

/// Keys under a dotted prefix, in dictionary order.
///
/// `prefix` matches whole segments: "about" selects "about.title" and
/// "about.vision.text" but not "aboutUs.title". A prefix naming a key
/// exactly also selects that key.
pub fn keys_in_namespace(prefix: &str) -> Vec<Key> {
    Key::ALL
        .iter()
        .copied()
        .filter(|key| {
            let candidate = key.as_str();
            candidate == prefix
                || candidate
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== t() Tests ====================

    #[test]
    fn test_t_known_key_english() {
        assert_eq!(t(Language::English, "panel.title"), "Discover Petra");
        assert_eq!(t(Language::English, "nav.home"), "Home");
    }

    #[test]
    fn test_t_known_key_arabic() {
        assert_eq!(t(Language::Arabic, "panel.title"), "اكتشف بترا");
        assert_eq!(t(Language::Arabic, "footer.rights"), "جميع الحقوق محفوظة.");
    }

    #[test]
    fn test_t_missing_key_returns_key() {
        assert_eq!(t(Language::English, "nav.missing"), "nav.missing");
        assert_eq!(t(Language::Arabic, "totally-unknown"), "totally-unknown");
    }

    #[test]
    fn test_t_key_match_is_case_sensitive() {
        assert_eq!(t(Language::English, "PANEL.TITLE"), "PANEL.TITLE");
    }

    #[test]
    fn test_t_is_deterministic() {
        for key in ["nav.home", "panel.title", "missing.key"] {
            for language in [Language::English, Language::Arabic] {
                assert_eq!(t(language, key), t(language, key));
            }
        }
    }

    #[test]
    fn test_t_never_empty_for_known_keys() {
        for key in Key::ALL {
            for language in [Language::English, Language::Arabic] {
                assert!(!t(language, key.as_str()).is_empty(), "{key:?}");
            }
        }
    }

    // ==================== Key Index Tests ====================

    #[test]
    fn test_from_key_str_roundtrips_every_key() {
        for key in Key::ALL {
            assert_eq!(Key::from_key_str(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_from_key_str_unknown() {
        assert_eq!(Key::from_key_str(""), None);
        assert_eq!(Key::from_key_str("nav"), None);
    }

    // ==================== Namespace Tests ====================

    #[test]
    fn test_keys_in_namespace_faq() {
        let keys = keys_in_namespace("faq");
        assert_eq!(keys.first(), Some(&Key::FaqTitle));
        assert_eq!(keys.len(), 14);
    }

    #[test]
    fn test_keys_in_namespace_respects_segment_boundary() {
        let safety = keys_in_namespace("safety");
        assert!(safety.iter().all(|key| key.as_str().starts_with("safety.")));
        assert!(!safety.contains(&Key::SafetySystemsTitle));
    }

    #[test]
    fn test_keys_in_namespace_nested_prefix() {
        let keys = keys_in_namespace("about.vision");
        assert_eq!(keys, vec![Key::AboutVisionTitle, Key::AboutVisionText]);
    }

    #[test]
    fn test_keys_in_namespace_unknown() {
        assert!(keys_in_namespace("nothing").is_empty());
    }
}
