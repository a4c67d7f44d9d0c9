//! Language resolution from URL paths.
//!
//! The address is the only source of truth for the active language: every
//! request derives a fresh `LanguageState` from its path, and switching
//! language means navigating to a rewritten path. Nothing here holds state.

use crate::i18n::{t, Direction, Language, LanguageRegistry};
use serde::Serialize;

/// Language and direction derived from one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageState {
    pub language: Language,
    pub direction: Direction,
}

impl LanguageState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            direction: language.direction(),
        }
    }

    /// Translate `key` in this state's language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        t(self.language, key)
    }
}

/// A navigation target produced by a language switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path (and query, if any) to navigate to
    pub to: String,

    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

/// Resolve a raw language segment to a supported language.
///
/// Exact, case-sensitive match against enabled codes; anything else,
/// including a missing segment, yields the default language.
///
/// # Example
/// ```
/// use petra_site::i18n::{resolve, Language};
///
/// assert_eq!(resolve(Some("en")), Language::English);
/// assert_eq!(resolve(Some("EN")), Language::Arabic);
/// assert_eq!(resolve(None), Language::Arabic);
/// ```
pub fn resolve(raw: Option<&str>) -> Language {
    let registry = LanguageRegistry::get();
    raw.and_then(|code| registry.get_by_code(code))
        .filter(|config| config.enabled)
        .map(|config| config.language)
        .unwrap_or_else(|| registry.default_language().language)
}

/// Resolve the language of a `/{lang}/{rest}` path.
pub fn resolve_path(path: &str) -> LanguageState {
    let (segment, _) = split_language_segment(strip_query(path).0);
    let raw = (!segment.is_empty()).then_some(segment);
    LanguageState::new(resolve(raw))
}

/// Rewrite `current_path` so it points at the same page in `target`.
///
/// Only the language segment changes; the rest of the path and any query
/// string are kept. Returns `None` when `target` is already the active
/// language of `current_path`, so no navigation happens.
///
/// # Example
/// ```
/// use petra_site::i18n::{switch_language, Language};
///
/// let nav = switch_language("/en/contact", Language::Arabic).unwrap();
/// assert_eq!(nav.to, "/ar/contact");
/// assert!(nav.replace);
/// assert!(switch_language("/en/contact", Language::English).is_none());
/// ```
pub fn switch_language(current_path: &str, target: Language) -> Option<Navigation> {
    if resolve_path(current_path).language == target {
        return None;
    }

    let (path, query) = strip_query(current_path);
    let (_, rest) = split_language_segment(path);

    let mut to = format!("/{}", target.code());
    match rest.map(|rest| rest.trim_start_matches('/')) {
        Some(rest) if !rest.is_empty() => {
            to.push('/');
            to.push_str(rest);
        }
        _ => {}
    }
    to.push_str(query);

    Some(Navigation { to, replace: true })
}

/// Split a request path into its raw language segment and page route.
///
/// `/en/about?tab=1` gives `("en", "about")`. The segment is not validated;
/// pass the same path to `resolve_path` for the language.
pub fn split_route(path: &str) -> (&str, &str) {
    let (segment, rest) = split_language_segment(strip_query(path).0);
    (segment, rest.unwrap_or("").trim_start_matches('/'))
}

/// Prefix a route path with a language segment (`/about` -> `/ar/about`).
pub fn lang_link(language: Language, path: &str) -> String {
    match path.trim_start_matches('/') {
        "" => home_path(language),
        route => format!("/{}/{}", language.code(), route),
    }
}

/// Home page of a language (`/ar`).
pub fn home_path(language: Language) -> String {
    format!("/{}", language.code())
}

/// Split a path at the first `?` or `#`; the second half keeps its marker.
fn strip_query(path: &str) -> (&str, &str) {
    match path.find(['?', '#']) {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    }
}

/// Split `/{segment}/{rest}` into its first segment and the remainder.
fn split_language_segment(path: &str) -> (&str, Option<&str>) {
    let path = path.strip_prefix('/').unwrap_or(path);
    match path.split_once('/') {
        Some((segment, rest)) => (segment, Some(rest)),
        None => (path, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_supported_codes() {
        assert_eq!(resolve(Some("en")), Language::English);
        assert_eq!(resolve(Some("ar")), Language::Arabic);
    }

    #[test]
    fn test_resolve_missing_uses_default() {
        assert_eq!(resolve(None), Language::Arabic);
    }

    #[test]
    fn test_resolve_unsupported_uses_default() {
        assert_eq!(resolve(Some("xx")), Language::Arabic);
        assert_eq!(resolve(Some("")), Language::Arabic);
        assert_eq!(resolve(Some("english")), Language::Arabic);
    }

    #[test]
    fn test_resolve_no_case_normalization() {
        assert_eq!(resolve(Some("EN")), Language::Arabic);
        assert_eq!(resolve(Some(" en")), Language::Arabic);
    }

    // ==================== resolve_path Tests ====================

    #[test]
    fn test_resolve_path_english() {
        let state = resolve_path("/en/services");
        assert_eq!(state.language, Language::English);
        assert_eq!(state.direction, Direction::Ltr);
    }

    #[test]
    fn test_resolve_path_arabic_is_rtl() {
        let state = resolve_path("/ar");
        assert_eq!(state.language, Language::Arabic);
        assert_eq!(state.direction, Direction::Rtl);
    }

    #[test]
    fn test_resolve_path_root_and_garbage() {
        assert_eq!(resolve_path("/").language, Language::Arabic);
        assert_eq!(resolve_path("").language, Language::Arabic);
        assert_eq!(resolve_path("/xx/about").language, Language::Arabic);
    }

    #[test]
    fn test_resolve_path_ignores_query() {
        assert_eq!(resolve_path("/en?x=1").language, Language::English);
        assert_eq!(resolve_path("/en#top").language, Language::English);
    }

    #[test]
    fn test_state_translates() {
        let state = LanguageState::new(Language::English);
        assert_eq!(state.t("panel.title"), "Discover Petra");
        assert_eq!(state.t("not.a.key"), "not.a.key");
    }

    // ==================== switch_language Tests ====================

    #[test]
    fn test_switch_preserves_route() {
        let nav = switch_language("/en/services", Language::Arabic).unwrap();
        assert_eq!(nav.to, "/ar/services");

        let nav = switch_language("/en/contact", Language::Arabic).unwrap();
        assert_eq!(nav.to, "/ar/contact");
    }

    #[test]
    fn test_switch_same_language_is_noop() {
        assert_eq!(switch_language("/ar/about", Language::Arabic), None);
        assert_eq!(switch_language("/en", Language::English), None);
    }

    #[test]
    fn test_switch_replaces_history() {
        let nav = switch_language("/ar/safety", Language::English).unwrap();
        assert!(nav.replace);
    }

    #[test]
    fn test_switch_keeps_query_and_fragment() {
        let nav = switch_language("/en/services?tab=storage#top", Language::Arabic).unwrap();
        assert_eq!(nav.to, "/ar/services?tab=storage#top");
    }

    #[test]
    fn test_switch_nested_route() {
        let nav = switch_language("/ar/about/team/en", Language::English).unwrap();
        assert_eq!(nav.to, "/en/about/team/en");
    }

    #[test]
    fn test_switch_home_and_root() {
        assert_eq!(switch_language("/ar", Language::English).unwrap().to, "/en");
        assert_eq!(switch_language("/", Language::English).unwrap().to, "/en");
        assert_eq!(switch_language("/", Language::Arabic), None);
    }

    #[test]
    fn test_switch_from_unsupported_segment() {
        // "/xx/about" is active in the default language, so only English navigates.
        assert_eq!(switch_language("/xx/about", Language::Arabic), None);
        let nav = switch_language("/xx/about", Language::English).unwrap();
        assert_eq!(nav.to, "/en/about");
    }

    #[test]
    fn test_switch_round_trip_returns_to_start() {
        let there = switch_language("/en/why-petra", Language::Arabic).unwrap();
        let back = switch_language(&there.to, Language::English).unwrap();
        assert_eq!(back.to, "/en/why-petra");
    }

    #[test]
    fn test_switch_collapses_empty_segments() {
        let nav = switch_language("/en//about", Language::Arabic).unwrap();
        assert_eq!(nav.to, "/ar/about");
        assert_eq!(switch_language("/en/", Language::Arabic).unwrap().to, "/ar");
        assert_eq!(switch_language("/en/?q=1", Language::Arabic).unwrap().to, "/ar?q=1");
    }

    // ==================== split_route Tests ====================

    #[test]
    fn test_split_route() {
        assert_eq!(split_route("/en/about?tab=1"), ("en", "about"));
        assert_eq!(split_route("/en"), ("en", ""));
        assert_eq!(split_route("/en/"), ("en", ""));
        assert_eq!(split_route("/%65n/about"), ("%65n", "about"));
        assert_eq!(split_route("/ar/about/team"), ("ar", "about/team"));
    }

    #[test]
    fn test_split_route_agrees_with_resolve_path() {
        for path in ["/en/about", "/%65n/about", "/xx", "/EN/services", "/ar/"] {
            let (segment, _) = split_route(path);
            assert_eq!(resolve(Some(segment)), resolve_path(path).language, "{}", path);
        }
    }

    // ==================== Link Tests ====================

    #[test]
    fn test_lang_link() {
        assert_eq!(lang_link(Language::Arabic, "/about"), "/ar/about");
        assert_eq!(lang_link(Language::English, "services"), "/en/services");
        assert_eq!(lang_link(Language::English, "/"), "/en");
        assert_eq!(lang_link(Language::Arabic, ""), "/ar");
    }

    #[test]
    fn test_home_path() {
        assert_eq!(home_path(Language::Arabic), "/ar");
        assert_eq!(home_path(Language::English), "/en");
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_resolve_is_total(raw in ".*") {
            let language = resolve(Some(&raw));
            prop_assert!(LanguageRegistry::get().is_enabled(language.code()));
        }

        #[test]
        fn prop_resolve_is_idempotent(raw in proptest::option::of("[a-zA-Z]{0,3}")) {
            let once = resolve(raw.as_deref());
            prop_assert_eq!(resolve(Some(once.code())), once);
        }

        #[test]
        fn prop_switch_only_touches_language_segment(rest in "[a-z\\-]{1,12}(/[a-z]{1,8}){0,2}") {
            let from = format!("/en/{rest}");
            let nav = switch_language(&from, Language::Arabic).unwrap();
            prop_assert_eq!(nav.to, format!("/ar/{rest}"));
            prop_assert!(switch_language(&from, Language::English).is_none());
        }
    }
}
