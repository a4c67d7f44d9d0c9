//! Document language tag and direction.
//!
//! The resolved language is written to the rendering environment as two
//! attributes. `DirectionSync` only writes when the language changes.

use crate::i18n::{Direction, Language};

/// Anything that carries a document language tag and a text direction.
pub trait RenderEnvironment {
    fn set_lang(&mut self, tag: &str);
    fn set_dir(&mut self, dir: Direction);
}

/// Root element attributes of a rendered HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot {
    pub lang: String,
    pub dir: Direction,
}

impl DocumentRoot {
    /// Attributes for a document in `language`.
    pub fn for_language(language: Language) -> Self {
        let mut root = Self::default();
        DirectionSync::new().sync(&mut root, language);
        root
    }

    /// `lang="…" dir="…"` attribute pair for the `<html>` tag.
    pub fn html_attributes(&self) -> String {
        format!(r#"lang="{}" dir="{}""#, self.lang, self.dir)
    }
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self {
            lang: String::new(),
            dir: Direction::Ltr,
        }
    }
}

impl RenderEnvironment for DocumentRoot {
    fn set_lang(&mut self, tag: &str) {
        self.lang = tag.to_string();
    }

    fn set_dir(&mut self, dir: Direction) {
        self.dir = dir;
    }
}

/// Tracks the last language written to an environment.
#[derive(Debug, Default)]
pub struct DirectionSync {
    applied: Option<Language>,
}

impl DirectionSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `language`'s tag and direction to `env` unless it is already applied.
    ///
    /// Returns `true` when the environment was written.
    pub fn sync<E: RenderEnvironment>(&mut self, env: &mut E, language: Language) -> bool {
        if self.applied == Some(language) {
            return false;
        }

        env.set_lang(language.code());
        env.set_dir(language.direction());
        self.applied = Some(language);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingEnv {
        writes: usize,
        root: DocumentRoot,
    }

    impl RenderEnvironment for RecordingEnv {
        fn set_lang(&mut self, tag: &str) {
            self.writes += 1;
            self.root.set_lang(tag);
        }

        fn set_dir(&mut self, dir: Direction) {
            self.writes += 1;
            self.root.set_dir(dir);
        }
    }

    #[test]
    fn test_for_language_arabic() {
        let root = DocumentRoot::for_language(Language::Arabic);
        assert_eq!(root.lang, "ar");
        assert_eq!(root.dir, Direction::Rtl);
        assert_eq!(root.html_attributes(), r#"lang="ar" dir="rtl""#);
    }

    #[test]
    fn test_for_language_english() {
        let root = DocumentRoot::for_language(Language::English);
        assert_eq!(root.html_attributes(), r#"lang="en" dir="ltr""#);
    }

    #[test]
    fn test_sync_writes_only_on_change() {
        let mut env = RecordingEnv::default();
        let mut sync = DirectionSync::new();

        assert!(sync.sync(&mut env, Language::English));
        assert!(!sync.sync(&mut env, Language::English));
        assert_eq!(env.writes, 2);

        assert!(sync.sync(&mut env, Language::Arabic));
        assert_eq!(env.writes, 4);
        assert_eq!(env.root.dir, Direction::Rtl);
        assert!(!sync.sync(&mut env, Language::Arabic));
        assert_eq!(env.writes, 4);
    }

    #[test]
    fn test_repeated_application_is_idempotent() {
        let mut first = DocumentRoot::default();
        let mut second = DocumentRoot::default();
        DirectionSync::new().sync(&mut first, Language::Arabic);
        DirectionSync::new().sync(&mut second, Language::Arabic);
        DirectionSync::new().sync(&mut second, Language::Arabic);
        assert_eq!(first, second);
    }
}
