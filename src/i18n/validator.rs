//! Dictionary validation.
//!
//! Key parity is guaranteed by the `dictionary!` macro. What the compiler
//! cannot see is checked here once at startup: key spelling, duplicate key
//! strings, empty text, and RTL text that carries no RTL script.

use crate::i18n::{Direction, I18nError, Key, LanguageRegistry};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the dictionary unusable
    pub errors: Vec<String>,

    /// Suspicious entries that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Turn the report into a result.
    ///
    /// Errors always fail; warnings fail only when `strict` is set.
    pub fn into_result(self, strict: bool) -> Result<Self, I18nError> {
        if self.has_errors() {
            return Err(I18nError::InvalidDictionary(self.errors));
        }
        if strict && self.has_warnings() {
            return Err(I18nError::InvalidDictionary(self.warnings));
        }
        Ok(self)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the compiled-in dictionary.
pub struct DictionaryValidator;

static KEY_FORMAT_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate every key in the dictionary.
    pub fn validate() -> ValidationReport {
        Self::validate_keys(Key::ALL)
    }

    /// Validate a subset of keys.
    pub fn validate_keys(keys: &[Key]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();
        let languages = LanguageRegistry::get().list_enabled();

        for key in keys {
            let name = key.as_str();

            if !Self::is_well_formed(name) {
                report
                    .errors
                    .push(format!("Malformed key '{}' ({:?})", name, key));
            }

            if !seen.insert(name) {
                report.errors.push(format!("Duplicate key '{}'", name));
            }

            for config in &languages {
                let text = key.text(config.language);

                if text.trim().is_empty() {
                    report
                        .errors
                        .push(format!("Empty {} text for '{}'", config.code, name));
                    continue;
                }

                if config.direction == Direction::Rtl && !Self::contains_rtl_script(text) {
                    report.warnings.push(format!(
                        "No right-to-left script in {} text for '{}': {:?}",
                        config.code, name, text
                    ));
                }
            }
        }

        report
    }

    /// Dotted camelCase segments, e.g. "contact.form.successDesc" or "timeline.2019".
    fn is_well_formed(key: &str) -> bool {
        let regex = KEY_FORMAT_REGEX
            .get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*(\.[a-zA-Z0-9]+)*$").unwrap());
        regex.is_match(key)
    }

    /// Hebrew, Arabic, Syriac, Thaana and the Arabic presentation forms.
    fn contains_rtl_script(text: &str) -> bool {
        text.chars().any(|c| {
            matches!(c,
                '\u{0590}'..='\u{08FF}'
                | '\u{FB1D}'..='\u{FDFF}'
                | '\u{FE70}'..='\u{FEFF}')
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Key Format Tests ====================

    #[test]
    fn test_well_formed_keys() {
        assert!(DictionaryValidator::is_well_formed("nav.home"));
        assert!(DictionaryValidator::is_well_formed("contact.form.successDesc"));
        assert!(DictionaryValidator::is_well_formed("timeline.2019"));
    }

    #[test]
    fn test_malformed_keys() {
        assert!(!DictionaryValidator::is_well_formed(""));
        assert!(!DictionaryValidator::is_well_formed("nav..home"));
        assert!(!DictionaryValidator::is_well_formed(".nav"));
        assert!(!DictionaryValidator::is_well_formed("nav.home."));
        assert!(!DictionaryValidator::is_well_formed("why-petra.title"));
    }

    // ==================== Script Tests ====================

    #[test]
    fn test_contains_rtl_script() {
        assert!(DictionaryValidator::contains_rtl_script("اكتشف بترا"));
        assert!(DictionaryValidator::contains_rtl_script("Petra بترا"));
        assert!(!DictionaryValidator::contains_rtl_script("info@petra-co.com.sy"));
        assert!(!DictionaryValidator::contains_rtl_script("+963 11 000 0000"));
    }

    // ==================== Dictionary Tests ====================

    #[test]
    fn test_dictionary_has_no_errors() {
        let report = DictionaryValidator::validate();
        assert!(!report.has_errors(), "{:?}", report.errors);
    }

    #[test]
    fn test_contact_values_warn_without_failing() {
        let report = DictionaryValidator::validate_keys(&[Key::ContactInfoEmailValue1]);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("contact.info.emailValue1"));
    }

    #[test]
    fn test_translated_key_is_clean() {
        let report = DictionaryValidator::validate_keys(&[Key::PanelTitle, Key::NavHome]);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_duplicate_keys_are_errors() {
        let report = DictionaryValidator::validate_keys(&[Key::NavHome, Key::NavHome]);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Duplicate key 'nav.home'"));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_into_result_lenient_accepts_warnings() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());
        assert!(report.into_result(false).is_ok());
    }

    #[test]
    fn test_into_result_strict_rejects_warnings() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());
        let err = report.into_result(true).unwrap_err();
        assert!(err.to_string().contains("Test warning"));
    }

    #[test]
    fn test_into_result_rejects_errors() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());
        assert!(matches!(
            report.into_result(false),
            Err(I18nError::InvalidDictionary(_))
        ));
    }
}
