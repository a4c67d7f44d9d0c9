//! Language metrics.
//!
//! Counts rendered pages per resolved language and how often a request's
//! language segment had to fall back to the default. Counters are relaxed
//! atomics; the numbers are diagnostic.

use crate::i18n::{Language, LanguageRegistry};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request counters shared by all handlers.
pub struct LanguageMetrics {
    /// Pages rendered, keyed by resolved language
    page_views: HashMap<Language, AtomicUsize>,

    /// Requests whose language segment was missing or unsupported
    fallbacks: AtomicUsize,

    /// Requests for routes that do not exist
    not_found: AtomicUsize,
}

/// Point-in-time view of the counters.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsReport {
    pub page_views: BTreeMap<&'static str, usize>,
    pub total_page_views: usize,
    pub language_fallbacks: usize,
    pub fallback_rate: f64,
    pub not_found: usize,
}

impl LanguageMetrics {
    pub fn new() -> Self {
        let page_views = LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| (config.language, AtomicUsize::new(0)))
            .collect();

        Self {
            page_views,
            fallbacks: AtomicUsize::new(0),
            not_found: AtomicUsize::new(0),
        }
    }

    /// Record a rendered page in `language`.
    pub fn record_page_view(&self, language: Language) {
        if let Some(counter) = self.page_views.get(&language) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a request that fell back to the default language.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request for an unknown route.
    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn page_views(&self, language: Language) -> usize {
        self.page_views
            .get(&language)
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn not_found(&self) -> usize {
        self.not_found.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let page_views: BTreeMap<_, _> = self
            .page_views
            .iter()
            .map(|(language, counter)| (language.code(), counter.load(Ordering::Relaxed)))
            .collect();
        let total: usize = page_views.values().sum();
        let fallbacks = self.fallbacks();
        let fallback_rate = if total > 0 {
            (fallbacks as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            page_views,
            total_page_views: total,
            language_fallbacks: fallbacks,
            fallback_rate,
            not_found: self.not_found(),
        }
    }
}

impl Default for LanguageMetrics {
    fn default() -> Self {
        Self::new()
    }
}
