//! Lookup and switch observability.
//!
//! Each [`Translator`](crate::Translator) owns one `TranslationMetrics`
//! instance. Counters are atomics so read-only lookups can record without a
//! mutable borrow.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for translation lookups and language switches.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Lookups that found a translation in the active bundle
    lookup_hits: AtomicUsize,

    /// Lookups that fell back to returning the key itself
    lookup_fallbacks: AtomicUsize,

    /// Language switches that completed
    switches: AtomicUsize,

    /// Language switches rejected for an unsupported code
    rejected_switches: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup that resolved to a translated string.
    pub fn record_lookup_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the key literal.
    pub fn record_lookup_fallback(&self) {
        self.lookup_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed language switch.
    pub fn record_switch(&self) {
        self.switches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected language switch.
    pub fn record_rejected_switch(&self) {
        self.rejected_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookup_hits(&self) -> usize {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    pub fn lookup_fallbacks(&self) -> usize {
        self.lookup_fallbacks.load(Ordering::Relaxed)
    }

    pub fn switches(&self) -> usize {
        self.switches.load(Ordering::Relaxed)
    }

    pub fn rejected_switches(&self) -> usize {
        self.rejected_switches.load(Ordering::Relaxed)
    }

    /// Snapshot the counters into a serializable report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.lookup_hits();
        let fallbacks = self.lookup_fallbacks();
        let total_lookups = hits + fallbacks;
        let fallback_rate = if total_lookups > 0 {
            (fallbacks as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookup_hits: hits,
            lookup_fallbacks: fallbacks,
            fallback_rate,
            switches: self.switches(),
            rejected_switches: self.rejected_switches(),
        }
    }
}

/// Point-in-time snapshot of translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Lookups that resolved to a translated string
    pub lookup_hits: usize,

    /// Lookups that fell back to the key literal
    pub lookup_fallbacks: usize,

    /// Fallback share of all lookups, as a percentage (0-100)
    pub fallback_rate: f64,

    /// Completed language switches
    pub switches: usize,

    /// Rejected language switches
    pub rejected_switches: usize,
}
